use std::io::Cursor;

use crate::CensorError;

mod properties;

/// Runs the censor end-to-end against an in-memory sink on a
/// current-thread runtime.
fn censor_to_string(numeral: &str) -> Result<(String, usize), CensorError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let mut sink = Cursor::new(Vec::new());
    let count = rt.block_on(crate::write_censored(numeral, &mut sink))?;
    let text = String::from_utf8(sink.into_inner()).expect("digit output is UTF-8");
    Ok((text, count))
}
