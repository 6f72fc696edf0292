//! The censoring entry point: validate, encode into a pooled buffer,
//! censor in place, write once.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::{error::CensorError, pool, scan};

/// Fixed two-byte prefix every numeral must begin with.
pub const PREFIX: &[u8] = b"3.";

/// Censors the fractional digits of `numeral` and writes the whole numeral
/// to `sink` as UTF-8 bytes, returning the number of censored positions.
///
/// Validation is prefix-only: everything after the leading `"3."` is the
/// fractional sequence, which may be empty. The emitted text always has the
/// same length as the input; only censored positions change, each to
/// [`PLACEHOLDER`](crate::PLACEHOLDER).
///
/// The scan itself is synchronous. The single suspension point is the final
/// `write_all`, so cancellation is the sink's concern; dropping the future
/// still releases the scratch buffer.
///
/// # Errors
///
/// [`CensorError::MissingPrefix`] if `numeral` does not start with `"3."`,
/// reported before any byte reaches the sink. Sink failures propagate
/// unchanged as [`CensorError::Io`].
pub async fn write_censored<W>(numeral: &str, sink: &mut W) -> Result<usize, CensorError>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let bytes = numeral.as_bytes();
    if !bytes.starts_with(PREFIX) {
        return Err(CensorError::MissingPrefix);
    }

    // A &str is already UTF-8, so encoding into the scratch buffer is one
    // byte copy; the scan then mutates that same buffer and the result goes
    // out in a single write. No intermediate strings or arrays.
    let mut buf = pool::shared().acquire(bytes.len());
    buf.extend_from_slice(bytes);
    let censored = scan::censor_fraction(&mut buf[PREFIX.len()..]);
    sink.write_all(&buf).await?;

    Ok(censored)
}
