use thiserror::Error;

/// Errors produced by [`write_censored`](crate::write_censored).
#[derive(Debug, Error)]
pub enum CensorError {
    /// The numeral did not begin with the required `"3."` prefix.
    #[error("numeral must start with \"3.\"")]
    MissingPrefix,

    /// The sink failed while the censored bytes were being written.
    ///
    /// Nothing is caught or translated here; the underlying error is
    /// handed back as-is.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
