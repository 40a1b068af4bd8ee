use thiserror::Error;

/// Failure loading a dotenv source.
///
/// Malformed declarations are not errors; they are skipped and counted in
/// [`LoadReport::skipped`](crate::LoadReport). Only an unreadable source
/// surfaces here, and a failed load never rolls back values that earlier
/// `load`/`set` calls already installed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid UTF-8 input: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
}
