use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[display("'{_0}' is not a letter on the sign")]
    UnknownLetter(#[error(not(source))] char),
}
