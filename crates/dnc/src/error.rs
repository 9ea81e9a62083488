use thiserror::Error;

/// Failure raised by the checked entry points.
///
/// Validation always runs before the working copy is made or any counter is
/// touched, so a rejected call leaves both the input and the recorder as they
/// were.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
