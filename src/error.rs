use std::fmt::Debug;

use thiserror::Error;

/// Result type used by every conversion in the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Contract violations reported by the reinterpretation functions.
///
/// Every variant describes a caller mistake that is detected before any
/// storage is touched, so a failed call never leaves a partial write behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot read {size} bytes at offset {offset} from a buffer of {len} bytes")]
    OutOfRange {
        offset: usize,
        size: usize,
        len: usize,
    },

    #[error("buffer length {len} is not a multiple of the element size {element_size}")]
    MismatchedLength { len: usize, element_size: usize },

    #[error("buffer too small: {needed} bytes needed, {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("cannot reinterpret a {from}-byte value as a {to}-byte value (limit is 8 bytes)")]
    UnsupportedSize { from: usize, to: usize },

    #[error("type `{0}` is not a fixed-size scalar")]
    NotPrimitive(String),

    #[error("buffer address is not aligned to {align} bytes")]
    Misaligned { align: usize },
}

/// Error returned by the consuming conversions.
///
/// The input buffer is moved into the call, so on failure it is handed back
/// untouched together with the reason.
#[derive(Error, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct CastError<S = Vec<u8>> {
    #[source]
    error: Error,
    input: S,
}

impl<S> CastError<S> {
    pub(crate) fn new(error: Error, input: S) -> Self {
        Self { error, input }
    }

    /// Returns the reason of the failure.
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Returns the buffer that was passed in.
    pub fn into_source(self) -> S {
        self.input
    }

    /// Splits the error into its reason and the original buffer.
    pub fn into_parts(self) -> (Error, S) {
        (self.error, self.input)
    }
}

impl CastError<Vec<u8>> {
    /// Returns the bytes that were passed in.
    pub fn into_bytes(self) -> Vec<u8> {
        self.input
    }
}

impl<S> Debug for CastError<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CastError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<S> From<CastError<S>> for Error {
    fn from(value: CastError<S>) -> Self {
        value.error
    }
}
