//! Error type shared by every stream operation.
//!
//! All failures surface synchronously as a [`BrotliError`]. Each variant has a
//! stable numeric [`code`](BrotliError::code) so the C ABI can report it as a
//! plain `int`.

use thiserror::Error;

/// Library-wide result alias.
pub type Result<T, E = BrotliError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum BrotliError {
    /// Invalid mode, quality, lgwin or lgblock. Raised before any native
    /// state exists.
    #[error("{0}")]
    Parameter(String),

    /// The native stream function reported failure.
    #[error("{0}")]
    Codec(String),

    /// The instance is finished, errored, poisoned, or still holds pending
    /// input.
    #[error("{0}")]
    InvalidState(String),

    /// Another operation is already in flight on the same instance.
    #[error("concurrent operation on the same codec instance")]
    ConcurrentAccess,

    /// `finish()` was called on a decoder that never saw the end of stream.
    #[error("Decompression error: incomplete compressed stream.")]
    IncompleteStream,

    /// An output buffer could not be reserved.
    #[error("unable to allocate output buffer: {0}")]
    Allocation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BrotliError {
    /// Stable status code; `0` is reserved for success.
    pub fn code(&self) -> i32 {
        match self {
            BrotliError::Parameter(_) => 1,
            BrotliError::Codec(_) => 2,
            BrotliError::InvalidState(_) => 3,
            BrotliError::ConcurrentAccess => 4,
            BrotliError::IncompleteStream => 5,
            BrotliError::Allocation(_) => 6,
            BrotliError::Io(_) => 7,
        }
    }

    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        BrotliError::InvalidState(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_and_nonzero() {
        let errs = [
            BrotliError::Parameter(String::new()),
            BrotliError::Codec(String::new()),
            BrotliError::InvalidState(String::new()),
            BrotliError::ConcurrentAccess,
            BrotliError::IncompleteStream,
            BrotliError::Allocation(String::new()),
            BrotliError::Io(std::io::Error::other("x")),
        ];
        let mut codes: Vec<i32> = errs.iter().map(BrotliError::code).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
    }

    #[test]
    fn parameter_message_is_passed_through() {
        let e = BrotliError::Parameter("12 is not a valid quality, must be between 0 and 11".into());
        assert_eq!(e.to_string(), "12 is not a valid quality, must be between 0 and 11");
    }

    #[test]
    fn incomplete_stream_message() {
        assert!(BrotliError::IncompleteStream.to_string().contains("incomplete compressed stream"));
    }
}
