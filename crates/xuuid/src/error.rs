use thiserror::Error as ThisError;

/// A result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `xuuid` can produce.
///
/// Only the [`crate::Uuid`] API surfaces these. Every [`crate::Wildcard`]
/// operation is total and falls back to raw byte storage instead.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// The input text is not a valid identifier string.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A strict binary decode was handed a buffer that is not 16 bytes.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A persistence driver supplied a value kind that cannot hold an
    /// identifier.
    #[error("unsupported driver value: {kind}")]
    UnsupportedValue {
        /// The kind of value that was rejected.
        kind: &'static str,
    },

    /// The structured-document input is not a string literal.
    #[cfg_attr(docsrs, doc(cfg(feature = "json")))]
    #[cfg(feature = "json")]
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Text does not match the canonical identifier grammar.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("invalid identifier text: {0}")]
pub struct ParseError(#[from] uuid::Error);

/// A binary buffer is not exactly 16 bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThisError)]
#[error("invalid identifier length: expected 16 bytes, got {len}")]
pub struct DecodeError {
    /// Length of the rejected buffer.
    pub len: usize,
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Self {
        Self::Parse(ParseError(err))
    }
}
