use crate::Uuid;
use core::{convert::Infallible, fmt, str::FromStr};
use std::borrow::Cow;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// An identifier that is either a well-formed [`Uuid`] or an arbitrary byte
/// string.
///
/// The variant is decided once, when the value is decoded: every decode entry
/// point first tries to read the input as an identifier in its own format and
/// falls back to storing the input verbatim. Decoding never fails.
///
/// Encoding renders from the stored variant. An `Id` is written in the
/// canonical binary or text form of the identifier; a `Raw` value is written
/// back byte-for-byte, in every format.
///
/// A `Raw` value whose bytes happen to be 16 long stays `Raw` until it is run
/// through [`Wildcard::reclassify`] (or re-decoded from its binary form), at
/// which point it becomes an `Id`.
///
/// # Example
///
/// ```
/// use xuuid::Wildcard;
///
/// let id = Wildcard::decode_text(b"550e8400-e29b-41d4-a716-446655440000");
/// assert!(id.is_id());
/// assert_eq!(id.encode_binary().len(), 16);
///
/// let raw = Wildcard::decode_text(b"hello");
/// assert!(!raw.is_id());
/// assert_eq!(raw.encode_binary(), b"hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Wildcard {
    /// Input that decoded as an identifier.
    Id(Uuid),
    /// Input that did not, stored verbatim.
    Raw(Vec<u8>),
}

impl Wildcard {
    /// Decodes from a binary buffer.
    ///
    /// Any 16-byte buffer is an identifier; anything else is stored raw.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(raw), fields(len = raw.len())))]
    pub fn decode_binary(raw: &[u8]) -> Self {
        Uuid::decode_binary(raw).map_or_else(|_| Self::fallback(raw), Self::Id)
    }

    /// Decodes from a text buffer.
    ///
    /// The buffer is parsed as identifier text; on failure it is stored raw.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(raw), fields(len = raw.len())))]
    pub fn decode_text(raw: &[u8]) -> Self {
        Uuid::decode_text(raw).map_or_else(|_| Self::fallback(raw), Self::Id)
    }

    /// Decodes from the bytes of a JSON value.
    ///
    /// The bytes are parsed as identifier text without JSON unescaping. A
    /// quoted canonical literal such as `"550e8400-e29b-41d4-a716-446655440000"`
    /// is 38 bytes long and decodes as an identifier, so the output of
    /// `Wildcard::encode_json` reads back as the same `Id`. A literal with
    /// escapes in it is stored raw, quotes and all. The `serde`
    /// `Deserialize` impl unescapes first and then parses.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(raw), fields(len = raw.len())))]
    pub fn decode_json(raw: &[u8]) -> Self {
        Uuid::decode_text(raw).map_or_else(|_| Self::fallback(raw), Self::Id)
    }

    fn fallback(raw: &[u8]) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = raw.len(), "not an identifier, storing raw bytes");
        Self::Raw(raw.to_vec())
    }

    /// Returns `true` if this holds an identifier.
    #[must_use]
    pub const fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }

    /// Returns the identifier, if this holds one.
    #[must_use]
    pub const fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Raw(_) => None,
        }
    }

    /// Returns the binary form: the 16 identifier bytes, or the raw bytes.
    #[must_use]
    pub fn encode_binary(&self) -> &[u8] {
        match self {
            Self::Id(id) => id.as_bytes().as_slice(),
            Self::Raw(raw) => raw.as_slice(),
        }
    }

    /// Returns the text form: canonical identifier text, or the raw bytes.
    #[must_use]
    pub fn encode_text(&self) -> Cow<'_, [u8]> {
        match self {
            Self::Id(id) => Cow::Owned(id.encode_text().into_bytes()),
            Self::Raw(raw) => Cow::Borrowed(raw.as_slice()),
        }
    }

    crate::cfg_json! {
        /// Returns the JSON form: a quoted canonical string for an identifier,
        /// or the raw bytes as a JSON string (an array of numbers when they
        /// are not UTF-8).
        #[must_use]
        pub fn encode_json(&self) -> String {
            match self {
                Self::Id(id) => id.encode_json(),
                Self::Raw(raw) => match core::str::from_utf8(raw) {
                    Ok(s) => serde_json::Value::from(s).to_string(),
                    Err(_) => serde_json::Value::from(raw.as_slice()).to_string(),
                },
            }
        }
    }

    /// Re-derives the variant from the stored bytes.
    ///
    /// A `Raw` value of exactly 16 bytes becomes an `Id` over those bytes,
    /// which changes its text form from the raw bytes to canonical identifier
    /// text. Everything else is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use xuuid::Wildcard;
    ///
    /// let raw = Wildcard::decode_text(b"0123456789abcdef");
    /// assert!(!raw.is_id());
    ///
    /// let id = raw.reclassify();
    /// assert!(id.is_id());
    /// assert_eq!(id.to_string(), "30313233-3435-3637-3839-616263646566");
    /// ```
    #[must_use]
    pub fn reclassify(self) -> Self {
        match self {
            Self::Raw(raw) => match Uuid::decode_binary(&raw) {
                Ok(id) => Self::Id(id),
                Err(_) => Self::Raw(raw),
            },
            id @ Self::Id(_) => id,
        }
    }
}

impl From<Uuid> for Wildcard {
    fn from(id: Uuid) -> Self {
        Self::Id(id)
    }
}

impl FromStr for Wildcard {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::decode_text(s.as_bytes()))
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => fmt::Display::fmt(id, f),
            Self::Raw(raw) => f.write_str(&String::from_utf8_lossy(raw)),
        }
    }
}
