use crate::{DecodeError, Error, ParseError, Result};
use core::{fmt, str::FromStr};
use uuid::Uuid as InnerUuid;

type Bytes = [u8; 16];

/// Length of the canonical hyphenated text form.
pub const UUID_TEXT_LEN: usize = 36;

/// Stack buffer large enough to hold the canonical text form.
pub type UuidTextArray = [u8; UUID_TEXT_LEN];

/// Length of the canonical text form with one wrapping byte on each side.
const WRAPPED_TEXT_LEN: usize = UUID_TEXT_LEN + 2;

/// A 128-bit identifier.
///
/// Parsing, formatting and random generation are delegated to the [`uuid`]
/// crate; this type only fixes the wire contracts around it:
///
/// - Binary: exactly 16 bytes.
/// - Text: lowercase hyphenated form on output; any form [`uuid`] accepts on
///   input (hyphenated, simple, `urn:uuid:`), plus the hyphenated form
///   wrapped in any single leading and trailing byte (`{…}`, `"…"`).
/// - JSON: a quoted canonical string, where the empty string decodes to
///   [`Uuid::NIL`].
///
/// Values are immutable once constructed.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Uuid {
    bytes: Bytes,
}

impl Uuid {
    /// The all-zero identifier.
    pub const NIL: Self = Self { bytes: [0; 16] };

    #[inline(always)]
    pub const fn from_bytes(bytes: Bytes) -> Self {
        Self { bytes }
    }

    #[inline(always)]
    pub const fn as_bytes(&self) -> &Bytes {
        &self.bytes
    }

    #[inline(always)]
    fn to_inner(self) -> InnerUuid {
        InnerUuid::from_bytes(self.bytes)
    }

    #[inline(always)]
    fn from_inner(uuid: InnerUuid) -> Self {
        Self::from_bytes(uuid.into_bytes())
    }

    crate::cfg_rand! {
        /// Generates a new random (version 4) identifier using the thread-local
        /// RNG.
        ///
        /// # Example
        ///
        /// ```
        /// use xuuid::Uuid;
        ///
        /// let id = Uuid::new();
        /// assert!(!id.is_zero());
        /// ```
        #[must_use]
        pub fn new() -> Self {
            use rand::Rng;

            let random: Bytes = rand::rng().random();
            Self::from_inner(uuid::Builder::from_random_bytes(random).into_uuid())
        }
    }

    /// Parses an identifier from text.
    ///
    /// A 38-byte input is read as the hyphenated form between one leading and
    /// one trailing byte, whatever those bytes are. This covers braces as well
    /// as JSON quotes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `s` is not a valid identifier string.
    ///
    /// # Example
    ///
    /// ```
    /// use xuuid::Uuid;
    ///
    /// let id = Uuid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
    /// assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    /// assert_eq!(Uuid::parse("\"550e8400-e29b-41d4-a716-446655440000\"").unwrap(), id);
    /// assert!(Uuid::parse("550e8400").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        Self::decode_text(s.as_bytes())
    }

    /// Returns `true` if this is [`Uuid::NIL`].
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::NIL
    }

    /// Decodes an identifier from its 16-byte binary form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] unless `data` is exactly 16 bytes long.
    pub fn decode_binary(data: &[u8]) -> Result<Self> {
        let bytes: Bytes = data
            .try_into()
            .map_err(|_| DecodeError { len: data.len() })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Returns the 16-byte binary form.
    #[must_use]
    pub const fn encode_binary(&self) -> Bytes {
        self.bytes
    }

    /// Decodes an identifier from a text buffer.
    ///
    /// Same contract as [`Uuid::parse`], over bytes instead of `&str`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `data` is not a valid identifier string.
    pub fn decode_text(data: &[u8]) -> Result<Self> {
        let data = match data {
            [_, inner @ .., _] if data.len() == WRAPPED_TEXT_LEN => inner,
            _ => data,
        };
        let uuid = InnerUuid::try_parse_ascii(data).map_err(ParseError::from)?;
        Ok(Self::from_inner(uuid))
    }

    /// Returns the canonical lowercase hyphenated text form.
    #[must_use]
    pub fn encode_text(&self) -> String {
        let mut buf = [0; UUID_TEXT_LEN];
        self.encode_text_to_buf(&mut buf).to_owned()
    }

    /// Writes the canonical text form into `buf` without heap allocation.
    ///
    /// See also: [`Uuid::encode_text`] for an allocating version.
    pub fn encode_text_to_buf<'a>(&self, buf: &'a mut UuidTextArray) -> &'a str {
        self.to_inner().hyphenated().encode_lower(buf)
    }

    crate::cfg_json! {
        /// Decodes an identifier from a JSON string literal.
        ///
        /// The empty literal `""` decodes to [`Uuid::NIL`] so optional fields
        /// can be left blank.
        ///
        /// # Errors
        ///
        /// - [`Error::Json`] if `data` is not a JSON string literal.
        /// - [`Error::Parse`] if the unescaped string is not a valid
        ///   identifier.
        ///
        /// # Example
        ///
        /// ```
        /// #[cfg(feature = "json")]
        /// {
        ///     use xuuid::Uuid;
        ///
        ///     assert_eq!(Uuid::decode_json(br#""""#).unwrap(), Uuid::NIL);
        ///     let id = Uuid::decode_json(br#""550e8400-e29b-41d4-a716-446655440000""#).unwrap();
        ///     assert!(!id.is_zero());
        /// }
        /// ```
        pub fn decode_json(data: &[u8]) -> Result<Self> {
            let s: std::borrow::Cow<'_, str> = serde_json::from_slice(data)?;
            if s.is_empty() {
                return Ok(Self::NIL);
            }
            Self::parse(&s)
        }

        /// Returns the JSON string literal of the canonical text form.
        #[must_use]
        pub fn encode_json(&self) -> String {
            let mut buf = [0; UUID_TEXT_LEN];
            format!("\"{}\"", self.encode_text_to_buf(&mut buf))
        }
    }
}

impl From<InnerUuid> for Uuid {
    #[inline(always)]
    fn from(uuid: InnerUuid) -> Self {
        Self::from_inner(uuid)
    }
}

impl From<Uuid> for InnerUuid {
    #[inline(always)]
    fn from(id: Uuid) -> Self {
        id.to_inner()
    }
}

impl From<Bytes> for Uuid {
    #[inline(always)]
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Uuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; UUID_TEXT_LEN];
        f.write_str(self.encode_text_to_buf(&mut buf))
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Uuid").field(&format_args!("{self}")).finish()
    }
}
