//! Adapters between identifiers and the values a storage driver hands over.
//!
//! A driver exchanges column values as an opaque [`Value`]. [`ToValue`]
//! produces the value to store and [`Scan`] reads a stored value back.

use crate::{Error, Result, Uuid, Wildcard};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// An opaque column value as exchanged with a storage driver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// SQL `NULL`.
    Null,
    /// An integer column.
    Int(i64),
    /// A binary column.
    Bytes(Vec<u8>),
    /// A text column.
    Text(String),
}

impl Value {
    /// Short name of the value kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
        }
    }
}

/// Types that can be written to a storage driver.
pub trait ToValue {
    /// Returns the value to hand to the driver.
    fn to_value(&self) -> Value;
}

/// Types that can be read back from a storage driver.
pub trait Scan: Sized {
    /// Builds `Self` from a driver-supplied value.
    ///
    /// # Errors
    ///
    /// Returns an error if `src` cannot be interpreted as `Self`.
    fn scan(src: Value) -> Result<Self>;
}

impl ToValue for Uuid {
    /// Always the 16-byte binary form.
    fn to_value(&self) -> Value {
        Value::Bytes(self.encode_binary().to_vec())
    }
}

impl Scan for Uuid {
    /// Reads an identifier from a driver value.
    ///
    /// - `Null`, an empty buffer and empty text read as [`Uuid::NIL`].
    /// - A 16-byte buffer is decoded as binary.
    /// - Any other buffer, and any text, is parsed as identifier text.
    /// - `Int` is rejected with [`Error::UnsupportedValue`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(src), fields(kind = src.kind())))]
    fn scan(src: Value) -> Result<Self> {
        match src {
            Value::Null => Ok(Self::NIL),
            Value::Bytes(b) if b.is_empty() => Ok(Self::NIL),
            Value::Bytes(b) if b.len() == 16 => Self::decode_binary(&b),
            Value::Bytes(b) => Self::decode_text(&b),
            Value::Text(s) if s.is_empty() => Ok(Self::NIL),
            Value::Text(s) => Self::parse(&s),
            v @ Value::Int(_) => Err(Error::UnsupportedValue { kind: v.kind() }),
        }
    }
}

impl ToValue for Wildcard {
    /// The binary form for an identifier; text for raw UTF-8 content and
    /// bytes for anything else.
    fn to_value(&self) -> Value {
        match self {
            Self::Id(id) => id.to_value(),
            Self::Raw(raw) => match String::from_utf8(raw.clone()) {
                Ok(s) => Value::Text(s),
                Err(e) => Value::Bytes(e.into_bytes()),
            },
        }
    }
}

impl Scan for Wildcard {
    /// Never fails: buffers go through [`Wildcard::decode_binary`], text
    /// through [`Wildcard::decode_text`]. `Null` reads as empty raw bytes and
    /// `Int` as its decimal text.
    fn scan(src: Value) -> Result<Self> {
        Ok(match src {
            Value::Null => Self::Raw(Vec::new()),
            Value::Int(n) => Self::Raw(n.to_string().into_bytes()),
            Value::Bytes(b) => Self::decode_binary(&b),
            Value::Text(s) => Self::decode_text(s.as_bytes()),
        })
    }
}
