use crate::{UUID_TEXT_LEN, Uuid};
use core::fmt;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

/// Canonical string in human-readable formats, 16 raw bytes otherwise.
impl Serialize for Uuid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if s.is_human_readable() {
            let mut buf = [0; UUID_TEXT_LEN];
            s.serialize_str(self.encode_text_to_buf(&mut buf))
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

/// Accepts identifier text (the empty string is [`Uuid::NIL`]), a 16-byte
/// buffer, or a sequence of 16 bytes.
impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if d.is_human_readable() {
            d.deserialize_str(UuidVisitor)
        } else {
            d.deserialize_bytes(UuidVisitor)
        }
    }
}

pub(crate) struct UuidVisitor;

impl<'de> Visitor<'de> for UuidVisitor {
    type Value = Uuid;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a UUID string or 16 bytes")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v.is_empty() {
            return Ok(Uuid::NIL);
        }
        Uuid::parse(v).map_err(E::custom)
    }

    #[inline]
    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Uuid::decode_binary(v).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = [0_u8; 16];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(17, &self));
        }
        Ok(Uuid::from_bytes(bytes))
    }
}

/// Always (de)serializes a [`Uuid`] as its 16-byte binary form, regardless of
/// the format.
pub mod as_binary_uuid {
    use super::{Deserializer, Serializer, UuidVisitor};
    use crate::Uuid;

    /// Serialize as 16 raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &Uuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_bytes(id.as_bytes())
    }

    /// Deserialize from 16 raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the input is
    /// not exactly 16 bytes.
    pub fn deserialize<'de, D>(d: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_bytes(UuidVisitor)
    }
}

/// Serializes a [`Uuid`] as its compact base62 string.
///
/// There is no decoder for this form, so only `serialize` is provided. Use it
/// with `#[serde(serialize_with = "as_base62_uuid::serialize")]`.
#[cfg_attr(docsrs, doc(cfg(all(feature = "serde", feature = "base62"))))]
#[cfg(feature = "base62")]
pub mod as_base62_uuid {
    use super::Serializer;
    use crate::{Base62Array, Uuid};

    /// Serialize as a base62 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &Uuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = Base62Array::default();
        s.serialize_str(id.encode_base62_to_buf(&mut buf))
    }
}
