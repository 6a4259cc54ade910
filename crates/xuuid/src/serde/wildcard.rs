use crate::{UUID_TEXT_LEN, Wildcard};
use core::fmt;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

/// An identifier serializes like [`crate::Uuid`]; raw content as a string when
/// it is valid UTF-8 and as bytes otherwise.
impl Serialize for Wildcard {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Id(id) if s.is_human_readable() => {
                let mut buf = [0; UUID_TEXT_LEN];
                s.serialize_str(id.encode_text_to_buf(&mut buf))
            }
            Self::Id(id) => s.serialize_bytes(id.as_bytes()),
            Self::Raw(raw) => match core::str::from_utf8(raw) {
                Ok(text) => s.serialize_str(text),
                Err(_) => s.serialize_bytes(raw),
            },
        }
    }
}

/// Strings go through [`Wildcard::decode_text`] after the format has
/// unescaped them; bytes go through [`Wildcard::decode_binary`]. Never fails
/// on content.
impl<'de> Deserialize<'de> for Wildcard {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if d.is_human_readable() {
            d.deserialize_any(WildcardVisitor)
        } else {
            d.deserialize_bytes(WildcardVisitor)
        }
    }
}

struct WildcardVisitor;

impl<'de> Visitor<'de> for WildcardVisitor {
    type Value = Wildcard;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or a byte buffer")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Wildcard::decode_text(v.as_bytes()))
    }

    #[inline]
    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Wildcard::decode_binary(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(16));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Ok(Wildcard::decode_binary(&bytes))
    }
}
