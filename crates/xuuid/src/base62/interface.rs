use crate::{Base62Array, Uuid, encode_base62};

impl Uuid {
    /// Returns the identifier's 128-bit value as a compact base62 string.
    ///
    /// The 16 bytes are read as one big-endian unsigned integer (the same
    /// number as the 32 hex digits of the text form) and written with the
    /// `0-9A-Za-z` alphabet, most significant digit first, without padding.
    /// Identifiers with leading zero bytes therefore produce shorter strings,
    /// and [`Uuid::NIL`] produces `"0"`.
    ///
    /// This rendering is one-way; there is no decoder.
    ///
    /// # Example
    ///
    /// ```
    /// #[cfg(feature = "base62")]
    /// {
    ///     use xuuid::Uuid;
    ///
    ///     let id = Uuid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
    ///     assert_eq!(id.to_base62(), "2aUyqjCzEIiEcYMKj7TZtw");
    ///     assert_eq!(Uuid::NIL.to_base62(), "0");
    /// }
    /// ```
    #[must_use]
    pub fn to_base62(&self) -> String {
        let mut buf = Base62Array::default();
        self.encode_base62_to_buf(&mut buf).to_owned()
    }

    /// Writes the compact base62 string into `buf` without heap allocation.
    ///
    /// See also: [`Uuid::to_base62`] for an allocating version.
    pub fn encode_base62_to_buf<'a>(&self, buf: &'a mut Base62Array) -> &'a str {
        encode_base62(u128::from_be_bytes(*self.as_bytes()), buf)
    }
}

#[cfg(test)]
mod tests {
    use crate::Uuid;

    #[test]
    fn nil_is_zero_digit() {
        assert_eq!(Uuid::NIL.to_base62(), "0");
    }

    #[test]
    fn known_value() {
        let id = Uuid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let encoded = id.to_base62();
        assert_eq!(encoded, "2aUyqjCzEIiEcYMKj7TZtw");
        assert!(!encoded.contains('-'));
    }

    #[test]
    fn matches_hex_text_value() {
        let id = Uuid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let hex = id.to_string().replace('-', "");
        let value = u128::from_str_radix(&hex, 16).unwrap();
        assert_eq!(value, u128::from_be_bytes(*id.as_bytes()));
    }

    #[test]
    fn leading_zero_bytes_shorten_output() {
        let full = Uuid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let half = Uuid::parse("050e8400-e29b-41d4-a716-446655440000").unwrap();
        let zero = Uuid::parse("000e8400-e29b-41d4-a716-446655440000").unwrap();

        assert_eq!(half.to_base62(), "9XauKipleXBozcxhOaIOe");
        assert_eq!(zero.to_base62(), "6dHoBwvUH01Oa7sueag4");
        assert!(full.to_base62().len() > half.to_base62().len());
        assert!(half.to_base62().len() > zero.to_base62().len());
    }

    #[test]
    fn max_value() {
        let max = Uuid::from_bytes([0xff; 16]);
        assert_eq!(max.to_base62(), "7n42DGM5Tflk9n8mt7Fhc7");
    }

    #[test]
    #[cfg(feature = "rand")]
    fn generated_ids_use_alphabet() {
        for _ in 0..256 {
            let encoded = Uuid::new().to_base62();
            assert!(!encoded.is_empty());
            assert!(encoded.len() <= crate::BASE62_MAX_LEN);
            assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
    }
}
