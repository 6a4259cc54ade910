const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const BASE: u128 = 62;

/// Maximum number of base62 digits needed for a 128-bit value.
///
/// `62^21 < 2^128 <= 62^22`, so 22 digits always suffice.
pub const BASE62_MAX_LEN: usize = 22;

/// Stack buffer large enough to hold any encoded 128-bit value.
pub type Base62Array = [u8; BASE62_MAX_LEN];

/// Encodes `value` as a minimal-length base62 string into `buf`.
///
/// Digits are ordered `0-9A-Za-z`, most significant first, with no leading
/// zero padding. Zero encodes as `"0"`. The returned slice borrows the tail of
/// `buf` that holds the digits.
///
/// # Example
///
/// ```
/// #[cfg(feature = "base62")]
/// {
///     use xuuid::{Base62Array, encode_base62};
///
///     let mut buf = Base62Array::default();
///     assert_eq!(encode_base62(0, &mut buf), "0");
///     assert_eq!(encode_base62(61, &mut buf), "z");
///     assert_eq!(encode_base62(62, &mut buf), "10");
/// }
/// ```
pub fn encode_base62(mut value: u128, buf: &mut Base62Array) -> &str {
    let mut start = BASE62_MAX_LEN;
    loop {
        start -= 1;
        buf[start] = ALPHABET[(value % BASE) as usize];
        value /= BASE;
        if value == 0 {
            break;
        }
    }

    // SAFETY: every byte in `buf[start..]` was copied from `ALPHABET`, which
    // is ASCII.
    unsafe { core::str::from_utf8_unchecked(&buf[start..]) }
}
