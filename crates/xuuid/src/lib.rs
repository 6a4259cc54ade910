#![cfg_attr(docsrs, feature(doc_cfg))]
//! UUID value type, a polymorphic "UUID or bytes" identifier, and a compact
//! base62 rendering.
//!
//! - [`Uuid`]: a 16-byte identifier with strict binary, text and JSON codecs.
//! - [`Wildcard`]: either a [`Uuid`] or an arbitrary byte string. Decoding
//!   tries the identifier form first and falls back to keeping the input as
//!   is, so it never fails.
//! - [`Uuid::to_base62`]: the identifier's 128-bit value as a minimal-length
//!   `0-9A-Za-z` string (feature `base62`).
//! - [`driver`]: [`ToValue`]/[`Scan`] adapters for storage drivers.
//!
//! Parsing, formatting and generation are delegated to the [`uuid`] crate.
//!
//! # Example
//!
//! ```
//! use xuuid::{Uuid, Wildcard};
//!
//! let id = Uuid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
//! assert_eq!(id.encode_text(), "550e8400-e29b-41d4-a716-446655440000");
//!
//! let w = Wildcard::decode_binary(b"hello world!!!!");
//! assert_eq!(w.encode_binary(), b"hello world!!!!");
//! ```

#[cfg(feature = "base62")]
mod base62;
pub mod driver;
mod error;
mod id;
#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "base62")]
pub use crate::base62::*;
pub use crate::driver::{Scan, ToValue};
pub use crate::error::*;
pub use crate::id::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
