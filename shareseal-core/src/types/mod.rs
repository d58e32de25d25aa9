//! Domain types for ShareSeal.
//!
//! This module provides the core data structures of the share channel:
//!
//! - [`PrivateScalar`]: secp256k1 private scalar (zeroized on drop)
//! - [`PublicPoint`]: SEC1-encoded secp256k1 public point
//! - [`Keypair`]: public/private pair
//! - [`SymmetricKey`]: derived AES-256 key (zeroized on drop)
//! - [`Commitment`]: per-verification-vector commitment bytes
//! - [`ShareCiphertext`]: the `nonce ‖ tag ‖ body` frame

mod envelope;
mod keys;

pub use envelope::*;
pub use keys::*;
