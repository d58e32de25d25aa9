//! # ShareSeal Cryptography
//!
//! Per-recipient encryption of DKG secret shares.
//!
//! This crate provides the three composed stages of the channel:
//!
//! - **ECDH**: secp256k1 scalar multiplication of a public point by a private
//!   scalar
//! - **KDF**: HKDF-SHA256 encapsulation binding the shared point to a
//!   per-verification-vector commitment
//! - **AEAD**: AES-256-GCM with the fixed `nonce(16) ‖ tag(16) ‖ body` frame
//!
//! ## Security Properties
//!
//! - Distinct commitments derive distinct share keys even under the same
//!   keypair, so shares from different verification vectors never reuse a key
//! - The construction is symmetric: `encapsulate(a, B, c) == encapsulate(b, A, c)`
//!   for keypairs `(a, A)` and `(b, B)`, which is what lets sender and
//!   recipient derive the same key independently
//! - Key material is zeroized on drop and never logged
//!
//! ## Example
//!
//! ```rust,ignore
//! use shareseal_core::Commitment;
//! use shareseal_crypto::{decrypt, encrypt, generate_keypair};
//!
//! let dealer = generate_keypair();
//! let recipient = generate_keypair();
//! let commit = Commitment::new(b"vector-1".to_vec());
//!
//! // Dealer encrypts to the recipient's public point
//! let sealed = encrypt(&recipient.public, &dealer.secret, &commit, b"share-payload")?;
//!
//! // Recipient decrypts with its own scalar and the dealer's public point
//! let share = decrypt(&recipient.secret, &dealer.public, &commit, sealed.as_bytes())?;
//! assert_eq!(share, b"share-payload");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod aead;
pub mod ecdh;
pub mod envelope;
pub mod kdf;

// Re-export main functions at crate root
pub use aead::{open, seal, Aes256GcmBackend};
pub use ecdh::{generate_keypair, generate_keypair_with, multiply, Secp256k1Backend};
pub use envelope::{decrypt, encrypt, ShareChannel};
pub use kdf::encapsulate;
