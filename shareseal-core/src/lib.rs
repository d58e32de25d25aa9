//! # ShareSeal Core
//!
//! Core types, errors, and traits for the ShareSeal DKG share channel.
//!
//! This crate provides the foundational building blocks used by the crypto crate:
//!
//! - **Types**: Key material, commitments, and the share ciphertext frame
//! - **Errors**: Typed error taxonomy for the whole channel
//! - **Constants**: Frame offsets and key sizes
//! - **Traits**: Capability interfaces for curve and AEAD backends, plus the
//!   transport seam to the share-distribution layer
//!
//! ## Example
//!
//! ```rust
//! use shareseal_core::{Commitment, ShareCiphertext, ShareSealError};
//!
//! // The frame requires at least nonce + tag; short blobs are rejected up front.
//! let err = ShareCiphertext::from_bytes(&[0u8; 10]).unwrap_err();
//! assert!(matches!(err, ShareSealError::MalformedInput { .. }));
//!
//! let commit = Commitment::new(b"vector-1".to_vec());
//! assert_eq!(commit.as_bytes(), b"vector-1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Result, ShareSealError};
pub use traits::*;
pub use types::*;
