//! Key types for ShareSeal.
//!
//! This module defines the key material used by the channel:
//!
//! - [`PrivateScalar`]: 32-byte big-endian scalar, zeroized on drop
//! - [`PublicPoint`]: compressed or uncompressed SEC1 point encoding
//! - [`Keypair`]: combined public + private pair
//! - [`SymmetricKey`]: 32-byte derived key, zeroized on drop
//!
//! Range validation of scalars (nonzero, below the group order) and curve
//! membership of points belong to the curve backend; these types only enforce
//! encoding shape, keeping them independent of any one curve implementation.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{
    COMPRESSED_POINT_SIZE, PRIVATE_SCALAR_SIZE, SYMMETRIC_KEY_SIZE, UNCOMPRESSED_POINT_SIZE,
};
use crate::error::{Result, ShareSealError};

// ═══════════════════════════════════════════════════════════════════════════════
// PRIVATE SCALAR
// ═══════════════════════════════════════════════════════════════════════════════

/// A secp256k1 private scalar (32 bytes, big-endian).
///
/// Never serialized and never printed: `Debug` is redacted and there is
/// deliberately no serde implementation. The bytes are zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateScalar {
    bytes: [u8; PRIVATE_SCALAR_SIZE],
}

impl PrivateScalar {
    /// Creates a private scalar from raw bytes.
    ///
    /// # Errors
    /// Returns [`ShareSealError::InvalidKey`] if the slice is not exactly
    /// 32 bytes. Range checking happens in the curve backend.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_SCALAR_SIZE {
            return Err(ShareSealError::InvalidKey(format!(
                "private scalar must be {} bytes, got {}",
                PRIVATE_SCALAR_SIZE,
                bytes.len()
            )));
        }

        let mut arr = [0u8; PRIVATE_SCALAR_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Creates a private scalar from a fixed-size array.
    pub fn from_array(bytes: [u8; PRIVATE_SCALAR_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw scalar bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateScalar([REDACTED])")
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PUBLIC POINT
// ═══════════════════════════════════════════════════════════════════════════════

/// A secp256k1 public point in SEC1 encoding (33 or 65 bytes).
///
/// Construction checks the encoding shape only; whether the bytes decode to a
/// point actually on the curve is decided by the curve backend before use.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicPoint {
    bytes: Vec<u8>,
}

impl PublicPoint {
    /// Creates a public point from SEC1 bytes.
    ///
    /// # Errors
    /// Returns [`ShareSealError::InvalidKey`] if the length is neither the
    /// compressed (33) nor the uncompressed (65) encoding size.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != COMPRESSED_POINT_SIZE && bytes.len() != UNCOMPRESSED_POINT_SIZE {
            return Err(ShareSealError::InvalidKey(format!(
                "public point must be {} or {} bytes, got {}",
                COMPRESSED_POINT_SIZE,
                UNCOMPRESSED_POINT_SIZE,
                bytes.len()
            )));
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Returns the raw SEC1 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns true if this is the compressed (33-byte) encoding.
    pub fn is_compressed(&self) -> bool {
        self.bytes.len() == COMPRESSED_POINT_SIZE
    }

    /// Returns the hex-encoded point.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Creates a public point from a hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }
}

impl std::fmt::Debug for PublicPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only show first/last 4 bytes for readability
        write!(
            f,
            "PublicPoint({}...{})",
            hex::encode(&self.bytes[..4]),
            hex::encode(&self.bytes[self.bytes.len() - 4..])
        )
    }
}

// Serde implementation that uses hex encoding
impl Serialize for PublicPoint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicPoint {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// KEYPAIR
// ═══════════════════════════════════════════════════════════════════════════════

/// A secp256k1 keypair.
#[derive(Debug)]
pub struct Keypair {
    /// Public point (safe to share).
    pub public: PublicPoint,
    /// Private scalar (zeroized on drop).
    pub secret: PrivateScalar,
}

impl Keypair {
    /// Creates a keypair from its parts.
    pub fn new(public: PublicPoint, secret: PrivateScalar) -> Self {
        Self { public, secret }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SYMMETRIC KEY
// ═══════════════════════════════════════════════════════════════════════════════

/// A derived 32-byte AES-256 key.
///
/// Never supplied directly by a caller; always the output of key
/// encapsulation. Zeroized on drop, compared in constant time, redacted in
/// `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: [u8; SYMMETRIC_KEY_SIZE],
}

impl SymmetricKey {
    /// Creates a key from a fixed-size array.
    pub fn from_array(bytes: [u8; SYMMETRIC_KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        subtle::ConstantTimeEq::ct_eq(&self.bytes[..], &other.bytes[..]).into()
    }
}

impl Eq for SymmetricKey {}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymmetricKey([REDACTED])")
    }
}
