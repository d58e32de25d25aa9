//! Commitment and share ciphertext frame types.
//!
//! The wire format is fixed:
//!
//! ```text
//! offset 0..16   : nonce (16 bytes, random, unique per encryption)
//! offset 16..32  : authentication tag (16 bytes)
//! offset 32..end : AES-256-GCM ciphertext body (same length as plaintext)
//! ```
//!
//! No version byte and no embedded commitment: the commitment travels
//! out-of-band alongside the ciphertext.

use serde::{Deserialize, Serialize};

use crate::constants::{ENVELOPE_HEADER_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::error::{Result, ShareSealError};

// ═══════════════════════════════════════════════════════════════════════════════
// COMMITMENT
// ═══════════════════════════════════════════════════════════════════════════════

/// A verification-vector commitment.
///
/// Opaque caller-supplied bytes of any length. Each verification vector gets
/// its own commitment so that distinct vectors never derive the same share
/// key, even under the same keypair.
#[derive(Clone, PartialEq, Eq)]
pub struct Commitment {
    bytes: Vec<u8>,
}

impl Commitment {
    /// Creates a commitment from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Returns the raw commitment bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the commitment length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the commitment is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&[u8]> for Commitment {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl std::fmt::Debug for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.bytes))
    }
}

impl Serialize for Commitment {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&hex::encode(&self.bytes))
    }
}

impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        Ok(Self::new(bytes))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SHARE CIPHERTEXT
// ═══════════════════════════════════════════════════════════════════════════════

/// An encrypted share in the fixed `nonce ‖ tag ‖ body` frame.
///
/// Construction enforces the minimum frame length, so the accessor methods
/// can slice unconditionally.
#[derive(Clone, PartialEq, Eq)]
pub struct ShareCiphertext {
    bytes: Vec<u8>,
}

impl ShareCiphertext {
    /// Parses a ciphertext frame from raw bytes.
    ///
    /// # Errors
    /// Returns [`ShareSealError::MalformedInput`] if the blob is shorter than
    /// the 32-byte `nonce ‖ tag` header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < ENVELOPE_HEADER_SIZE {
            return Err(ShareSealError::MalformedInput {
                expected: ENVELOPE_HEADER_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Assembles a frame from its parts.
    pub fn from_parts(nonce: &[u8; NONCE_SIZE], tag: &[u8], body: &[u8]) -> Self {
        debug_assert_eq!(tag.len(), TAG_SIZE);
        let mut bytes = Vec::with_capacity(ENVELOPE_HEADER_SIZE + body.len());
        bytes.extend_from_slice(nonce);
        bytes.extend_from_slice(tag);
        bytes.extend_from_slice(body);
        Self { bytes }
    }

    /// Returns the 16-byte nonce.
    pub fn nonce(&self) -> &[u8] {
        &self.bytes[..NONCE_SIZE]
    }

    /// Returns the 16-byte authentication tag.
    pub fn tag(&self) -> &[u8] {
        &self.bytes[NONCE_SIZE..ENVELOPE_HEADER_SIZE]
    }

    /// Returns the ciphertext body (same length as the plaintext).
    pub fn body(&self) -> &[u8] {
        &self.bytes[ENVELOPE_HEADER_SIZE..]
    }

    /// Returns the whole frame.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes self and returns the frame bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the total frame length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the body is empty (frame is header-only).
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == ENVELOPE_HEADER_SIZE
    }

    /// Returns the hex-encoded frame.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Parses a frame from a hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }
}

impl std::fmt::Debug for ShareCiphertext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ShareCiphertext(nonce={}, body_len={})",
            hex::encode(self.nonce()),
            self.body().len()
        )
    }
}

impl Serialize for ShareCiphertext {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ShareCiphertext {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample_frame() -> ShareCiphertext {
        ShareCiphertext::from_parts(&[1u8; NONCE_SIZE], &[2u8; TAG_SIZE], &[3u8, 4, 5])
    }

    #[test]
    fn test_commitment_roundtrip() {
        let commit = Commitment::new(b"vector-1".to_vec());
        assert_eq!(commit.as_bytes(), b"vector-1");
        assert_eq!(commit.len(), 8);
        assert!(!commit.is_empty());
    }

    #[test]
    fn test_commitment_serde_hex() {
        let commit = Commitment::new(b"vector-1".to_vec());
        let json = serde_json::to_string(&commit).unwrap();
        let recovered: Commitment = serde_json::from_str(&json).unwrap();
        assert_eq!(commit, recovered);
    }

    #[test]
    fn test_frame_slicing() {
        let frame = sample_frame();
        assert_eq!(frame.nonce(), &[1u8; NONCE_SIZE]);
        assert_eq!(frame.tag(), &[2u8; TAG_SIZE]);
        assert_eq!(frame.body(), &[3u8, 4, 5]);
        assert_eq!(frame.len(), ENVELOPE_HEADER_SIZE + 3);
    }

    #[test]
    fn test_frame_from_bytes_roundtrip() {
        let frame = sample_frame();
        let recovered = ShareCiphertext::from_bytes(frame.as_bytes()).unwrap();
        assert_eq!(frame, recovered);
    }

    #[test_case(0; "empty")]
    #[test_case(10; "ten bytes")]
    #[test_case(31; "one short of header")]
    fn test_frame_rejects_short_blobs(len: usize) {
        let err = ShareCiphertext::from_bytes(&vec![0u8; len]).unwrap_err();
        match err {
            ShareSealError::MalformedInput { expected, actual } => {
                assert_eq!(expected, ENVELOPE_HEADER_SIZE);
                assert_eq!(actual, len);
            }
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_frame_is_empty_body() {
        let frame = ShareCiphertext::from_bytes(&[0u8; ENVELOPE_HEADER_SIZE]).unwrap();
        assert!(frame.is_empty());
        assert_eq!(frame.body().len(), 0);
    }

    #[test]
    fn test_frame_hex_and_serde_roundtrip() {
        let frame = sample_frame();
        let recovered = ShareCiphertext::from_hex(&frame.to_hex()).unwrap();
        assert_eq!(frame, recovered);

        let json = serde_json::to_string(&frame).unwrap();
        let recovered: ShareCiphertext = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, recovered);
    }

    #[test]
    fn test_frame_debug_omits_body() {
        let frame = sample_frame();
        let rendered = format!("{:?}", frame);
        assert!(rendered.contains("body_len=3"));
        assert!(!rendered.contains("030405"));
    }
}
