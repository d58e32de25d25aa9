//! Capability traits for ShareSeal.
//!
//! Two narrow interfaces decouple the channel composition from the underlying
//! primitives, so a curve or cipher can be swapped without touching the
//! protocol logic. A third, async trait is the seam to the share-distribution
//! layer (chain submission and queries), which consumes ciphertexts as opaque
//! blobs and is implemented elsewhere.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Commitment, PrivateScalar, PublicPoint, ShareCiphertext, SymmetricKey};

// ═══════════════════════════════════════════════════════════════════════════════
// CURVE BACKEND
// ═══════════════════════════════════════════════════════════════════════════════

/// Elliptic-curve operations needed by key encapsulation.
///
/// Implementations must be deterministic and side-effect free.
pub trait CurveBackend: Send + Sync {
    /// Multiplies `point` by `scalar`, returning the shared point in an
    /// uncompressed, fixed-length encoding.
    ///
    /// # Errors
    /// Returns [`InvalidKey`](crate::ShareSealError::InvalidKey) if the point
    /// is not on the curve or the scalar is zero or not below the group order.
    fn multiply(&self, point: &PublicPoint, scalar: &PrivateScalar) -> Result<Vec<u8>>;

    /// Checks that `point` decodes to a valid point on the curve.
    fn validate_point(&self, point: &PublicPoint) -> Result<()>;

    /// Checks that `scalar` is in the valid range `1 <= x < n`.
    fn validate_scalar(&self, scalar: &PrivateScalar) -> Result<()>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// AEAD BACKEND
// ═══════════════════════════════════════════════════════════════════════════════

/// Authenticated encryption over the fixed `nonce ‖ tag ‖ body` frame.
///
/// The legacy wire format uses empty associated data; the context-bound
/// extension passes the binding through `aad`.
pub trait AeadBackend: Send + Sync {
    /// Encrypts `plaintext` under `key` with a fresh random nonce.
    fn seal(&self, key: &SymmetricKey, plaintext: &[u8], aad: &[u8]) -> Result<ShareCiphertext>;

    /// Verifies and decrypts a ciphertext frame.
    ///
    /// # Errors
    /// Returns [`AuthenticationFailure`](crate::ShareSealError::AuthenticationFailure)
    /// if the tag does not verify.
    fn open(&self, key: &SymmetricKey, ciphertext: &ShareCiphertext, aad: &[u8])
        -> Result<Vec<u8>>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// SHARE TRANSPORT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface to the share-distribution layer.
///
/// Implementations might submit to a smart contract, a relay service, or an
/// in-memory registry for tests. They see ciphertexts only as opaque blobs;
/// an [`AuthenticationFailure`](crate::ShareSealError::AuthenticationFailure)
/// on a fetched share is a security event, not a transport fault to retry.
#[async_trait]
pub trait ShareTransport: Send + Sync {
    /// Submits an encrypted share addressed to `recipient`.
    ///
    /// Returns an implementation-defined receipt (e.g. a transaction hash).
    async fn submit_share(
        &self,
        recipient: &PublicPoint,
        ciphertext: &ShareCiphertext,
    ) -> Result<String>;

    /// Fetches the encrypted shares addressed to `recipient`.
    async fn fetch_shares(&self, recipient: &PublicPoint) -> Result<Vec<ShareCiphertext>>;

    /// Fetches the published verification-vector commitment of `dealer`,
    /// if one exists for the current round.
    async fn fetch_commitment(&self, dealer: &PublicPoint) -> Result<Option<Commitment>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShareSealError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // In-memory double, enough to exercise the trait object surface.
    #[derive(Default)]
    struct MemoryTransport {
        shares: Mutex<HashMap<Vec<u8>, Vec<ShareCiphertext>>>,
    }

    #[async_trait]
    impl ShareTransport for MemoryTransport {
        async fn submit_share(
            &self,
            recipient: &PublicPoint,
            ciphertext: &ShareCiphertext,
        ) -> Result<String> {
            let mut shares = self
                .shares
                .lock()
                .map_err(|_| ShareSealError::Transport("poisoned lock".into()))?;
            let entry = shares.entry(recipient.as_bytes().to_vec()).or_default();
            entry.push(ciphertext.clone());
            Ok(format!("receipt-{}", entry.len()))
        }

        async fn fetch_shares(&self, recipient: &PublicPoint) -> Result<Vec<ShareCiphertext>> {
            let shares = self
                .shares
                .lock()
                .map_err(|_| ShareSealError::Transport("poisoned lock".into()))?;
            Ok(shares.get(recipient.as_bytes()).cloned().unwrap_or_default())
        }

        async fn fetch_commitment(&self, _dealer: &PublicPoint) -> Result<Option<Commitment>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_transport_object_safety_and_roundtrip() {
        let transport: Box<dyn ShareTransport> = Box::<MemoryTransport>::default();

        let recipient = PublicPoint::from_bytes(&[2u8; 33]).unwrap();
        let frame = ShareCiphertext::from_bytes(&[0u8; 40]).unwrap();

        let receipt = transport.submit_share(&recipient, &frame).await.unwrap();
        assert_eq!(receipt, "receipt-1");

        let fetched = transport.fetch_shares(&recipient).await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0], frame);

        let other = PublicPoint::from_bytes(&[3u8; 33]).unwrap();
        assert!(transport.fetch_shares(&other).await.unwrap().is_empty());
        assert!(transport.fetch_commitment(&other).await.unwrap().is_none());
    }
}
