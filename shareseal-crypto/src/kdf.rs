//! Key encapsulation: commitment-bound HKDF-SHA256.
//!
//! ## Derivation Flow
//!
//! ```text
//! shared_point = priv · pub                 (uncompressed, 65 bytes)
//!       ↓
//! master = commit ‖ shared_point
//!       ↓
//! key = HKDF-SHA256(ikm = master, salt = none, info = empty, L = 32)
//! ```
//!
//! Binding the Diffie-Hellman secret to the commitment means two verification
//! vectors sharing a keypair still derive different share keys, closing the
//! key-reuse hole in multi-share protocols. The construction is symmetric in
//! which party supplies the private input: `encapsulate(a, B, c)` equals
//! `encapsulate(b, A, c)` because `a·B == b·A`.
//!
//! The salt and info parameters are empty for compatibility with deployed
//! payloads; changing either changes every derived key.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

use shareseal_core::constants::SYMMETRIC_KEY_SIZE;
use shareseal_core::error::Result;
use shareseal_core::traits::CurveBackend;
use shareseal_core::types::{Commitment, PrivateScalar, PublicPoint, SymmetricKey};

use crate::ecdh::Secp256k1Backend;

/// Derives the symmetric share key for a `(priv, pub, commit)` triple.
///
/// Deterministic: identical inputs always derive the identical key.
///
/// # Errors
/// Propagates [`InvalidKey`](shareseal_core::ShareSealError::InvalidKey) from
/// the scalar multiplication; otherwise total.
pub fn encapsulate(
    scalar: &PrivateScalar,
    point: &PublicPoint,
    commitment: &Commitment,
) -> Result<SymmetricKey> {
    encapsulate_with(&Secp256k1Backend, scalar, point, commitment)
}

/// [`encapsulate`] over an explicit curve backend.
pub fn encapsulate_with(
    curve: &dyn CurveBackend,
    scalar: &PrivateScalar,
    point: &PublicPoint,
    commitment: &Commitment,
) -> Result<SymmetricKey> {
    let mut shared = curve.multiply(point, scalar)?;

    let mut master = Vec::with_capacity(commitment.len() + shared.len());
    master.extend_from_slice(commitment.as_bytes());
    master.extend_from_slice(&shared);

    let hk = Hkdf::<Sha256>::new(None, &master);
    let mut okm = [0u8; SYMMETRIC_KEY_SIZE];
    hk.expand(&[], &mut okm)
        .expect("32-byte output is within the HKDF-SHA256 limit");

    shared.zeroize();
    master.zeroize();

    Ok(SymmetricKey::from_array(okm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecdh::generate_keypair;
    use shareseal_core::error::ShareSealError;

    fn commit(label: &[u8]) -> Commitment {
        Commitment::new(label.to_vec())
    }

    #[test]
    fn test_encapsulate_is_deterministic() {
        let alice = generate_keypair();
        let bob = generate_keypair();

        let k1 = encapsulate(&alice.secret, &bob.public, &commit(b"vector-1")).unwrap();
        let k2 = encapsulate(&alice.secret, &bob.public, &commit(b"vector-1")).unwrap();
        assert_eq!(k1, k2);
    }

    #[test]
    fn test_encapsulate_is_symmetric() {
        // encapsulate(a, B, c) == encapsulate(b, A, c)
        let alice = generate_keypair();
        let bob = generate_keypair();
        let c = commit(b"vector-1");

        let sender_key = encapsulate(&alice.secret, &bob.public, &c).unwrap();
        let receiver_key = encapsulate(&bob.secret, &alice.public, &c).unwrap();
        assert_eq!(sender_key, receiver_key);
    }

    #[test]
    fn test_distinct_commitments_derive_distinct_keys() {
        let alice = generate_keypair();
        let bob = generate_keypair();

        let k1 = encapsulate(&alice.secret, &bob.public, &commit(b"vector-1")).unwrap();
        let k2 = encapsulate(&alice.secret, &bob.public, &commit(b"vector-2")).unwrap();
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_distinct_keypairs_derive_distinct_keys() {
        let alice = generate_keypair();
        let bob = generate_keypair();
        let carol = generate_keypair();
        let c = commit(b"vector-1");

        let to_bob = encapsulate(&alice.secret, &bob.public, &c).unwrap();
        let to_carol = encapsulate(&alice.secret, &carol.public, &c).unwrap();
        assert_ne!(to_bob, to_carol);
    }

    #[test]
    fn test_empty_commitment_is_allowed() {
        let alice = generate_keypair();
        let bob = generate_keypair();

        let key = encapsulate(&alice.secret, &bob.public, &commit(b"")).unwrap();
        assert_eq!(key.as_bytes().len(), SYMMETRIC_KEY_SIZE);
    }

    #[test]
    fn test_encapsulate_propagates_invalid_key() {
        let bob = generate_keypair();
        let zero = PrivateScalar::from_array([0u8; 32]);

        let err = encapsulate(&zero, &bob.public, &commit(b"vector-1")).unwrap_err();
        assert!(matches!(err, ShareSealError::InvalidKey(_)));
    }

    #[test]
    fn test_encapsulate_with_explicit_backend_matches_default() {
        let alice = generate_keypair();
        let bob = generate_keypair();
        let c = commit(b"vector-1");

        let via_default = encapsulate(&alice.secret, &bob.public, &c).unwrap();
        let via_backend =
            encapsulate_with(&Secp256k1Backend, &alice.secret, &bob.public, &c).unwrap();
        assert_eq!(via_default, via_backend);
    }
}
