//! secp256k1 scalar multiplication.
//!
//! This module wraps the `k256` crate behind the [`CurveBackend`] capability
//! trait. The shared point is always returned in the uncompressed SEC1
//! encoding (65 bytes), which is the form key encapsulation feeds into the
//! KDF; it is never exposed externally as a credential.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{NonZeroScalar, PublicKey, SecretKey};
use rand::rngs::OsRng;

use shareseal_core::constants::SHARED_POINT_SIZE;
use shareseal_core::error::{Result, ShareSealError};
use shareseal_core::traits::CurveBackend;
use shareseal_core::types::{Keypair, PrivateScalar, PublicPoint};

// ═══════════════════════════════════════════════════════════════════════════════
// BACKEND
// ═══════════════════════════════════════════════════════════════════════════════

/// [`CurveBackend`] over secp256k1 via the `k256` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1Backend;

impl Secp256k1Backend {
    fn decode_point(point: &PublicPoint) -> Result<PublicKey> {
        PublicKey::from_sec1_bytes(point.as_bytes()).map_err(|_| {
            ShareSealError::InvalidKey("public point is not on the secp256k1 curve".into())
        })
    }

    fn decode_scalar(scalar: &PrivateScalar) -> Result<NonZeroScalar> {
        NonZeroScalar::try_from(scalar.as_bytes()).map_err(|_| {
            ShareSealError::InvalidKey(
                "private scalar is zero or not below the group order".into(),
            )
        })
    }
}

impl CurveBackend for Secp256k1Backend {
    fn multiply(&self, point: &PublicPoint, scalar: &PrivateScalar) -> Result<Vec<u8>> {
        let point = Self::decode_point(point)?;
        let scalar = Self::decode_scalar(scalar)?;

        // The group has prime order, so the product of a valid point and a
        // nonzero scalar is never the identity.
        let shared = point.to_projective() * *scalar;
        let encoded = shared.to_affine().to_encoded_point(false);
        debug_assert_eq!(encoded.len(), SHARED_POINT_SIZE);

        Ok(encoded.as_bytes().to_vec())
    }

    fn validate_point(&self, point: &PublicPoint) -> Result<()> {
        Self::decode_point(point).map(|_| ())
    }

    fn validate_scalar(&self, scalar: &PrivateScalar) -> Result<()> {
        Self::decode_scalar(scalar).map(|_| ())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FREE FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Multiplies `point` by `scalar` on secp256k1.
///
/// Returns the shared point in uncompressed SEC1 encoding (65 bytes).
///
/// # Errors
/// Returns [`ShareSealError::InvalidKey`] if the point does not decode to a
/// point on the curve, or the scalar is zero or not below the group order.
pub fn multiply(point: &PublicPoint, scalar: &PrivateScalar) -> Result<Vec<u8>> {
    Secp256k1Backend.multiply(point, scalar)
}

/// Generates a fresh secp256k1 keypair.
///
/// The public point uses the compressed encoding. Randomness comes from the
/// operating system RNG.
pub fn generate_keypair() -> Keypair {
    generate_keypair_with(&mut OsRng)
}

/// Generates a keypair from a caller-supplied RNG.
///
/// Production callers should prefer [`generate_keypair`]; this variant exists
/// for reproducible tests with a seeded RNG.
pub fn generate_keypair_with(rng: &mut (impl rand::CryptoRng + rand::RngCore)) -> Keypair {
    let secret = SecretKey::random(rng);
    let public = PublicPoint::from_bytes(secret.public_key().to_encoded_point(true).as_bytes())
        .expect("compressed secp256k1 point is 33 bytes");

    Keypair::new(public, PrivateScalar::from_array(secret.to_bytes().into()))
}
