//! Public composition: `encrypt` and `decrypt` for share payloads.
//!
//! Control flow, per the channel contract:
//!
//! ```text
//! encrypt(pub, priv, commit, msg)  = seal(encapsulate(priv, pub, commit), msg)
//! decrypt(priv, pub, commit, blob) = open(encapsulate(priv, pub, commit), blob)
//! ```
//!
//! Nothing here retains state between calls; the only nondeterminism is the
//! nonce draw inside `seal`. [`ShareChannel`] is the same composition over
//! explicit [`CurveBackend`]/[`AeadBackend`] implementations, and also hosts
//! the opt-in context-bound frame (`version ‖ nonce ‖ tag ‖ body`) for
//! callers that want the ciphertext tied to a protocol context such as a
//! chain id or contract address. The legacy frame stays the default.

use tracing::{trace, warn};

use shareseal_core::constants::{BOUND_ENVELOPE_HEADER_SIZE, ENVELOPE_VERSION};
use shareseal_core::error::{Result, ShareSealError};
use shareseal_core::traits::{AeadBackend, CurveBackend};
use shareseal_core::types::{Commitment, PrivateScalar, PublicPoint, ShareCiphertext};

use crate::aead::Aes256GcmBackend;
use crate::ecdh::Secp256k1Backend;
use crate::kdf::encapsulate_with;

// ═══════════════════════════════════════════════════════════════════════════════
// FREE FUNCTIONS (DEFAULT BACKENDS)
// ═══════════════════════════════════════════════════════════════════════════════

/// Encrypts a share payload for the holder of `point`.
///
/// `commitment` must identify the verification vector the share belongs to;
/// the recipient needs the same commitment (transmitted out-of-band) to
/// decrypt.
///
/// # Errors
/// - [`ShareSealError::InvalidKey`] for bad key material
/// - [`ShareSealError::RandomnessUnavailable`] if the nonce draw fails
pub fn encrypt(
    point: &PublicPoint,
    scalar: &PrivateScalar,
    commitment: &Commitment,
    plaintext: &[u8],
) -> Result<ShareCiphertext> {
    ShareChannel::new().encrypt(point, scalar, commitment, plaintext)
}

/// Decrypts a share payload received from the holder of `point`.
///
/// # Errors
/// - [`ShareSealError::InvalidKey`] for bad key material
/// - [`ShareSealError::MalformedInput`] if `blob` is shorter than 32 bytes
/// - [`ShareSealError::AuthenticationFailure`] on tampering, wrong key, or
///   wrong commitment — treat as a security event and discard the share
pub fn decrypt(
    scalar: &PrivateScalar,
    point: &PublicPoint,
    commitment: &Commitment,
    blob: &[u8],
) -> Result<Vec<u8>> {
    ShareChannel::new().decrypt(scalar, point, commitment, blob)
}

// ═══════════════════════════════════════════════════════════════════════════════
// SHARE CHANNEL
// ═══════════════════════════════════════════════════════════════════════════════

/// The share channel over pluggable curve and AEAD backends.
///
/// Defaults to secp256k1 + AES-256-GCM, the combination every deployed
/// payload uses.
#[derive(Clone, Copy, Debug)]
pub struct ShareChannel<C = Secp256k1Backend, A = Aes256GcmBackend> {
    curve: C,
    aead: A,
}

impl ShareChannel {
    /// Creates a channel over the default backends.
    pub fn new() -> Self {
        Self {
            curve: Secp256k1Backend,
            aead: Aes256GcmBackend,
        }
    }
}

impl Default for ShareChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CurveBackend, A: AeadBackend> ShareChannel<C, A> {
    /// Creates a channel over explicit backends.
    pub fn with_backends(curve: C, aead: A) -> Self {
        Self { curve, aead }
    }

    /// Encrypts a share payload in the legacy frame (empty associated data).
    pub fn encrypt(
        &self,
        point: &PublicPoint,
        scalar: &PrivateScalar,
        commitment: &Commitment,
        plaintext: &[u8],
    ) -> Result<ShareCiphertext> {
        let key = encapsulate_with(&self.curve, scalar, point, commitment)?;
        let sealed = self.aead.seal(&key, plaintext, &[])?;
        trace!(payload_len = plaintext.len(), "sealed share payload");
        Ok(sealed)
    }

    /// Decrypts a legacy-frame share payload.
    pub fn decrypt(
        &self,
        scalar: &PrivateScalar,
        point: &PublicPoint,
        commitment: &Commitment,
        blob: &[u8],
    ) -> Result<Vec<u8>> {
        let ciphertext = ShareCiphertext::from_bytes(blob)?;
        let key = encapsulate_with(&self.curve, scalar, point, commitment)?;
        self.aead.open(&key, &ciphertext, &[]).map_err(|err| {
            if err.is_security_event() {
                warn!("share ciphertext rejected: authentication failed");
            }
            err
        })
    }

    /// Encrypts in the opt-in context-bound frame:
    /// `version(1) ‖ nonce(16) ‖ tag(16) ‖ body`, with
    /// `aad = version ‖ context`. Not compatible with [`decrypt`]; both
    /// parties must agree to use the bound frame.
    pub fn encrypt_bound(
        &self,
        point: &PublicPoint,
        scalar: &PrivateScalar,
        commitment: &Commitment,
        context: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        let key = encapsulate_with(&self.curve, scalar, point, commitment)?;
        let sealed = self.aead.seal(&key, plaintext, &bound_aad(context))?;

        let mut out = Vec::with_capacity(1 + sealed.len());
        out.push(ENVELOPE_VERSION);
        out.extend_from_slice(sealed.as_bytes());
        trace!(payload_len = plaintext.len(), "sealed context-bound share payload");
        Ok(out)
    }

    /// Decrypts a context-bound frame produced by [`Self::encrypt_bound`].
    ///
    /// # Errors
    /// In addition to the legacy-frame errors:
    /// - [`ShareSealError::UnsupportedVersion`] for an unknown version byte
    /// - [`ShareSealError::AuthenticationFailure`] if `context` differs from
    ///   the one the sender bound
    pub fn decrypt_bound(
        &self,
        scalar: &PrivateScalar,
        point: &PublicPoint,
        commitment: &Commitment,
        context: &[u8],
        blob: &[u8],
    ) -> Result<Vec<u8>> {
        if blob.len() < BOUND_ENVELOPE_HEADER_SIZE {
            return Err(ShareSealError::MalformedInput {
                expected: BOUND_ENVELOPE_HEADER_SIZE,
                actual: blob.len(),
            });
        }
        if blob[0] != ENVELOPE_VERSION {
            return Err(ShareSealError::UnsupportedVersion {
                expected: ENVELOPE_VERSION,
                actual: blob[0],
            });
        }

        let ciphertext = ShareCiphertext::from_bytes(&blob[1..])?;
        let key = encapsulate_with(&self.curve, scalar, point, commitment)?;
        self.aead
            .open(&key, &ciphertext, &bound_aad(context))
            .map_err(|err| {
                if err.is_security_event() {
                    warn!("context-bound share ciphertext rejected: authentication failed");
                }
                err
            })
    }
}

/// Associated data for the bound frame. The version byte is covered by the
/// tag so a frame cannot be replayed under a future version.
fn bound_aad(context: &[u8]) -> Vec<u8> {
    let mut aad = Vec::with_capacity(1 + context.len());
    aad.push(ENVELOPE_VERSION);
    aad.extend_from_slice(context);
    aad
}
