//! AES-256-GCM over the fixed share ciphertext frame.
//!
//! The frame is `nonce(16) ‖ tag(16) ‖ body`, with empty associated data on
//! the legacy path. The 16-byte nonce deviates from the conventional 12-byte
//! GCM nonce and is kept exactly for compatibility with deployed payloads;
//! `AesGcm<Aes256, U16>` encodes the width in the cipher type.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aes::Aes256;
use aes_gcm::{AeadInPlace, AesGcm, KeyInit};
use rand::rngs::OsRng;
use rand::RngCore;

use shareseal_core::constants::NONCE_SIZE;
use shareseal_core::error::{Result, ShareSealError};
use shareseal_core::traits::AeadBackend;
use shareseal_core::types::{ShareCiphertext, SymmetricKey};

/// AES-256-GCM with the 16-byte nonce used by the share frame.
type WideNonceAesGcm = AesGcm<Aes256, U16>;

// ═══════════════════════════════════════════════════════════════════════════════
// BACKEND
// ═══════════════════════════════════════════════════════════════════════════════

/// [`AeadBackend`] over AES-256-GCM via the `aes-gcm` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Aes256GcmBackend;

impl AeadBackend for Aes256GcmBackend {
    fn seal(&self, key: &SymmetricKey, plaintext: &[u8], aad: &[u8]) -> Result<ShareCiphertext> {
        let mut nonce = [0u8; NONCE_SIZE];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| ShareSealError::RandomnessUnavailable(e.to_string()))?;

        let cipher = WideNonceAesGcm::new(GenericArray::from_slice(key.as_bytes()));
        let mut body = plaintext.to_vec();
        let tag = cipher
            .encrypt_in_place_detached(GenericArray::from_slice(&nonce), aad, &mut body)
            .map_err(|_| ShareSealError::Internal("plaintext exceeds AES-GCM limits".into()))?;

        Ok(ShareCiphertext::from_parts(&nonce, tag.as_slice(), &body))
    }

    fn open(
        &self,
        key: &SymmetricKey,
        ciphertext: &ShareCiphertext,
        aad: &[u8],
    ) -> Result<Vec<u8>> {
        let cipher = WideNonceAesGcm::new(GenericArray::from_slice(key.as_bytes()));
        let mut body = ciphertext.body().to_vec();

        cipher
            .decrypt_in_place_detached(
                GenericArray::from_slice(ciphertext.nonce()),
                aad,
                &mut body,
                GenericArray::from_slice(ciphertext.tag()),
            )
            .map_err(|_| ShareSealError::AuthenticationFailure)?;

        Ok(body)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FREE FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Encrypts `plaintext` under `key` with a fresh random 16-byte nonce.
///
/// Uses the legacy frame: empty associated data, `nonce ‖ tag ‖ body`.
///
/// # Errors
/// Returns [`ShareSealError::RandomnessUnavailable`] if the OS random source
/// cannot supply nonce bytes.
pub fn seal(key: &SymmetricKey, plaintext: &[u8]) -> Result<ShareCiphertext> {
    Aes256GcmBackend.seal(key, plaintext, &[])
}

/// Verifies and decrypts a legacy-frame blob.
///
/// # Errors
/// - [`ShareSealError::MalformedInput`] if `blob` is shorter than 32 bytes
/// - [`ShareSealError::AuthenticationFailure`] if the tag does not verify
pub fn open(key: &SymmetricKey, blob: &[u8]) -> Result<Vec<u8>> {
    let ciphertext = ShareCiphertext::from_bytes(blob)?;
    Aes256GcmBackend.open(key, &ciphertext, &[])
}
