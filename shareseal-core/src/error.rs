//! Error types for ShareSeal.
//!
//! This module provides the error taxonomy for the share channel using
//! `thiserror`. Every error is returned to the immediate caller; nothing is
//! retried internally, since each variant is either a permanent input error or
//! requires external remediation.

use thiserror::Error;

/// Result type alias using `ShareSealError`.
pub type Result<T> = std::result::Result<T, ShareSealError>;

/// Main error type for all ShareSeal operations.
#[derive(Debug, Error)]
pub enum ShareSealError {
    // ═══════════════════════════════════════════════════════════════════════════
    // KEY MATERIAL ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Malformed or out-of-range public/private key material.
    /// Detected before any cryptographic operation proceeds.
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // CIPHERTEXT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Tag verification failed on decryption: tampering, wrong key or
    /// commitment, or corrupted transport. The share must not be accepted.
    #[error("ciphertext authentication failed")]
    AuthenticationFailure,

    /// Ciphertext shorter than the minimum frame size.
    #[error("malformed ciphertext: need at least {expected} bytes, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    /// Context-bound frame carries an unknown version byte.
    #[error("unsupported envelope version: expected {expected}, got {actual}")]
    UnsupportedVersion { expected: u8, actual: u8 },

    // ═══════════════════════════════════════════════════════════════════════════
    // PLATFORM ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The secure random source could not supply bytes. Fatal for the call;
    /// retrying without fixing entropy starvation cannot help.
    #[error("secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // TRANSPORT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Failure in a [`ShareTransport`](crate::traits::ShareTransport)
    /// implementation (submission or query against the share registry).
    #[error("transport error: {0}")]
    Transport(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Invalid hex encoding.
    #[error("invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),

    // ═══════════════════════════════════════════════════════════════════════════
    // INTERNAL ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Internal invariant violation (should never happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ShareSealError {
    /// Returns true if this error must be treated as a security event.
    ///
    /// An authentication failure means the share was tampered with or
    /// encrypted for different parameters; the payload must be discarded.
    pub fn is_security_event(&self) -> bool {
        matches!(self, ShareSealError::AuthenticationFailure)
    }

    /// Returns true if this error is recoverable (can retry).
    ///
    /// Only transport failures qualify; every cryptographic error is a
    /// permanent property of its inputs.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ShareSealError::Transport(_))
    }

    /// Returns true if this error stems from the inputs at the call boundary.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ShareSealError::InvalidKey(_)
                | ShareSealError::MalformedInput { .. }
                | ShareSealError::UnsupportedVersion { .. }
                | ShareSealError::Hex(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShareSealError::MalformedInput {
            expected: 32,
            actual: 10,
        };
        assert!(err.to_string().contains("32"));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_error_classification() {
        assert!(ShareSealError::AuthenticationFailure.is_security_event());
        assert!(!ShareSealError::AuthenticationFailure.is_recoverable());

        assert!(ShareSealError::Transport("timeout".into()).is_recoverable());
        assert!(!ShareSealError::Transport("timeout".into()).is_security_event());

        assert!(ShareSealError::InvalidKey("bad point".into()).is_input_error());
        assert!(!ShareSealError::RandomnessUnavailable("entropy".into()).is_input_error());
    }

    #[test]
    fn test_hex_error_conversion() {
        let hex_result = hex::decode("zz");
        let err: ShareSealError = hex_result.unwrap_err().into();
        assert!(matches!(err, ShareSealError::Hex(_)));
        assert!(err.is_input_error());
    }
}
