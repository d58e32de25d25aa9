//! Protocol constants for ShareSeal.
//!
//! Frame offsets and key sizes are fixed by the existing wire format and must
//! not change: deployed payloads use a 16-byte GCM nonce and 16-byte tag.

// ═══════════════════════════════════════════════════════════════════════════════
// SECP256K1 SIZES (SEC1 ENCODINGS)
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of a private scalar in bytes (big-endian, `1 <= x < n`).
pub const PRIVATE_SCALAR_SIZE: usize = 32;

/// Size of a compressed SEC1 public point (`02`/`03` prefix + x coordinate).
pub const COMPRESSED_POINT_SIZE: usize = 33;

/// Size of an uncompressed SEC1 public point (`04` prefix + x + y coordinates).
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;

/// Size of the shared point produced by scalar multiplication.
/// Always the uncompressed encoding; the KDF input depends on it.
pub const SHARED_POINT_SIZE: usize = UNCOMPRESSED_POINT_SIZE;

// ═══════════════════════════════════════════════════════════════════════════════
// SYMMETRIC CIPHER SIZES
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of the derived AES-256 key in bytes.
pub const SYMMETRIC_KEY_SIZE: usize = 32;

/// Size of the GCM nonce in bytes.
///
/// Deliberately 16 rather than the conventional 12: existing encrypted share
/// payloads use a 16-byte nonce and the frame must stay byte-compatible.
pub const NONCE_SIZE: usize = 16;

/// Size of the GCM authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Minimum length of a valid share ciphertext (`nonce ‖ tag` with empty body).
pub const ENVELOPE_HEADER_SIZE: usize = NONCE_SIZE + TAG_SIZE;

// ═══════════════════════════════════════════════════════════════════════════════
// CONTEXT-BOUND FRAME (OPT-IN EXTENSION)
// ═══════════════════════════════════════════════════════════════════════════════

/// Version byte for the opt-in context-bound frame
/// (`version ‖ nonce ‖ tag ‖ body`). The legacy frame carries no version.
pub const ENVELOPE_VERSION: u8 = 1;

/// Minimum length of a context-bound ciphertext.
pub const BOUND_ENVELOPE_HEADER_SIZE: usize = 1 + ENVELOPE_HEADER_SIZE;
