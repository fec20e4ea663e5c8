//! # Cryptographic Primitives
//!
//! Everything that touches key material or hashes lives here:
//!
//! - **keys**: Ed25519 secrets and the propositions boxes are locked to.
//! - **signature**: the fixed-length proof that unlocks a box.
//! - **hash**: SHA-256 for transaction ids, BLAKE3 for box ids.
//!
//! These are thin, typed wrappers around `ed25519-dalek`, `sha2` and
//! `blake3`. Nothing here implements curve arithmetic by hand.

pub mod hash;
pub mod keys;
pub mod signature;

pub use hash::{blake3_hash, double_sha256, sha256};
pub use keys::{KeyError, PrivateKey25519, PublicKey25519Proposition};
pub use signature::{ProofOfKnowledge, Signature25519, SignatureError};
