//! # Wallet Collaborator
//!
//! The creator never owns boxes or secrets. It asks a [`NodeWallet`] two
//! questions: which boxes can I spend, and which secret unlocks this one.
//! Storage, indexing, and concurrency control are the wallet's business.
//!
//! [`MemoryWallet`] is a complete in-memory implementation, good enough for
//! tests, tooling, and embedding in a single-threaded host.
//!
//! ## Consistency
//!
//! The two calls are separate. If the wallet changes between listing boxes
//! and looking up a secret, the creator may pick a box that has just been
//! spent. Nothing here detects that; ledger validation rejects the resulting
//! transaction. Callers sharing a wallet across threads must serialize
//! wallet mutation against transaction creation themselves.

pub mod memory;

use crate::boxes::{BoxId, BoxKind, RegularBox};
use crate::crypto::keys::{PrivateKey25519, PublicKey25519Proposition};

pub use memory::{MemoryWallet, WalletError};

/// Read-only view of a wallet, as seen by transaction creation.
pub trait NodeWallet {
    /// Spendable boxes of `kind`, oldest first, skipping `boxes_to_exclude`.
    ///
    /// The order is creation order and must be stable: selection walks it
    /// front to back and stops as soon as the target is covered.
    fn boxes_of_kind(&self, kind: BoxKind, boxes_to_exclude: &[BoxId]) -> Vec<RegularBox>;

    /// The secret that can unlock boxes locked to `proposition`, if held.
    fn secret_by_public_key(
        &self,
        proposition: &PublicKey25519Proposition,
    ) -> Option<PrivateKey25519>;
}
