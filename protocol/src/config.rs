//! # Protocol Configuration & Constants
//!
//! Every magic number in boxpay lives here. If you're hardcoding a length
//! or a limit somewhere else, move it here first.
//!
//! The byte lengths are fixed by the signature scheme and the hash function.
//! The transaction limits are defaults for [`TransferConfig`], which callers
//! can override when they wire up a [`RegularTransactionFactory`].
//!
//! [`RegularTransactionFactory`]: crate::transaction::RegularTransactionFactory

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Secret key length in bytes. Ed25519 secret keys are 32 bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Public key (proposition) length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. Always 64 bytes. A proof of any other length
/// is rejected at construction time.
pub const SIGNATURE_LENGTH: usize = 64;

/// Box identifiers are BLAKE3 digests.
pub const BOX_ID_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Transaction Limits
// ---------------------------------------------------------------------------

/// Maximum number of inputs per transaction. Keeps verification bounded.
pub const MAX_TX_INPUTS: usize = 256;

/// Maximum number of outputs per transaction, change included.
pub const MAX_TX_OUTPUTS: usize = 256;

// ---------------------------------------------------------------------------
// TransferConfig
// ---------------------------------------------------------------------------

/// Tunable limits applied by the transaction factory.
///
/// Missing fields fall back to the protocol defaults, so an empty JSON
/// object is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Upper bound on the number of boxes a single transaction may consume.
    pub max_inputs: usize,
    /// Upper bound on the number of outputs, including change.
    pub max_outputs: usize,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            max_inputs: MAX_TX_INPUTS,
            max_outputs: MAX_TX_OUTPUTS,
        }
    }
}

impl TransferConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
