//! Error types for transfer construction.
//!
//! Two layers. [`ConstructionError`] is what a transaction factory reports
//! when it cannot produce a balanced, fully signed transaction.
//! [`TransferError`] is what callers of the creator and the verifier see; it
//! wraps construction errors unchanged.

use thiserror::Error;

use crate::boxes::BoxId;
use crate::crypto::signature::SignatureError;

/// Errors raised while turning selected inputs into a signed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A transaction must consume at least one box.
    #[error("transaction has no inputs")]
    EmptyInputs,

    #[error("too many inputs: {count} (limit {limit})")]
    TooManyInputs { count: usize, limit: usize },

    #[error("too many outputs: {count} (limit {limit})")]
    TooManyOutputs { count: usize, limit: usize },

    /// The same box appears twice in the input list.
    #[error("duplicate input box {0}")]
    DuplicateInput(BoxId),

    /// The secret paired with an input does not own that input's box.
    #[error("secret does not own input box {0}")]
    SecretMismatch(BoxId),

    /// `sum(inputs) != sum(outputs) + fee`.
    #[error("unbalanced transaction: inputs={inputs}, outputs={outputs}, fee={fee}")]
    Unbalanced { inputs: u128, outputs: u128, fee: u64 },

    /// The freshly signed transaction failed its own validity check.
    #[error("signed transaction failed verification: {0}")]
    SelfCheckFailed(String),
}

/// Errors surfaced by transaction creation and verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// A caller-supplied argument is unusable: an amount overflow, a
    /// malformed signature, and the like.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The wallet's usable boxes do not cover outputs plus fee.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u128 },

    /// A proof did not validate, or the balance equation does not hold, on a
    /// transaction presented for use.
    #[error("verification failed: {0}")]
    VerificationFailure(String),

    /// The transaction factory refused to build the transaction.
    #[error("construction failed: {0}")]
    Construction(#[from] ConstructionError),
}

impl From<SignatureError> for TransferError {
    fn from(err: SignatureError) -> Self {
        TransferError::InvalidArgument(err.to_string())
    }
}
