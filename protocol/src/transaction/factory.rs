//! Turning selected inputs into a signed transaction.
//!
//! The creator decides *what* to spend. A [`TransactionFactory`] decides
//! whether that spend is well-formed and produces the proofs. Keeping the two
//! apart lets hosts plug in a different signer (a hardware device, a remote
//! service) without touching selection.

use std::collections::HashSet;

use tracing::debug;

use super::types::RegularTransaction;
use crate::boxes::{RegularBox, RegularBoxData};
use crate::config::TransferConfig;
use crate::crypto::keys::PrivateKey25519;
use crate::error::ConstructionError;

/// Builds a fully authorized transaction from inputs paired with secrets.
pub trait TransactionFactory {
    /// Produces one proof per input over the transaction's signing message.
    ///
    /// # Errors
    ///
    /// A [`ConstructionError`] if the inputs and outputs do not balance, if a
    /// secret cannot unlock its box, or if any other structural rule fails.
    /// Nothing is returned half-built.
    fn assemble(
        &self,
        inputs: Vec<(RegularBox, PrivateKey25519)>,
        outputs: Vec<RegularBoxData>,
        fee: u64,
        timestamp: u64,
    ) -> Result<RegularTransaction, ConstructionError>;
}

/// The standard Ed25519 factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularTransactionFactory {
    config: TransferConfig,
}

impl RegularTransactionFactory {
    pub fn with_config(config: TransferConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransferConfig {
        &self.config
    }

    fn check_structure(
        &self,
        inputs: &[(RegularBox, PrivateKey25519)],
        outputs: &[RegularBoxData],
        fee: u64,
    ) -> Result<(), ConstructionError> {
        if inputs.is_empty() {
            return Err(ConstructionError::EmptyInputs);
        }
        if inputs.len() > self.config.max_inputs {
            return Err(ConstructionError::TooManyInputs {
                count: inputs.len(),
                limit: self.config.max_inputs,
            });
        }
        if outputs.len() > self.config.max_outputs {
            return Err(ConstructionError::TooManyOutputs {
                count: outputs.len(),
                limit: self.config.max_outputs,
            });
        }

        let mut seen = HashSet::with_capacity(inputs.len());
        for (input, secret) in inputs {
            if !seen.insert(input.id()) {
                return Err(ConstructionError::DuplicateInput(input.id()));
            }
            if !secret.owns(input.proposition()) {
                return Err(ConstructionError::SecretMismatch(input.id()));
            }
        }

        let input_total: u128 = inputs.iter().map(|(b, _)| u128::from(b.value())).sum();
        let output_total: u128 = outputs.iter().map(|o| u128::from(o.value())).sum();
        if input_total != output_total + u128::from(fee) {
            return Err(ConstructionError::Unbalanced {
                inputs: input_total,
                outputs: output_total,
                fee,
            });
        }
        Ok(())
    }
}

impl TransactionFactory for RegularTransactionFactory {
    fn assemble(
        &self,
        inputs: Vec<(RegularBox, PrivateKey25519)>,
        outputs: Vec<RegularBoxData>,
        fee: u64,
        timestamp: u64,
    ) -> Result<RegularTransaction, ConstructionError> {
        self.check_structure(&inputs, &outputs, fee)?;

        let (boxes, secrets): (Vec<RegularBox>, Vec<PrivateKey25519>) = inputs.into_iter().unzip();
        let message = RegularTransaction::signing_message(&boxes, &outputs, fee, timestamp);
        let proofs = secrets.iter().map(|secret| secret.sign(&message)).collect();

        let tx = RegularTransaction::new(boxes, proofs, outputs, fee, timestamp);
        tx.semantic_validity()
            .map_err(|err| ConstructionError::SelfCheckFailed(err.to_string()))?;

        debug!(tx_id = %tx.id(), inputs = tx.inputs().len(), "transaction signed");
        Ok(tx)
    }
}
