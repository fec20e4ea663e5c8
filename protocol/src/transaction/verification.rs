//! Verification of regular transactions.
//!
//! Run on anything about to be relied on: a transaction received from a
//! peer, a transaction about to be applied to a wallet, and (as a last
//! check) every transaction the factory produces.
//!
//! Checks, in order:
//!
//! 1. There is at least one input, and exactly one proof per input.
//! 2. `sum(inputs) == sum(outputs) + fee`.
//! 3. Each proof is valid for its input's proposition over the transaction's
//!    signing message.

use tracing::warn;

use super::types::RegularTransaction;
use crate::error::TransferError;

impl RegularTransaction {
    /// Checks the balance equation and every input proof.
    ///
    /// # Errors
    ///
    /// [`TransferError::VerificationFailure`] naming the first rule broken.
    pub fn semantic_validity(&self) -> Result<(), TransferError> {
        if self.inputs().is_empty() {
            return Err(TransferError::VerificationFailure(
                "transaction has no inputs".to_string(),
            ));
        }
        if self.proofs().len() != self.inputs().len() {
            return Err(TransferError::VerificationFailure(format!(
                "{} proofs for {} inputs",
                self.proofs().len(),
                self.inputs().len()
            )));
        }

        let inputs = self.input_total();
        let outputs = self.output_total();
        if inputs != outputs + u128::from(self.fee()) {
            return Err(TransferError::VerificationFailure(format!(
                "unbalanced: inputs={}, outputs={}, fee={}",
                inputs,
                outputs,
                self.fee()
            )));
        }

        let message = self.message_to_sign();
        for (index, (input, proof)) in self.inputs().iter().zip(self.proofs()).enumerate() {
            if !proof.is_valid(input.proposition(), &message) {
                warn!(tx_id = %self.id(), index, box_id = %input.id(), "input proof rejected");
                return Err(TransferError::VerificationFailure(format!(
                    "proof {} does not unlock box {}",
                    index,
                    input.id()
                )));
            }
        }
        Ok(())
    }
}
