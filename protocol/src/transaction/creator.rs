//! Building a transfer from a wallet.
//!
//! [`RegularTransactionCreator::create`] is the entry point callers want:
//! give it a wallet, the outputs to pay, where change should go, a fee, and
//! any boxes to leave alone, and it returns a signed candidate transaction.
//!
//! ```text
//! validate arguments ─► select inputs ─► add change ─► timestamp ─► factory
//!   (no wallet access)    (wallet reads)                 (clock)     (signs)
//! ```
//!
//! Argument checks happen before the wallet is touched, so a rejected
//! request has no observable effect. The creator never mutates the wallet.

use tracing::info;

use super::change::change_output;
use super::factory::{RegularTransactionFactory, TransactionFactory};
use super::selection::select_inputs;
use super::types::RegularTransaction;
use crate::boxes::{BoxId, RegularBoxData};
use crate::clock::{Clock, SystemClock};
use crate::crypto::keys::PublicKey25519Proposition;
use crate::error::TransferError;
use crate::wallet::NodeWallet;

/// Assembles transfers by selecting wallet boxes and delegating signing to a
/// [`TransactionFactory`].
#[derive(Debug, Clone, Default)]
pub struct RegularTransactionCreator<F = RegularTransactionFactory, C = SystemClock> {
    factory: F,
    clock: C,
}

impl<F, C> RegularTransactionCreator<F, C>
where
    F: TransactionFactory,
    C: Clock,
{
    pub fn new(factory: F, clock: C) -> Self {
        Self { factory, clock }
    }

    /// Builds and signs a transaction paying `to` plus `fee` out of `wallet`.
    ///
    /// Boxes are taken oldest first until `sum(to) + fee` is covered. Any
    /// surplus goes to `change_address` as one extra, final output. Boxes
    /// whose owner has no secret in the wallet are skipped.
    ///
    /// # Errors
    ///
    /// - [`TransferError::InvalidArgument`] if `sum(to) + fee` overflows.
    ///   Raised before any wallet call.
    /// - [`TransferError::InsufficientFunds`] if the usable boxes fall short.
    /// - [`TransferError::Construction`] if the factory rejects the result.
    pub fn create(
        &self,
        wallet: &dyn NodeWallet,
        to: &[RegularBoxData],
        change_address: &PublicKey25519Proposition,
        fee: u64,
        boxes_to_exclude: &[BoxId],
    ) -> Result<RegularTransaction, TransferError> {
        let target = to
            .iter()
            .try_fold(fee, |acc, output| acc.checked_add(output.value()))
            .ok_or_else(|| {
                TransferError::InvalidArgument(
                    "sum of output values and fee overflows u64".to_string(),
                )
            })?;

        let selection = select_inputs(wallet, target, boxes_to_exclude)?;

        let mut outputs = to.to_vec();
        if let Some(change) = change_output(selection.accumulated, target, change_address) {
            outputs.push(change);
        }

        let timestamp = self.clock.now_millis();
        let tx = self
            .factory
            .assemble(selection.inputs, outputs, fee, timestamp)?;

        info!(
            tx_id = %tx.id(),
            inputs = tx.inputs().len(),
            outputs = tx.outputs().len(),
            fee,
            "created regular transaction"
        );
        Ok(tx)
    }
}

/// [`RegularTransactionCreator::create`] with the default factory and the
/// system clock.
pub fn create_regular_transaction(
    wallet: &dyn NodeWallet,
    to: &[RegularBoxData],
    change_address: &PublicKey25519Proposition,
    fee: u64,
    boxes_to_exclude: &[BoxId],
) -> Result<RegularTransaction, TransferError> {
    RegularTransactionCreator::<RegularTransactionFactory, SystemClock>::default().create(
        wallet,
        to,
        change_address,
        fee,
        boxes_to_exclude,
    )
}
