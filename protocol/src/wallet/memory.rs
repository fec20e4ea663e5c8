//! In-memory wallet.
//!
//! Boxes are kept in a `BTreeMap` keyed by a creation sequence number, so
//! iteration order is creation order without any sorting. A side index maps
//! box ids back to their sequence number for removal and duplicate checks.

use std::collections::{BTreeMap, HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

use super::NodeWallet;
use crate::boxes::{BoxId, BoxKind, RegularBox};
use crate::crypto::keys::{PrivateKey25519, PublicKey25519Proposition};
use crate::error::TransferError;
use crate::transaction::RegularTransaction;

/// Errors that can occur while mutating a [`MemoryWallet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// A box with this id is already tracked.
    #[error("box {0} is already in the wallet")]
    DuplicateBox(BoxId),

    /// A transaction handed to [`MemoryWallet::apply_transaction`] did not
    /// pass verification.
    #[error("refusing to apply invalid transaction: {0}")]
    InvalidTransaction(#[from] TransferError),
}

/// A wallet that lives entirely in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryWallet {
    secrets: HashMap<PublicKey25519Proposition, PrivateKey25519>,
    boxes: BTreeMap<u64, RegularBox>,
    positions: HashMap<BoxId, u64>,
    next_seq: u64,
}

impl MemoryWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a secret and returns the proposition it unlocks.
    pub fn add_secret(&mut self, secret: PrivateKey25519) -> PublicKey25519Proposition {
        let proposition = secret.public_image();
        self.secrets.insert(proposition, secret);
        proposition
    }

    /// Tracks a new box as the youngest one in the wallet.
    ///
    /// The box need not be owned by a held secret. Such boxes are listed as
    /// spendable but cannot be selected.
    pub fn add_box(&mut self, new_box: RegularBox) -> Result<(), WalletError> {
        if self.positions.contains_key(&new_box.id()) {
            return Err(WalletError::DuplicateBox(new_box.id()));
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.positions.insert(new_box.id(), seq);
        self.boxes.insert(seq, new_box);
        Ok(())
    }

    /// Stops tracking a box, returning it if it was present.
    pub fn remove_box(&mut self, id: &BoxId) -> Option<RegularBox> {
        let seq = self.positions.remove(id)?;
        self.boxes.remove(&seq)
    }

    pub fn contains_box(&self, id: &BoxId) -> bool {
        self.positions.contains_key(id)
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Sum of all tracked box values, whether or not a secret is held.
    pub fn balance(&self) -> u128 {
        self.boxes.values().map(|b| u128::from(b.value())).sum()
    }

    /// Sum of the values of boxes this wallet can actually unlock.
    pub fn spendable_balance(&self) -> u128 {
        self.boxes
            .values()
            .filter(|b| self.secrets.contains_key(b.proposition()))
            .map(|b| u128::from(b.value()))
            .sum()
    }

    /// Records a confirmed transaction.
    ///
    /// Consumed inputs this wallet tracks are removed. Every new box locked
    /// to a proposition this wallet holds a secret for is added, in output
    /// order. Returns the number of boxes added.
    ///
    /// The transaction is verified and every received box id is checked
    /// against the tracked ones before anything is touched. On error the
    /// wallet is left exactly as it was.
    pub fn apply_transaction(&mut self, tx: &RegularTransaction) -> Result<usize, WalletError> {
        tx.semantic_validity()?;

        let consumed: HashSet<BoxId> = tx.input_ids().into_iter().collect();
        let received: Vec<RegularBox> = tx
            .new_boxes()
            .into_iter()
            .filter(|b| self.secrets.contains_key(b.proposition()))
            .collect();
        if let Some(clash) = received
            .iter()
            .find(|b| self.contains_box(&b.id()) && !consumed.contains(&b.id()))
        {
            return Err(WalletError::DuplicateBox(clash.id()));
        }

        for id in tx.input_ids() {
            if self.remove_box(&id).is_some() {
                debug!(box_id = %id, "box consumed");
            }
        }

        let added = received.len();
        for new_box in received {
            debug!(box_id = %new_box.id(), value = new_box.value(), "box received");
            self.add_box(new_box)?;
        }
        Ok(added)
    }
}

impl NodeWallet for MemoryWallet {
    fn boxes_of_kind(&self, kind: BoxKind, boxes_to_exclude: &[BoxId]) -> Vec<RegularBox> {
        let excluded: HashSet<BoxId> = boxes_to_exclude.iter().copied().collect();
        self.boxes
            .values()
            .filter(|b| b.kind() == kind && !excluded.contains(&b.id()))
            .cloned()
            .collect()
    }

    fn secret_by_public_key(
        &self,
        proposition: &PublicKey25519Proposition,
    ) -> Option<PrivateKey25519> {
        self.secrets.get(proposition).cloned()
    }
}
