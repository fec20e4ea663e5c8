//! # Boxes
//!
//! A box is a spendable unit of value locked to a proposition, the UTXO of
//! this ledger. Boxes are immutable: they come into existence as outputs of
//! a confirmed transaction and stop existing when a later transaction
//! consumes them.
//!
//! [`RegularBoxData`] is the not-yet-a-box form: a destination and a value
//! requested as a transaction output. It becomes a [`RegularBox`] (with an
//! id) only once the transaction that names it is confirmed.
//!
//! All values are `u64` in the smallest unit. Negative values cannot be
//! expressed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::BOX_ID_LENGTH;
use crate::crypto::hash::blake3_hash_many;
use crate::crypto::keys::{hex_bytes, PublicKey25519Proposition};

/// A box identifier: 32 bytes, unique across the ledger.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxId(#[serde(with = "hex_bytes")] [u8; BOX_ID_LENGTH]);

impl BoxId {
    pub fn from_bytes(bytes: [u8; BOX_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BOX_ID_LENGTH] {
        &self.0
    }

    /// Id of output `index` of the transaction whose raw id is `tx_id`.
    ///
    /// `blake3(tx_id || index as u64 LE)`. Distinct outputs of one
    /// transaction, and outputs of distinct transactions, get distinct ids.
    pub fn derive(tx_id: &[u8], index: u64) -> Self {
        Self(blake3_hash_many(&[tx_id, &index.to_le_bytes()]))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxId({})", &self.to_hex()[..16])
    }
}

/// The kinds of box a wallet can be asked for.
///
/// Only regular (value-carrying, key-locked) boxes exist today. The listing
/// call still names the kind so wallets holding other box types can filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxKind {
    Regular,
}

/// A spendable box holding `value` units, locked to `proposition`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegularBox {
    id: BoxId,
    proposition: PublicKey25519Proposition,
    value: u64,
}

impl RegularBox {
    pub fn new(id: BoxId, proposition: PublicKey25519Proposition, value: u64) -> Self {
        Self {
            id,
            proposition,
            value,
        }
    }

    pub fn id(&self) -> BoxId {
        self.id
    }

    pub fn proposition(&self) -> &PublicKey25519Proposition {
        &self.proposition
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn kind(&self) -> BoxKind {
        BoxKind::Regular
    }
}

/// A requested output: who will own the new box and how much it holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegularBoxData {
    proposition: PublicKey25519Proposition,
    value: u64,
}

impl RegularBoxData {
    pub fn new(proposition: PublicKey25519Proposition, value: u64) -> Self {
        Self { proposition, value }
    }

    pub fn proposition(&self) -> &PublicKey25519Proposition {
        &self.proposition
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Materializes this output as a box with the given id.
    pub fn into_box(self, id: BoxId) -> RegularBox {
        RegularBox::new(id, self.proposition, self.value)
    }
}
