//! The regular transaction: boxes in, box data out, one proof per input.
//!
//! A [`RegularTransaction`] produced by this crate is a *candidate*. It is
//! balanced and fully signed, but it only takes effect once the ledger
//! confirms it. At that point [`RegularTransaction::new_boxes`] gives the
//! boxes it creates.

use serde::{Deserialize, Serialize};

use crate::boxes::{BoxId, RegularBox, RegularBoxData};
use crate::config::{BOX_ID_LENGTH, PUBLIC_KEY_LENGTH};
use crate::crypto::hash::double_sha256;
use crate::crypto::signature::Signature25519;

/// Width of every integer field in the signing message.
const WORD: usize = std::mem::size_of::<u64>();

// Length prefixes and output indices are encoded as u64, so no `usize`
// can be truncated on the way in.
const _: () = assert!(usize::BITS <= u64::BITS);

/// A value transfer between boxes.
///
/// Invariant (checked by [`semantic_validity`](Self::semantic_validity)):
/// `sum(inputs) == sum(outputs) + fee`, and `proofs[i]` unlocks
/// `inputs[i]` for [`message_to_sign`](Self::message_to_sign).
///
/// Secrets are never stored here; the factory uses them to sign and drops
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularTransaction {
    inputs: Vec<RegularBox>,
    proofs: Vec<Signature25519>,
    outputs: Vec<RegularBoxData>,
    fee: u64,
    /// Unix milliseconds at construction time.
    timestamp: u64,
}

impl RegularTransaction {
    /// Assembles a transaction from already-computed parts.
    ///
    /// No checks are made. Use a [`TransactionFactory`] to build signed
    /// transactions, and [`semantic_validity`](Self::semantic_validity) to
    /// check ones received from elsewhere.
    ///
    /// [`TransactionFactory`]: super::TransactionFactory
    pub fn new(
        inputs: Vec<RegularBox>,
        proofs: Vec<Signature25519>,
        outputs: Vec<RegularBoxData>,
        fee: u64,
        timestamp: u64,
    ) -> Self {
        Self {
            inputs,
            proofs,
            outputs,
            fee,
            timestamp,
        }
    }

    /// Canonical bytes every input proof signs.
    ///
    /// Computable before any proof exists, so the factory signs exactly what
    /// verifiers will later reconstruct.
    pub fn signing_message(
        inputs: &[RegularBox],
        outputs: &[RegularBoxData],
        fee: u64,
        timestamp: u64,
    ) -> Vec<u8> {
        let mut buf = Vec::with_capacity(
            WORD + inputs.len() * BOX_ID_LENGTH
                + WORD + outputs.len() * (PUBLIC_KEY_LENGTH + WORD)
                + 2 * WORD,
        );

        // Inputs: count, then ids.
        buf.extend_from_slice(&(inputs.len() as u64).to_le_bytes());
        for input in inputs {
            buf.extend_from_slice(input.id().as_bytes());
        }

        // Outputs: count, then (proposition, value LE).
        buf.extend_from_slice(&(outputs.len() as u64).to_le_bytes());
        for output in outputs {
            buf.extend_from_slice(output.proposition().as_bytes());
            buf.extend_from_slice(&output.value().to_le_bytes());
        }

        buf.extend_from_slice(&fee.to_le_bytes());
        buf.extend_from_slice(&timestamp.to_le_bytes());
        buf
    }

    /// The bytes this transaction's proofs are checked against.
    pub fn message_to_sign(&self) -> Vec<u8> {
        Self::signing_message(&self.inputs, &self.outputs, self.fee, self.timestamp)
    }

    /// `double_sha256(message_to_sign)`. Independent of the proofs.
    pub fn id_bytes(&self) -> [u8; 32] {
        double_sha256(&self.message_to_sign())
    }

    /// Hex-encoded transaction id.
    pub fn id(&self) -> String {
        hex::encode(self.id_bytes())
    }

    pub fn inputs(&self) -> &[RegularBox] {
        &self.inputs
    }

    pub fn proofs(&self) -> &[Signature25519] {
        &self.proofs
    }

    pub fn outputs(&self) -> &[RegularBoxData] {
        &self.outputs
    }

    pub fn fee(&self) -> u64 {
        self.fee
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn input_ids(&self) -> Vec<BoxId> {
        self.inputs.iter().map(RegularBox::id).collect()
    }

    /// Sum of input values. `u128` so no realistic input set overflows.
    pub fn input_total(&self) -> u128 {
        self.inputs.iter().map(|b| u128::from(b.value())).sum()
    }

    pub fn output_total(&self) -> u128 {
        self.outputs.iter().map(|o| u128::from(o.value())).sum()
    }

    /// The boxes this transaction creates once confirmed, in output order.
    pub fn new_boxes(&self) -> Vec<RegularBox> {
        let tx_id = self.id_bytes();
        self.outputs
            .iter()
            .enumerate()
            .map(|(index, data)| data.clone().into_box(BoxId::derive(&tx_id, index as u64)))
            .collect()
    }

    /// JSON encoding.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes a transaction from JSON. Malformed proofs fail decoding.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
