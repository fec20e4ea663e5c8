//! Coin selection.
//!
//! Walks the wallet's spendable boxes oldest first and takes them until the
//! target is covered. No sorting, no search for a smaller set: the first
//! prefix (of usable boxes) that reaches the target wins. The result is
//! reproducible for a given wallet state, which matters more here than
//! shaving fees.
//!
//! A box whose proposition has no secret in the wallet is skipped without
//! error. Whether such a box should instead abort selection is unresolved;
//! for now it is logged at `warn` and left out of the accumulated value.

use tracing::{debug, warn};

use crate::boxes::{BoxId, BoxKind, RegularBox};
use crate::crypto::keys::PrivateKey25519;
use crate::error::TransferError;
use crate::wallet::NodeWallet;

/// Inputs chosen for a transfer, with their secrets and combined value.
#[derive(Debug, Clone)]
pub struct CoinSelection {
    pub inputs: Vec<(RegularBox, PrivateKey25519)>,
    /// Sum of the selected box values. Wider than `u64` so accumulation
    /// never overflows.
    pub accumulated: u128,
}

/// Selects inputs worth at least `target` from `wallet`.
///
/// # Errors
///
/// [`TransferError::InsufficientFunds`] once every listed box has been
/// considered and the usable ones still fall short.
pub fn select_inputs(
    wallet: &dyn NodeWallet,
    target: u64,
    boxes_to_exclude: &[BoxId],
) -> Result<CoinSelection, TransferError> {
    let candidates = wallet.boxes_of_kind(BoxKind::Regular, boxes_to_exclude);
    let goal = u128::from(target);

    let mut inputs = Vec::new();
    let mut accumulated: u128 = 0;

    for candidate in &candidates {
        let Some(secret) = wallet.secret_by_public_key(candidate.proposition()) else {
            warn!(
                box_id = %candidate.id(),
                value = candidate.value(),
                "skipping spendable box with no secret in wallet"
            );
            continue;
        };

        accumulated += u128::from(candidate.value());
        debug!(
            box_id = %candidate.id(),
            value = candidate.value(),
            accumulated = %accumulated,
            "selected box"
        );
        inputs.push((candidate.clone(), secret));

        // Checked after taking the box, so even a zero target spends one.
        if accumulated >= goal {
            break;
        }
    }

    if accumulated < goal {
        return Err(TransferError::InsufficientFunds {
            required: target,
            available: accumulated,
        });
    }

    Ok(CoinSelection {
        inputs,
        accumulated,
    })
}
