//! Change computation.

use crate::boxes::RegularBoxData;
use crate::crypto::keys::PublicKey25519Proposition;

/// The change output for a selection worth `accumulated` against `target`.
///
/// `None` when the selection hits the target exactly. Any positive surplus,
/// however small, becomes a change output; there is no dust threshold.
///
/// `accumulated` must cover `target`; selection guarantees this and debug
/// builds assert it. The surplus always fits in a `u64` when selection stops
/// at the first covering box, since it is smaller than that box's value.
pub fn change_output(
    accumulated: u128,
    target: u64,
    change_address: &PublicKey25519Proposition,
) -> Option<RegularBoxData> {
    debug_assert!(
        accumulated >= u128::from(target),
        "selection of {accumulated} does not cover target {target}"
    );
    debug_assert!(
        accumulated - u128::from(target) <= u128::from(u64::MAX),
        "change of {accumulated} - {target} does not fit in u64"
    );
    let surplus = accumulated.checked_sub(u128::from(target))?;
    if surplus == 0 {
        return None;
    }
    let value = u64::try_from(surplus).ok()?;
    Some(RegularBoxData::new(*change_address, value))
}
