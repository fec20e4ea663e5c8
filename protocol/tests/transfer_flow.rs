//! End-to-end tests for box transfers.
//!
//! These exercise the full path a wallet host takes: fund a wallet, create a
//! transfer, verify it, ship it as JSON, confirm it into both wallets, and
//! spend the resulting boxes again.

use boxpay_protocol::boxes::{BoxId, RegularBox, RegularBoxData};
use boxpay_protocol::clock::FixedClock;
use boxpay_protocol::config::{TransferConfig, SIGNATURE_LENGTH};
use boxpay_protocol::crypto::{PrivateKey25519, Signature25519};
use boxpay_protocol::transaction::{
    RegularTransaction, RegularTransactionCreator, RegularTransactionFactory,
};
use boxpay_protocol::wallet::{MemoryWallet, NodeWallet};
use boxpay_protocol::{ConstructionError, TransferError};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

const T0: u64 = 1_700_000_000_000;

fn creator_at(ts: u64) -> RegularTransactionCreator<RegularTransactionFactory, FixedClock> {
    RegularTransactionCreator::new(RegularTransactionFactory::default(), FixedClock(ts))
}

/// Alice's wallet holds B1=50, B2=30, B3=100, created in that order.
fn alice() -> (MemoryWallet, PrivateKey25519) {
    let key = PrivateKey25519::from_seed(&[0xA1; 32]);
    let mut wallet = MemoryWallet::new();
    let me = wallet.add_secret(key.clone());
    for (id, value) in [(1u8, 50u64), (2, 30), (3, 100)] {
        wallet
            .add_box(RegularBox::new(BoxId::from_bytes([id; 32]), me, value))
            .unwrap();
    }
    (wallet, key)
}

fn bob() -> (MemoryWallet, PrivateKey25519) {
    let key = PrivateKey25519::from_seed(&[0xB0; 32]);
    let mut wallet = MemoryWallet::new();
    wallet.add_secret(key.clone());
    (wallet, key)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn pay_confirm_and_spend_change() {
    let (mut alice_wallet, alice_key) = alice();
    let (mut bob_wallet, bob_key) = bob();
    let alice_addr = alice_key.public_image();
    let bob_addr = bob_key.public_image();

    // Pay Bob 60 with fee 5: B1 + B2 = 80, change 15.
    let tx = creator_at(T0)
        .create(
            &alice_wallet,
            &[RegularBoxData::new(bob_addr, 60)],
            &alice_addr,
            5,
            &[],
        )
        .unwrap();
    assert_eq!(tx.inputs().len(), 2);
    assert_eq!(tx.outputs().len(), 2);
    assert_eq!(tx.input_total(), 80);
    assert_eq!(tx.output_total() + u128::from(tx.fee()), 80);

    // Over the wire and back.
    let wire = tx.to_json().unwrap();
    let received = RegularTransaction::from_json(&wire).unwrap();
    assert_eq!(received, tx);
    assert!(received.semantic_validity().is_ok());

    // Confirmation.
    assert_eq!(alice_wallet.apply_transaction(&received).unwrap(), 1);
    assert_eq!(bob_wallet.apply_transaction(&received).unwrap(), 1);
    assert_eq!(alice_wallet.balance(), 100 + 15);
    assert_eq!(bob_wallet.balance(), 60);

    // Alice's change is now her youngest box; B3 is older and goes first.
    let listed = alice_wallet.boxes_of_kind(boxpay_protocol::boxes::BoxKind::Regular, &[]);
    assert_eq!(
        listed.iter().map(RegularBox::value).collect::<Vec<_>>(),
        vec![100, 15]
    );

    // Bob spends what he received back to Alice, no change needed.
    let refund = creator_at(T0 + 1)
        .create(
            &bob_wallet,
            &[RegularBoxData::new(alice_addr, 59)],
            &bob_addr,
            1,
            &[],
        )
        .unwrap();
    assert_eq!(refund.outputs().len(), 1);
    bob_wallet.apply_transaction(&refund).unwrap();
    alice_wallet.apply_transaction(&refund).unwrap();
    assert_eq!(bob_wallet.balance(), 0);
    assert_eq!(alice_wallet.balance(), 100 + 15 + 59);
}

#[test]
fn pending_inputs_can_be_excluded_from_a_second_transfer() {
    let (wallet, key) = alice();
    let me = key.public_image();
    let payee = PrivateKey25519::from_seed(&[0xEE; 32]).public_image();

    let first = creator_at(T0)
        .create(&wallet, &[RegularBoxData::new(payee, 60)], &me, 5, &[])
        .unwrap();

    // Build a second transfer while the first is unconfirmed.
    let second = creator_at(T0)
        .create(
            &wallet,
            &[RegularBoxData::new(payee, 60)],
            &me,
            5,
            &first.input_ids(),
        )
        .unwrap();
    assert_eq!(second.input_ids(), vec![BoxId::from_bytes([3u8; 32])]);
    assert!(second.input_ids().iter().all(|id| !first.input_ids().contains(id)));

    // Nothing left for a third.
    let mut pending = first.input_ids();
    pending.extend(second.input_ids());
    let err = creator_at(T0)
        .create(&wallet, &[RegularBoxData::new(payee, 1)], &me, 0, &pending)
        .unwrap_err();
    assert!(matches!(err, TransferError::InsufficientFunds { .. }));
}

#[test]
fn factory_limits_surface_as_construction_failures() {
    let (wallet, key) = alice();
    let me = key.public_image();
    let strict = RegularTransactionCreator::new(
        RegularTransactionFactory::with_config(TransferConfig {
            max_inputs: 1,
            ..TransferConfig::default()
        }),
        FixedClock(T0),
    );

    // Needs B1 + B2.
    let err = strict
        .create(&wallet, &[RegularBoxData::new(me, 60)], &me, 0, &[])
        .unwrap_err();
    assert_eq!(
        err,
        TransferError::Construction(ConstructionError::TooManyInputs { count: 2, limit: 1 })
    );
}

#[test]
fn wire_proof_parsing_never_panics() {
    for len in 0..=2 * SIGNATURE_LENGTH {
        let raw = vec![0x42; len];
        let parsed = Signature25519::parse_bytes(&raw);
        assert_eq!(parsed.is_ok(), len == SIGNATURE_LENGTH, "length {}", len);
        if let Ok(proof) = parsed {
            assert_eq!(Signature25519::parse_bytes(&proof.bytes()), Ok(proof));
        }
    }
}
