// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # boxpay: Box Transfer Core
//!
//! Builds and authorizes transfers on a UTXO-style ledger. Value lives in
//! boxes locked to Ed25519 public keys; a transfer consumes some boxes,
//! creates new ones, and carries one signature per consumed box proving the
//! spender holds the matching secret.
//!
//! ## Architecture
//!
//! - **crypto**: Ed25519 keys, the fixed-length proof type, hashing.
//! - **boxes**: box ids, boxes, and requested outputs.
//! - **wallet**: the wallet interface the creator reads from, plus an
//!   in-memory implementation.
//! - **transaction**: coin selection, change, signing, verification.
//! - **clock**: injectable time source for transaction timestamps.
//! - **config**: lengths, limits, and the factory's tunables.
//! - **error**: the error taxonomy shared by the above.
//! - **logging**: `tracing` subscriber setup for hosts.
//!
//! ## Example
//!
//! ```
//! use boxpay_protocol::boxes::{BoxId, RegularBox, RegularBoxData};
//! use boxpay_protocol::crypto::PrivateKey25519;
//! use boxpay_protocol::transaction::create_regular_transaction;
//! use boxpay_protocol::wallet::MemoryWallet;
//!
//! let mut wallet = MemoryWallet::new();
//! let me = wallet.add_secret(PrivateKey25519::generate());
//! wallet.add_box(RegularBox::new(BoxId::from_bytes([1; 32]), me, 100)).unwrap();
//!
//! let payee = PrivateKey25519::generate().public_image();
//! let tx = create_regular_transaction(&wallet, &[RegularBoxData::new(payee, 60)], &me, 5, &[])
//!     .unwrap();
//!
//! assert_eq!(tx.outputs().len(), 2); // payment + 35 change
//! assert!(tx.semantic_validity().is_ok());
//! ```

pub mod boxes;
pub mod clock;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod transaction;
pub mod wallet;

pub use error::{ConstructionError, TransferError};
