//! # Transaction Module
//!
//! Selection, change, signing, and verification for regular (box-to-box)
//! transfers.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        RegularTransaction and its canonical signing message
//! selection.rs    oldest-first coin selection over a wallet
//! change.rs       the optional change output
//! factory.rs      TransactionFactory: structural checks + one proof per input
//! creator.rs      RegularTransactionCreator: the end-to-end entry point
//! verification.rs balance and proof checks on a finished transaction
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Create**: [`RegularTransactionCreator::create`] picks inputs from a
//!    [`NodeWallet`](crate::wallet::NodeWallet) and asks the factory to sign.
//! 2. **Verify**: anyone holding the transaction calls
//!    [`RegularTransaction::semantic_validity`].
//! 3. **Confirm**: outside this crate. Afterwards
//!    [`RegularTransaction::new_boxes`] gives the boxes it created.
//!
//! ## Design Decisions
//!
//! - Values are `u64`; sums are taken in `u128`.
//! - Transaction ids are `double_sha256` of the signing message, so they are
//!   fixed before any proof exists.
//! - Every input signs the same message. The message covers input ids,
//!   outputs, fee, and timestamp.

pub mod change;
pub mod creator;
pub mod factory;
pub mod selection;
pub mod types;
pub mod verification;

pub use change::change_output;
pub use creator::{create_regular_transaction, RegularTransactionCreator};
pub use factory::{RegularTransactionFactory, TransactionFactory};
pub use selection::{select_inputs, CoinSelection};
pub use types::RegularTransaction;
