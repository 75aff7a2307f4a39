#![no_std]

//! Fifteen-signer wallet that executes a transaction once five signers have
//! confirmed it.
//!
//! Signer replacement and withdrawals are gated behind the wallet itself:
//! they run only when a confirmed transaction addressed to the wallet is
//! executed. A failing destination call never aborts the confirming
//! invocation; the transaction stays pending and can be executed again.

mod errors;
mod events;
mod execution;
mod multisig;
mod registry;
mod storage;
mod types;

pub use errors::WalletError;
pub use events::{
    Deposit, SignerChanged, TxConfirmationRevoked, TxConfirmed, TxExecuted, TxExecutionFailed,
    TxSubmitted, Withdraw,
};
pub use execution::MintClient;
pub use multisig::{MultisigWallet, MultisigWalletClient};
pub use types::{null_address, Call, ExecutionStatus, Transaction, SIGNER_COUNT, THRESHOLD};
