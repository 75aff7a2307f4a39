use soroban_sdk::{contracttype, Address, Env, String, Symbol, Val, Vec};

/// Size of the signer set. Fixed for the lifetime of the wallet.
pub const SIGNER_COUNT: u32 = 15;

/// Confirmations required before a transaction may execute.
pub const THRESHOLD: u32 = 5;

/// Strkey of the all-zero ed25519 account, used as the null identity.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub const DAY_IN_LEDGERS: u32 = 17280;

/// Wallet configuration lives as long as the contract instance.
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Transactions and their confirmations are kept alive on every touch.
pub const LEDGER_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const LEDGER_LIFETIME_THRESHOLD: u32 = LEDGER_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Signers,
    ValueToken,
    TransactionCount,
    Transaction(u64),
    Confirmations(u64),
    SelfCall,
}

/// Function call carried by a transaction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    pub function: Symbol,
    pub args: Vec<Val>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub destination: Address,
    pub value: i128,
    /// Zero or one call; empty for a plain value transfer.
    pub data: Vec<Call>,
    pub executed: bool,
}

/// Result of running a transaction through the quorum check.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ExecutionStatus {
    /// Quorum not reached, nothing was attempted
    Pending = 0,
    /// Destination call succeeded, the transaction is closed
    Executed = 1,
    /// Destination call failed; the transaction stays open for a retry
    Failed = 2,
}
