use soroban_sdk::{contracttype, Address, Env, String};

pub const NAME: &str = "Wrapped NDAU";
pub const SYMBOL: &str = "wNDAU";
pub const DECIMALS: u32 = 10;

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Strkey of the all-zero ed25519 account, used as the null identity.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Multisig,
    TotalSupply,
    Balance(Address),
}
