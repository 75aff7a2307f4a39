//! Storage accessors for the wallet.
//!
//! Configuration and counters sit in instance storage. Each transaction and
//! its confirmation list is a persistent entry of its own, so the ledger can
//! grow without bound.

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::{
    DataKey, Transaction, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, LEDGER_BUMP_AMOUNT,
    LEDGER_LIFETIME_THRESHOLD,
};

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, LEDGER_LIFETIME_THRESHOLD, LEDGER_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_signers(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .unwrap_or_else(|| panic_with_error!(env, WalletError::NotInitialized))
}

pub fn set_signers(env: &Env, signers: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Signers, signers);
}

pub fn get_value_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::ValueToken)
        .unwrap_or_else(|| panic_with_error!(env, WalletError::NotInitialized))
}

pub fn set_value_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::ValueToken, token);
}

pub fn get_transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

pub fn set_transaction_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::TransactionCount, &count);
}

pub fn get_transaction(env: &Env, tx_id: u64) -> Option<Transaction> {
    env.storage().persistent().get(&DataKey::Transaction(tx_id))
}

pub fn set_transaction(env: &Env, tx_id: u64, tx: &Transaction) {
    let key = DataKey::Transaction(tx_id);
    env.storage().persistent().set(&key, tx);
    extend_persistent(env, &key);
}

pub fn get_confirmations(env: &Env, tx_id: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Confirmations(tx_id))
        .unwrap_or(Vec::new(env))
}

pub fn set_confirmations(env: &Env, tx_id: u64, confirmations: &Vec<Address>) {
    let key = DataKey::Confirmations(tx_id);
    env.storage().persistent().set(&key, confirmations);
    extend_persistent(env, &key);
}

/// Keeps an open transaction and its confirmations from being archived.
pub fn extend_transaction(env: &Env, tx_id: u64) {
    for key in [DataKey::Transaction(tx_id), DataKey::Confirmations(tx_id)] {
        if env.storage().persistent().has(&key) {
            extend_persistent(env, &key);
        }
    }
}

pub fn is_self_call(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::SelfCall)
}

/// Raises or lowers the self-call capability. Only the execution dispatcher
/// may call this.
pub fn set_self_call(env: &Env, active: bool) {
    if active {
        env.storage().instance().set(&DataKey::SelfCall, &true);
    } else {
        env.storage().instance().remove(&DataKey::SelfCall);
    }
}
