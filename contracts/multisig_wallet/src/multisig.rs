use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env, Vec};

use crate::errors::WalletError;
use crate::events::{
    Deposit, SignerChanged, TxConfirmationRevoked, TxConfirmed, TxSubmitted, Withdraw,
};
use crate::execution;
use crate::registry;
use crate::storage;
use crate::types::{null_address, Call, ExecutionStatus, Transaction, THRESHOLD};

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    /// Sets up the signer set and the token used to hold value.
    ///
    /// The list must hold exactly fifteen distinct, non-null addresses.
    pub fn initialize(
        env: Env,
        signers: Vec<Address>,
        value_token: Address,
    ) -> Result<(), WalletError> {
        if storage::is_initialized(&env) {
            return Err(WalletError::AlreadyInitialized);
        }

        registry::validate(&env, &signers)?;

        storage::set_signers(&env, &signers);
        storage::set_value_token(&env, &value_token);
        storage::set_transaction_count(&env, 0);
        storage::set_initialized(&env);
        storage::extend_instance(&env);
        Ok(())
    }

    // Signer registry

    pub fn is_signer(env: Env, id: Address) -> bool {
        Self::require_initialized(&env);
        registry::is_signer(&env, &id)
    }

    pub fn signer_at(env: Env, index: u32) -> Result<Address, WalletError> {
        Self::require_initialized(&env);
        registry::signer_at(&env, index)
    }

    pub fn signers(env: Env) -> Vec<Address> {
        Self::require_initialized(&env);
        storage::get_signers(&env)
    }

    /// Swaps `old` for `new` in the same slot. Only reachable through an
    /// executed transaction addressed to the wallet.
    pub fn replace_signer(env: Env, old: Address, new: Address) -> Result<(), WalletError> {
        Self::require_initialized(&env);
        Self::require_self_call(&env)?;

        registry::replace(&env, &old, &new)?;

        SignerChanged {
            previous_signer: old,
            new_signer: new,
        }
        .publish(&env);
        Ok(())
    }

    // Transaction ledger

    /// Records a new transaction confirmed by `signer` and returns its id.
    ///
    /// A transaction either calls `data` or sends `value`, not both.
    pub fn submit(
        env: Env,
        signer: Address,
        destination: Address,
        value: i128,
        data: Option<Call>,
    ) -> Result<u64, WalletError> {
        Self::require_initialized(&env);
        signer.require_auth();
        registry::require_signer(&env, &signer)?;

        if destination == null_address(&env) {
            return Err(WalletError::NullAddress);
        }
        if value < 0 {
            return Err(WalletError::InvalidAmount);
        }
        if value > 0 && data.is_some() {
            return Err(WalletError::InvalidCall);
        }

        storage::extend_instance(&env);
        let tx_id = storage::get_transaction_count(&env);
        storage::set_transaction_count(&env, tx_id + 1);

        let mut calls = Vec::new(&env);
        if let Some(call) = data {
            calls.push_back(call);
        }
        let tx = Transaction {
            destination,
            value,
            data: calls,
            executed: false,
        };
        storage::set_transaction(&env, tx_id, &tx);

        TxSubmitted {
            signer: signer.clone(),
            transaction_id: tx_id,
        }
        .publish(&env);

        Self::record_confirmation(&env, tx_id, tx, signer);
        Ok(tx_id)
    }

    pub fn confirm(env: Env, signer: Address, tx_id: u64) -> Result<ExecutionStatus, WalletError> {
        Self::require_initialized(&env);
        signer.require_auth();
        registry::require_signer(&env, &signer)?;

        let tx = Self::open_transaction(&env, tx_id)?;
        if storage::get_confirmations(&env, tx_id)
            .first_index_of(&signer)
            .is_some()
        {
            return Err(WalletError::AlreadyConfirmed);
        }

        Ok(Self::record_confirmation(&env, tx_id, tx, signer))
    }

    pub fn revoke(env: Env, signer: Address, tx_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env);
        signer.require_auth();
        registry::require_signer(&env, &signer)?;

        Self::open_transaction(&env, tx_id)?;

        let mut confirmations = storage::get_confirmations(&env, tx_id);
        let index = confirmations
            .first_index_of(&signer)
            .ok_or(WalletError::NotConfirmed)?;
        confirmations.remove(index);
        storage::set_confirmations(&env, tx_id, &confirmations);

        TxConfirmationRevoked {
            signer,
            transaction_id: tx_id,
        }
        .publish(&env);
        Ok(())
    }

    /// Re-attempts a transaction. Does nothing while quorum is missing.
    pub fn execute(env: Env, tx_id: u64) -> Result<ExecutionStatus, WalletError> {
        Self::require_initialized(&env);
        let tx = Self::open_transaction(&env, tx_id)?;

        if !Self::quorum_reached(&env, tx_id) {
            return Ok(ExecutionStatus::Pending);
        }
        Ok(execution::attempt(&env, tx_id, tx))
    }

    pub fn transaction_count(env: Env) -> u64 {
        Self::require_initialized(&env);
        storage::get_transaction_count(&env)
    }

    pub fn transaction(env: Env, tx_id: u64) -> Result<Transaction, WalletError> {
        Self::require_initialized(&env);
        storage::get_transaction(&env, tx_id).ok_or(WalletError::UnknownTransaction)
    }

    pub fn confirmations(env: Env, tx_id: u64, signer: Address) -> bool {
        Self::require_initialized(&env);
        storage::get_confirmations(&env, tx_id)
            .first_index_of(&signer)
            .is_some()
    }

    pub fn confirmation_count(env: Env, tx_id: u64) -> u32 {
        Self::require_initialized(&env);
        storage::get_confirmations(&env, tx_id).len()
    }

    /// Confirming signers in the order they confirmed.
    pub fn confirming_signers(env: Env, tx_id: u64) -> Vec<Address> {
        Self::require_initialized(&env);
        storage::get_confirmations(&env, tx_id)
    }

    pub fn is_quorum_reached(env: Env, tx_id: u64) -> bool {
        Self::require_initialized(&env);
        Self::quorum_reached(&env, tx_id)
    }

    pub fn pending_count(env: Env) -> u64 {
        Self::require_initialized(&env);
        let mut count = 0u64;
        for tx_id in 0..storage::get_transaction_count(&env) {
            if Self::is_pending(&env, tx_id) {
                count += 1;
            }
        }
        count
    }

    /// Ids of unexecuted transactions in ascending order, skipping the first
    /// `offset` of them and returning at most `limit`.
    pub fn pending_ids(env: Env, offset: u64, limit: u64) -> Vec<u64> {
        Self::require_initialized(&env);
        let mut ids = Vec::new(&env);
        let mut skipped = 0u64;
        for tx_id in 0..storage::get_transaction_count(&env) {
            if ids.len() as u64 >= limit {
                break;
            }
            if !Self::is_pending(&env, tx_id) {
                continue;
            }
            if skipped < offset {
                skipped += 1;
                continue;
            }
            ids.push_back(tx_id);
        }
        ids
    }

    // Value

    /// Pulls `amount` of the value token from `from` into the wallet.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WalletError> {
        Self::require_initialized(&env);
        from.require_auth();

        if amount < 0 {
            return Err(WalletError::InvalidAmount);
        }

        storage::extend_instance(&env);
        let value_token = token::Client::new(&env, &storage::get_value_token(&env));
        value_token.transfer(&from, &env.current_contract_address(), &amount);

        Deposit {
            signer: from,
            value: amount,
        }
        .publish(&env);
        Ok(())
    }

    /// Sends held value to a signer. Only reachable through an executed
    /// transaction addressed to the wallet.
    pub fn withdraw(env: Env, recipient: Address, amount: i128) -> Result<(), WalletError> {
        Self::require_initialized(&env);
        Self::require_self_call(&env)?;
        registry::require_signer(&env, &recipient)?;

        if amount < 0 || amount > Self::balance(env.clone()) {
            return Err(WalletError::InvalidAmount);
        }
        execution::send_value(&env, &recipient, amount)?;

        Withdraw {
            recipient,
            value: amount,
        }
        .publish(&env);
        Ok(())
    }

    pub fn balance(env: Env) -> i128 {
        Self::require_initialized(&env);
        token::Client::new(&env, &storage::get_value_token(&env))
            .balance(&env.current_contract_address())
    }

    pub fn value_token(env: Env) -> Address {
        Self::require_initialized(&env);
        storage::get_value_token(&env)
    }

    // Token relay

    /// Mints `amount` of `token` to `recipient` on behalf of a single signer.
    /// No confirmations are collected for this path.
    pub fn forward_mint_call(
        env: Env,
        signer: Address,
        token: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), WalletError> {
        Self::require_initialized(&env);
        signer.require_auth();
        registry::require_signer(&env, &signer)?;

        if recipient == null_address(&env) {
            return Err(WalletError::NullAddress);
        }
        if recipient == token {
            return Err(WalletError::InvalidAddress);
        }
        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        execution::forward_mint(&env, &token, &recipient, amount);
        Ok(())
    }
}

impl MultisigWallet {
    fn require_initialized(env: &Env) {
        if !storage::is_initialized(env) {
            panic_with_error!(env, WalletError::NotInitialized);
        }
    }

    fn require_self_call(env: &Env) -> Result<(), WalletError> {
        if !storage::is_self_call(env) {
            return Err(WalletError::NotSelf);
        }
        Ok(())
    }

    /// Loads a transaction that may still be confirmed, revoked or executed.
    fn open_transaction(env: &Env, tx_id: u64) -> Result<Transaction, WalletError> {
        let tx = storage::get_transaction(env, tx_id).ok_or(WalletError::UnknownTransaction)?;
        if tx.executed {
            return Err(WalletError::AlreadyExecuted);
        }
        storage::extend_instance(env);
        storage::extend_transaction(env, tx_id);
        Ok(tx)
    }

    fn quorum_reached(env: &Env, tx_id: u64) -> bool {
        storage::get_confirmations(env, tx_id).len() >= THRESHOLD
    }

    fn is_pending(env: &Env, tx_id: u64) -> bool {
        storage::get_transaction(env, tx_id).is_some_and(|tx| !tx.executed)
    }

    /// Adds `signer` to the confirmations of `tx_id` and attempts execution
    /// once the threshold is met.
    fn record_confirmation(
        env: &Env,
        tx_id: u64,
        tx: Transaction,
        signer: Address,
    ) -> ExecutionStatus {
        let mut confirmations = storage::get_confirmations(env, tx_id);
        confirmations.push_back(signer.clone());
        storage::set_confirmations(env, tx_id, &confirmations);

        TxConfirmed {
            signer,
            transaction_id: tx_id,
        }
        .publish(env);

        if confirmations.len() >= THRESHOLD {
            execution::attempt(env, tx_id, tx)
        } else {
            ExecutionStatus::Pending
        }
    }
}
