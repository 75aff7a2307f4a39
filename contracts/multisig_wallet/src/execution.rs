//! Execution attempts and call forwarding.
//!
//! An attempt never aborts the enclosing invocation. Whatever goes wrong
//! downstream is reported as `ExecutionStatus::Failed` and the transaction
//! stays open.

use soroban_sdk::{
    contractclient, log, symbol_short, token, Address, Env, Error, Symbol, TryFromVal, Val, Vec,
};

use crate::errors::WalletError;
use crate::events::{TxExecuted, TxExecutionFailed};
use crate::multisig::MultisigWallet;
use crate::storage;
use crate::types::{Call, ExecutionStatus, Transaction};

/// Mint entry point of the companion token.
#[allow(dead_code)]
#[contractclient(name = "MintClient")]
pub trait Mintable {
    fn mint_for(env: Env, minter: Address, to: Address, amount: i128);
}

/// Runs one execution attempt for `tx` and records the outcome.
pub fn attempt(env: &Env, tx_id: u64, mut tx: Transaction) -> ExecutionStatus {
    let outcome = if tx.destination == env.current_contract_address() {
        call_self(env, tx.data.get(0))
    } else {
        call_destination(env, &tx)
    };

    match outcome {
        Ok(()) => {
            tx.executed = true;
            storage::set_transaction(env, tx_id, &tx);
            TxExecuted {
                transaction_id: tx_id,
            }
            .publish(env);
            ExecutionStatus::Executed
        }
        Err(err) => {
            log!(env, "transaction {} failed with code {}", tx_id, err as u32);
            TxExecutionFailed {
                transaction_id: tx_id,
            }
            .publish(env);
            ExecutionStatus::Failed
        }
    }
}

/// Dispatches a call addressed to the wallet itself. The self-call flag is
/// raised only for the duration of the gated function.
fn call_self(env: &Env, call: Option<Call>) -> Result<(), WalletError> {
    let call = call.ok_or(WalletError::InvalidCall)?;

    storage::set_self_call(env, true);
    let result = dispatch_gated(env, &call);
    storage::set_self_call(env, false);

    result
}

fn dispatch_gated(env: &Env, call: &Call) -> Result<(), WalletError> {
    if call.args.len() != 2 {
        return Err(WalletError::InvalidCall);
    }

    if call.function == Symbol::new(env, "replace_signer") {
        let old: Address = arg(env, &call.args, 0)?;
        let new: Address = arg(env, &call.args, 1)?;
        MultisigWallet::replace_signer(env.clone(), old, new)
    } else if call.function == symbol_short!("withdraw") {
        let recipient: Address = arg(env, &call.args, 0)?;
        let amount: i128 = arg(env, &call.args, 1)?;
        MultisigWallet::withdraw(env.clone(), recipient, amount)
    } else {
        log!(env, "unknown self-call {}", call.function);
        Err(WalletError::InvalidCall)
    }
}

fn arg<T>(env: &Env, args: &Vec<Val>, index: u32) -> Result<T, WalletError>
where
    T: TryFromVal<Env, Val>,
{
    let val = args.get(index).ok_or(WalletError::InvalidCall)?;
    T::try_from_val(env, &val).map_err(|_| WalletError::InvalidCall)
}

/// Forwards a transaction to an external destination: either a contract
/// call or a plain value transfer, never both. The host rolls back the
/// callee's writes when it fails.
fn call_destination(env: &Env, tx: &Transaction) -> Result<(), WalletError> {
    if let Some(call) = tx.data.get(0) {
        return invoke(env, &tx.destination, &call);
    }
    if tx.value == 0 {
        return Ok(());
    }

    let value_token = token::Client::new(env, &storage::get_value_token(env));
    if value_token.balance(&env.current_contract_address()) < tx.value {
        return Err(WalletError::InvalidAmount);
    }
    send_value(env, &tx.destination, tx.value)
}

fn invoke(env: &Env, destination: &Address, call: &Call) -> Result<(), WalletError> {
    let result = env.try_invoke_contract::<Val, Error>(destination, &call.function, call.args.clone());
    match result {
        Ok(Ok(_)) => Ok(()),
        Err(Ok(err)) => {
            log!(env, "call {} failed with code {}", call.function, err.get_code());
            Err(WalletError::CallFailed)
        }
        _ => {
            log!(env, "call {} aborted", call.function);
            Err(WalletError::CallFailed)
        }
    }
}

/// Moves `amount` of the value token from the wallet to `to`. A rejected
/// transfer is returned as an error instead of aborting the invocation.
pub fn send_value(env: &Env, to: &Address, amount: i128) -> Result<(), WalletError> {
    let value_token = token::Client::new(env, &storage::get_value_token(env));
    match value_token.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        Err(Ok(err)) => {
            log!(env, "value transfer failed with code {}", err.get_code());
            Err(WalletError::TransferFailed)
        }
        _ => {
            log!(env, "value transfer aborted");
            Err(WalletError::TransferFailed)
        }
    }
}

/// Relays a mint request to `token` with the wallet as minter.
pub fn forward_mint(env: &Env, token: &Address, recipient: &Address, amount: i128) {
    MintClient::new(env, token).mint_for(&env.current_contract_address(), recipient, &amount);
}
