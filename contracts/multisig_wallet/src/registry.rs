//! Signer registry: a fixed array of fifteen slots.
//!
//! Slots are only ever overwritten in place, so a signer's index is stable
//! until that signer is replaced.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::storage;
use crate::types::{null_address, SIGNER_COUNT};

/// Checks a candidate signer list before anything is written.
pub fn validate(env: &Env, signers: &Vec<Address>) -> Result<(), WalletError> {
    if signers.len() != SIGNER_COUNT {
        return Err(WalletError::InvalidSignerCount);
    }

    let null = null_address(env);
    for i in 0..signers.len() {
        let signer = signers.get_unchecked(i);
        if signer == null {
            return Err(WalletError::NullSigner);
        }
        for j in (i + 1)..signers.len() {
            if signer == signers.get_unchecked(j) {
                return Err(WalletError::DuplicateSigner);
            }
        }
    }
    Ok(())
}

pub fn slot_of(env: &Env, id: &Address) -> Option<u32> {
    storage::get_signers(env).first_index_of(id)
}

pub fn is_signer(env: &Env, id: &Address) -> bool {
    slot_of(env, id).is_some()
}

pub fn require_signer(env: &Env, id: &Address) -> Result<(), WalletError> {
    if !is_signer(env, id) {
        return Err(WalletError::NotSigner);
    }
    Ok(())
}

pub fn signer_at(env: &Env, index: u32) -> Result<Address, WalletError> {
    storage::get_signers(env)
        .get(index)
        .ok_or(WalletError::OutOfRange)
}

/// Overwrites the slot held by `old` with `new`.
pub fn replace(env: &Env, old: &Address, new: &Address) -> Result<(), WalletError> {
    let mut signers = storage::get_signers(env);
    let slot = signers
        .first_index_of(old)
        .ok_or(WalletError::UnknownSigner)?;

    if *new == null_address(env) {
        return Err(WalletError::NullAddress);
    }
    if signers.first_index_of(new).is_some() {
        return Err(WalletError::AlreadySigner);
    }

    signers.set(slot, new.clone());
    storage::set_signers(env, &signers);
    Ok(())
}
