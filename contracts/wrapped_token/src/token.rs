use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};

use crate::errors::TokenError;
use crate::events::{Mint, Transfer};
use crate::types::{
    null_address, DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, DECIMALS, NAME, SYMBOL,
};

#[contract]
pub struct WrappedToken;

#[contractimpl]
impl WrappedToken {
    /// Binds the token to the multisig wallet allowed to mint.
    pub fn initialize(env: Env, multisig: Address) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Multisig) {
            return Err(TokenError::AlreadyInitialized);
        }
        if multisig == null_address(&env) {
            return Err(TokenError::NullAddress);
        }

        env.storage().instance().set(&DataKey::Multisig, &multisig);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        Ok(())
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn multisig(env: Env) -> Address {
        Self::read_multisig(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        Self::read_balance(&env, &id)
    }

    /// Mints `amount` to `to`. `minter` must be the multisig wallet.
    pub fn mint_for(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        if minter != Self::read_multisig(&env) {
            return Err(TokenError::NotAuthorized);
        }
        minter.require_auth();

        if to == null_address(&env) {
            return Err(TokenError::NullAddress);
        }
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let balance = Self::read_balance(&env, &to);
        Self::write_balance(&env, &to, balance + amount);
        let supply = Self::total_supply(env.clone());
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(supply + amount));

        Mint { to, amount }.publish(&env);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();

        if to == null_address(&env) {
            return Err(TokenError::NullAddress);
        }
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let from_balance = Self::read_balance(&env, &from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        Self::write_balance(&env, &from, from_balance - amount);
        let to_balance = Self::read_balance(&env, &to);
        Self::write_balance(&env, &to, to_balance + amount);

        Transfer { from, to, amount }.publish(&env);
        Ok(())
    }
}

impl WrappedToken {
    fn read_multisig(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Multisig)
            .unwrap_or_else(|| panic_with_error!(env, TokenError::NotInitialized))
    }

    fn read_balance(env: &Env, id: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        let key = DataKey::Balance(id.clone());
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }
}
