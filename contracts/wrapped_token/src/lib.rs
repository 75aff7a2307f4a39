#![no_std]

//! Wrapped token whose supply can only grow through the multisig wallet.

mod errors;
mod events;
mod token;
mod types;

pub use errors::TokenError;
pub use events::{Mint, Transfer};
pub use token::{WrappedToken, WrappedTokenClient};
pub use types::{DECIMALS, NAME, SYMBOL};
