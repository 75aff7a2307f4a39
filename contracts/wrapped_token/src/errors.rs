use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NullAddress = 3,
    NotAuthorized = 4,
    InvalidAmount = 5,
    InsufficientBalance = 6,
}
