use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    // Rejected signer lists at initialization.
    InvalidSignerCount = 3,
    DuplicateSigner = 4,
    NullSigner = 5,
    NotSigner = 6,
    NotSelf = 7,
    NullAddress = 8,
    InvalidAddress = 9,
    UnknownTransaction = 10,
    OutOfRange = 11,
    AlreadyExecuted = 12,
    AlreadyConfirmed = 13,
    NotConfirmed = 14,
    UnknownSigner = 15,
    AlreadySigner = 16,
    InvalidAmount = 17,
    InvalidCall = 18,
    // Downstream failures, contained by the execution attempt.
    TransferFailed = 19,
    CallFailed = 20,
}
