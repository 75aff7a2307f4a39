use soroban_sdk::{contractevent, Address};

#[contractevent(topics = ["multisig", "signer_changed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerChanged {
    pub previous_signer: Address,
    pub new_signer: Address,
}

#[contractevent(topics = ["multisig", "tx_submitted"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxSubmitted {
    pub signer: Address,
    pub transaction_id: u64,
}

#[contractevent(topics = ["multisig", "tx_confirmed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxConfirmed {
    pub signer: Address,
    pub transaction_id: u64,
}

#[contractevent(topics = ["multisig", "tx_revoked"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxConfirmationRevoked {
    pub signer: Address,
    pub transaction_id: u64,
}

#[contractevent(topics = ["multisig", "tx_executed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxExecuted {
    pub transaction_id: u64,
}

#[contractevent(topics = ["multisig", "tx_failed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxExecutionFailed {
    pub transaction_id: u64,
}

#[contractevent(topics = ["multisig", "deposit"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub signer: Address,
    pub value: i128,
}

#[contractevent(topics = ["multisig", "withdraw"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdraw {
    pub recipient: Address,
    pub value: i128,
}
