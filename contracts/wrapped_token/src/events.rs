use soroban_sdk::{contractevent, Address};

#[contractevent(topics = ["wrapped", "mint"])]
pub struct Mint {
    pub to: Address,
    pub amount: i128,
}

#[contractevent(topics = ["wrapped", "transfer"])]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}
