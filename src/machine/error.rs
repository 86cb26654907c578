use crate::machine::StateName;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State {0} is not registered")]
    UnknownState(StateName),
    #[error("Key {0:?} does not select a product")]
    UnknownProduct(char),
    #[error("No product selected")]
    NoSelection,
    #[error("Deposited {amount} does not cover price {price}")]
    InsufficientFunds { amount: u32, price: u32 },
    #[error("Change stuck with remainder {remainder} below the smallest coin")]
    StuckChange { remainder: u32 },
}
