use crate::{input::InputError, machine::MachineError};

#[derive(Debug, thiserror::Error)]
pub enum VendingError {
    #[error("Machine fault: {0}")]
    Machine(#[from] MachineError),
    #[error("Input failed: {0}")]
    Input(#[from] InputError),
}
