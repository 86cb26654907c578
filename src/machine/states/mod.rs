//! The five phases of a sale. Each phase is a table entry of three hooks that
//! act on the shared [`MachineContext`].

#[cfg(test)]
mod tests;

mod amount;
mod assign;
mod product;
mod returning;
mod waiting;

use std::fmt;

use crate::machine::{MachineContext, MachineError};

/// Identity of a registered state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateName {
    Waiting,
    Amount,
    Product,
    Assign,
    Return,
}

impl StateName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Amount => "amount",
            Self::Product => "product",
            Self::Assign => "assign",
            Self::Return => "returning",
        }
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hook run on entry to or exit from a state.
pub type Hook = fn(&mut MachineContext) -> Result<(), MachineError>;

/// Hook run on every tick. Returns the state to move to, if any.
pub type UpdateHook = fn(&mut MachineContext) -> Result<Option<StateName>, MachineError>;

/// A state: its name and the hooks the machine calls on it.
#[derive(Debug, Clone, Copy)]
pub struct State {
    pub name: StateName,
    pub enter: Hook,
    pub update: UpdateHook,
    pub exit: Hook,
}

/// Hook for states with nothing to do on entry or exit.
fn no_op(_: &mut MachineContext) -> Result<(), MachineError> {
    Ok(())
}

/// All the states of the vending machine, in the order a sale visits them.
pub fn vending_states() -> [State; 5] {
    [waiting::state(), amount::state(), product::state(), assign::state(), returning::state()]
}
