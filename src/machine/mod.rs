pub mod catalog;
mod context;
mod engine;
mod error;
mod event;
mod states;

pub use context::MachineContext;
pub use engine::VendingMachine;
pub use error::MachineError;
pub use event::{InputEvent, VendingEvent};
pub use states::{State, StateName, vending_states};
