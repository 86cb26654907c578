
mod console;
mod error;
mod simulated;
mod source;

pub use console::{read_keys, spawn_console_reader};
pub use error::InputError;
pub use simulated::SimulatedCustomer;
pub use source::{ChannelSource, EventSource, next_event};
