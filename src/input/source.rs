use tokio::sync::mpsc::{self, error::TryRecvError};

use crate::{
    input::InputError,
    machine::{InputEvent, VendingMachine},
};

/// A source of keys polled once per tick.
pub trait EventSource {
    /// Return the next key, or [`InputEvent::Empty`] if none is waiting.
    /// Never blocks.
    fn poll_event(&mut self) -> Result<InputEvent, InputError>;
}

/// Keys queued on a channel by an input adapter.
#[derive(Debug)]
pub struct ChannelSource {
    receiver: mpsc::Receiver<char>,
}

impl ChannelSource {
    pub fn new(receiver: mpsc::Receiver<char>) -> Self {
        Self { receiver }
    }

    /// Create a source together with the sender an adapter pushes keys into.
    pub fn channel(capacity: usize) -> (mpsc::Sender<char>, Self) {
        let (sender, receiver) = mpsc::channel(capacity);
        (sender, Self::new(receiver))
    }
}

impl EventSource for ChannelSource {
    fn poll_event(&mut self) -> Result<InputEvent, InputError> {
        match self.receiver.try_recv() {
            Ok(key) => Ok(InputEvent::from_key(key)),
            Err(TryRecvError::Empty) => Ok(InputEvent::Empty),
            // Only reported once every queued key has been taken.
            Err(TryRecvError::Disconnected) => Err(InputError::Closed),
        }
    }
}

/// Take the next key for `machine`. While the machine is busy with a sale the
/// key stays queued and the tick runs with no input.
pub fn next_event(
    source: &mut impl EventSource,
    machine: &VendingMachine,
) -> Result<InputEvent, InputError> {
    if machine.accepts_input() { source.poll_event() } else { Ok(InputEvent::Empty) }
}
