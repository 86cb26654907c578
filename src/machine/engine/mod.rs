
use std::collections::HashMap;

use log::{debug, warn};
use tokio::sync::broadcast;

use crate::machine::{
    InputEvent, MachineContext, MachineError, State, StateName, VendingEvent, vending_states,
};

/// The vending machine: a registry of states, the active one, and the
/// transaction context every state hook works on.
#[derive(Debug)]
pub struct VendingMachine {
    /// The active state. `None` until the first transition.
    current_state: Option<StateName>,
    /// Every registered state by name.
    states: HashMap<StateName, State>,
    /// Transaction data shared by the hooks.
    context: MachineContext,
}

// Constructors
impl VendingMachine {
    /// Create a machine with no registered states.
    pub fn new(event_tx: broadcast::Sender<VendingEvent>) -> Self {
        Self { current_state: None, states: HashMap::new(), context: MachineContext::new(event_tx) }
    }

    /// Create a machine with every vending state registered.
    pub fn with_vending_states(event_tx: broadcast::Sender<VendingEvent>) -> Self {
        let mut machine = Self::new(event_tx);
        for state in vending_states() {
            machine.register_state(state);
        }
        machine
    }
}

// Getters
impl VendingMachine {
    pub fn current_state(&self) -> Option<StateName> {
        self.current_state
    }

    /// Whether the current state reads keys. Product, Assign and Return run
    /// on their own and would drop a key delivered to them.
    pub fn accepts_input(&self) -> bool {
        matches!(self.current_state, Some(StateName::Waiting | StateName::Amount))
    }

    pub fn context(&self) -> &MachineContext {
        &self.context
    }

    #[cfg(test)]
    pub fn context_mut(&mut self) -> &mut MachineContext {
        &mut self.context
    }
}

// State registry and transitions
impl VendingMachine {
    /// Add a state to the registry. A state registered under the same name
    /// earlier is replaced.
    pub fn register_state(&mut self, state: State) {
        if self.states.insert(state.name, state).is_some() {
            warn!("State {} registered twice, keeping the latest", state.name);
        }
    }

    /// Move to the initial state.
    pub fn start(&mut self) -> Result<(), MachineError> {
        self.transition_to(StateName::Waiting)
    }

    /// Exit the current state, if any, and enter `name`.
    pub fn transition_to(&mut self, name: StateName) -> Result<(), MachineError> {
        let next = *self.states.get(&name).ok_or(MachineError::UnknownState(name))?;

        let current = self.current_state.and_then(|current| self.states.get(&current).copied());
        if let Some(current) = current {
            debug!("Exiting {}", current.name);
            (current.exit)(&mut self.context)?;
        }

        self.current_state = Some(next.name);
        debug!("Entering {}", next.name);
        (next.enter)(&mut self.context)
    }
}

// Event loop
impl VendingMachine {
    /// Store the key for the next tick.
    pub fn set_event(&mut self, event: InputEvent) {
        if event != InputEvent::Empty {
            debug!("Event {}", event);
        }
        self.context.set_pending_event(event);
    }

    /// Run the current state's update and apply the transition it asks for.
    /// Does nothing before the first transition.
    pub fn tick(&mut self) -> Result<(), MachineError> {
        let Some(current) = self.current_state else {
            return Ok(());
        };
        let state = *self.states.get(&current).ok_or(MachineError::UnknownState(current))?;

        match (state.update)(&mut self.context)? {
            Some(next) => self.transition_to(next),
            None => Ok(()),
        }
    }

    /// Deliver one key and tick.
    pub fn step(&mut self, event: InputEvent) -> Result<(), MachineError> {
        self.set_event(event);
        self.tick()
    }
}
