use log::debug;
use tokio::sync::broadcast;

use crate::machine::{InputEvent, MachineError, VendingEvent, catalog::Product};

/// Transaction data shared by every state hook.
#[derive(Debug)]
pub struct MachineContext {
    /// The key delivered on the current tick.
    pending_event: InputEvent,
    /// Total deposited in the current transaction.
    accumulated_amount: u32,
    /// The product chosen in the current transaction.
    selected: Option<&'static Product>,
    /// Change still to be paid back.
    change_owed: u32,
    /// Sender for progress notices.
    event_tx: broadcast::Sender<VendingEvent>,
}

// Constructor
impl MachineContext {
    pub fn new(event_tx: broadcast::Sender<VendingEvent>) -> Self {
        Self {
            pending_event: InputEvent::Empty,
            accumulated_amount: 0,
            selected: None,
            change_owed: 0,
            event_tx,
        }
    }
}

// Getters
impl MachineContext {
    pub fn pending_event(&self) -> InputEvent {
        self.pending_event
    }

    pub fn accumulated_amount(&self) -> u32 {
        self.accumulated_amount
    }

    pub fn selected_price(&self) -> Option<u32> {
        self.selected.map(|product| product.price)
    }

    pub fn selected_item(&self) -> Option<&'static str> {
        self.selected.map(|product| product.name)
    }

    pub fn change_owed(&self) -> u32 {
        self.change_owed
    }
}

// Mutations used by the state hooks
impl MachineContext {
    pub fn set_pending_event(&mut self, event: InputEvent) {
        self.pending_event = event;
    }

    pub fn clear_pending_event(&mut self) {
        self.pending_event = InputEvent::Empty;
    }

    /// Begin a new sale with its first coin. Anything left over from the
    /// previous sale is dropped here.
    pub fn start_transaction(&mut self, first_coin: u32) {
        debug!(
            "Starting transaction (previous: amount={}, selected={:?}, change={})",
            self.accumulated_amount,
            self.selected_item(),
            self.change_owed
        );
        self.accumulated_amount = first_coin;
        self.selected = None;
        self.change_owed = 0;
        self.emit(VendingEvent::CoinAccepted { value: first_coin });
    }

    pub fn deposit(&mut self, value: u32) {
        self.accumulated_amount = self.accumulated_amount.saturating_add(value);
        self.emit(VendingEvent::CoinAccepted { value });
    }

    pub fn select(&mut self, product: &'static Product) {
        self.selected = Some(product);
    }

    /// Compute the change owed for the selected product.
    pub fn settle(&mut self) -> Result<u32, MachineError> {
        let price = self.selected_price().ok_or(MachineError::NoSelection)?;
        self.change_owed = self.accumulated_amount.checked_sub(price).ok_or(
            MachineError::InsufficientFunds { amount: self.accumulated_amount, price },
        )?;
        Ok(self.change_owed)
    }

    /// Pay back one coin of the given value.
    pub fn return_coin(&mut self, value: u32) {
        self.change_owed -= value;
        self.emit(VendingEvent::CoinReturned { value });
    }

    pub fn emit(&self, event: VendingEvent) {
        debug!("Notice: {}", event);
        // Fails only when no receiver is subscribed.
        let _ = self.event_tx.send(event);
    }
}

// Setters for testing
#[cfg(test)]
impl MachineContext {
    pub fn set_accumulated_amount(&mut self, amount: u32) {
        self.accumulated_amount = amount;
    }

    pub fn set_change_owed(&mut self, change: u32) {
        self.change_owed = change;
    }
}
