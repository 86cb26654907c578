use std::fmt;

use crate::machine::catalog::{self, Product};

/// The key delivered to the machine on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputEvent {
    /// No key was available this tick.
    #[default]
    Empty,
    /// An upper-cased key.
    Key(char),
}

impl InputEvent {
    /// Normalize a raw key: letters are upper-cased, whitespace is no input.
    pub fn from_key(key: char) -> Self {
        if key.is_whitespace() { Self::Empty } else { Self::Key(key.to_ascii_uppercase()) }
    }

    /// Value of the coin this key inserts, if any.
    pub fn coin_value(&self) -> Option<u32> {
        match self {
            Self::Key(symbol) => catalog::coin_value(*symbol),
            Self::Empty => None,
        }
    }

    /// Catalog entry this key selects, if any.
    pub fn product(&self) -> Option<&'static Product> {
        match self {
            Self::Key(symbol) => catalog::product(*symbol),
            Self::Empty => None,
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Key(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// Progress notices published by the machine while a sale runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendingEvent {
    /// A coin was added to the running total.
    CoinAccepted { value: u32 },
    /// Total deposited when leaving the fund accumulation phase.
    TotalAmount { total: u32 },
    /// The dispense valve opened for an item.
    Dispensing { item: &'static str },
    /// The dispense valve closed.
    ValveClosed,
    /// Change owed after a sale.
    ChangeDue { amount: u32 },
    /// One coin paid back.
    CoinReturned { value: u32 },
}

impl fmt::Display for VendingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoinAccepted { value } => write!(f, "amount: {value}"),
            Self::TotalAmount { total } => write!(f, "total money: {total}"),
            Self::Dispensing { item } => write!(f, "dispensing {item}"),
            Self::ValveClosed => write!(f, "closing valve"),
            Self::ChangeDue { amount } => write!(f, "change due: {amount}"),
            Self::CoinReturned { value } => write!(f, "return {value}"),
        }
    }
}
