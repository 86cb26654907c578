use log::info;

use crate::machine::{
    InputEvent, MachineContext, MachineError, StateName, catalog,
    states::{State, no_op},
};

pub fn state() -> State {
    State { name: StateName::Product, enter, update, exit: no_op }
}

/// Record the product chosen by the pending key. Amount only moves here on a
/// product key.
fn enter(ctx: &mut MachineContext) -> Result<(), MachineError> {
    let product = match ctx.pending_event() {
        InputEvent::Key(symbol) => {
            catalog::product(symbol).ok_or(MachineError::UnknownProduct(symbol))?
        }
        InputEvent::Empty => return Err(MachineError::NoSelection),
    };
    ctx.select(product);
    Ok(())
}

/// Dispense if the deposit covers the price, otherwise go back for more coins.
fn update(ctx: &mut MachineContext) -> Result<Option<StateName>, MachineError> {
    let price = ctx.selected_price().ok_or(MachineError::NoSelection)?;
    if ctx.accumulated_amount() >= price {
        Ok(Some(StateName::Assign))
    } else {
        info!("Insufficient funds: {} deposited, {} required", ctx.accumulated_amount(), price);
        ctx.clear_pending_event();
        Ok(Some(StateName::Amount))
    }
}
