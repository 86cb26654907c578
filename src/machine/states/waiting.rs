use log::debug;

use crate::machine::{MachineContext, MachineError, StateName, states::{State, no_op}};

pub fn state() -> State {
    State { name: StateName::Waiting, enter: no_op, update, exit: no_op }
}

/// Wait for the first coin of a sale.
fn update(ctx: &mut MachineContext) -> Result<Option<StateName>, MachineError> {
    match ctx.pending_event().coin_value() {
        Some(value) => {
            debug!("Coin of {} starts a sale", value);
            Ok(Some(StateName::Amount))
        }
        None => Ok(None),
    }
}
