use log::debug;

use crate::machine::{MachineContext, MachineError, StateName, VendingEvent, states::State};

pub fn state() -> State {
    State { name: StateName::Amount, enter, update, exit }
}

fn enter(ctx: &mut MachineContext) -> Result<(), MachineError> {
    // Only a coin arriving from Waiting is still pending here; coming back from
    // Product the event has been cleared and the deposit is kept.
    if let Some(value) = ctx.pending_event().coin_value() {
        ctx.start_transaction(value);
    }
    Ok(())
}

fn update(ctx: &mut MachineContext) -> Result<Option<StateName>, MachineError> {
    let event = ctx.pending_event();
    if event.product().is_some() {
        return Ok(Some(StateName::Product));
    }
    if let Some(value) = event.coin_value() {
        ctx.deposit(value);
        debug!("Accumulated {} after coin of {}", ctx.accumulated_amount(), value);
    }
    Ok(None)
}

fn exit(ctx: &mut MachineContext) -> Result<(), MachineError> {
    ctx.emit(VendingEvent::TotalAmount { total: ctx.accumulated_amount() });
    Ok(())
}
