use log::info;

use crate::machine::{MachineContext, MachineError, StateName, VendingEvent, states::State};

pub fn state() -> State {
    State { name: StateName::Assign, enter, update, exit }
}

/// Open the dispense valve.
fn enter(ctx: &mut MachineContext) -> Result<(), MachineError> {
    let item = ctx.selected_item().ok_or(MachineError::NoSelection)?;
    ctx.emit(VendingEvent::Dispensing { item });
    Ok(())
}

fn update(ctx: &mut MachineContext) -> Result<Option<StateName>, MachineError> {
    let change = ctx.settle()?;
    if change > 0 {
        Ok(Some(StateName::Return))
    } else {
        info!("Sold {:?} for exact payment", ctx.selected_item());
        Ok(Some(StateName::Waiting))
    }
}

/// Close the dispense valve.
fn exit(ctx: &mut MachineContext) -> Result<(), MachineError> {
    ctx.emit(VendingEvent::ValveClosed);
    Ok(())
}
