use log::{error, info};

use crate::machine::{
    MachineContext, MachineError, StateName, VendingEvent,
    catalog::{CHANGE_DENOMINATIONS, smallest_denomination},
    states::{State, no_op},
};

pub fn state() -> State {
    State { name: StateName::Return, enter, update, exit: no_op }
}

fn enter(ctx: &mut MachineContext) -> Result<(), MachineError> {
    ctx.emit(VendingEvent::ChangeDue { amount: ctx.change_owed() });
    Ok(())
}

/// Pay back the change largest coin first. A remainder no coin can pay keeps
/// the machine here and is reported on every tick.
fn update(ctx: &mut MachineContext) -> Result<Option<StateName>, MachineError> {
    for coin in CHANGE_DENOMINATIONS {
        while ctx.change_owed() >= coin {
            ctx.return_coin(coin);
        }
    }

    match ctx.change_owed() {
        0 => {
            info!("Sold {:?}, change paid", ctx.selected_item());
            Ok(Some(StateName::Waiting))
        }
        remainder => {
            error!(
                "Cannot pay back remaining change of {} with coins of at least {}",
                remainder,
                smallest_denomination()
            );
            Err(MachineError::StuckChange { remainder })
        }
    }
}
