use tokio::sync::broadcast;

use crate::machine::{
    InputEvent, MachineContext, MachineError, StateName, VendingEvent,
    states::{amount, assign, product, returning, vending_states, waiting},
};

fn create_context() -> (MachineContext, broadcast::Receiver<VendingEvent>) {
    let (event_tx, event_rx) = broadcast::channel(64);
    (MachineContext::new(event_tx), event_rx)
}

fn drain(event_rx: &mut broadcast::Receiver<VendingEvent>) -> Vec<VendingEvent> {
    let mut events = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        events.push(event);
    }
    events
}

#[test]
fn test_vending_states_are_distinct() {
    let names: Vec<StateName> = vending_states().iter().map(|state| state.name).collect();
    assert_eq!(
        names,
        vec![
            StateName::Waiting,
            StateName::Amount,
            StateName::Product,
            StateName::Assign,
            StateName::Return
        ]
    );
    assert_eq!(StateName::Return.to_string(), "returning");
}

#[test]
fn test_waiting_moves_to_amount_only_on_coin() {
    let (mut ctx, _event_rx) = create_context();
    let state = waiting::state();

    for key in ['A', '0', '6', 'x'] {
        ctx.set_pending_event(InputEvent::from_key(key));
        assert_eq!((state.update)(&mut ctx), Ok(None));
    }
    ctx.set_pending_event(InputEvent::Empty);
    assert_eq!((state.update)(&mut ctx), Ok(None));

    ctx.set_pending_event(InputEvent::Key('3'));
    assert_eq!((state.update)(&mut ctx), Ok(Some(StateName::Amount)));
}

#[test]
fn test_amount_enter_with_coin_starts_transaction() {
    let (mut ctx, mut event_rx) = create_context();
    ctx.set_accumulated_amount(999);
    ctx.set_pending_event(InputEvent::Key('3'));

    (amount::state().enter)(&mut ctx).unwrap();

    assert_eq!(ctx.accumulated_amount(), 25);
    assert_eq!(drain(&mut event_rx), vec![VendingEvent::CoinAccepted { value: 25 }]);
}

#[test]
fn test_amount_enter_without_coin_keeps_deposit() {
    let (mut ctx, mut event_rx) = create_context();
    ctx.set_accumulated_amount(40);

    (amount::state().enter)(&mut ctx).unwrap();

    assert_eq!(ctx.accumulated_amount(), 40);
    assert!(drain(&mut event_rx).is_empty());
}

#[test]
fn test_amount_update_accumulates_and_selects() {
    let (mut ctx, mut event_rx) = create_context();
    let state = amount::state();

    ctx.set_pending_event(InputEvent::Key('2'));
    assert_eq!((state.update)(&mut ctx), Ok(None));
    ctx.set_pending_event(InputEvent::Key('4'));
    assert_eq!((state.update)(&mut ctx), Ok(None));
    ctx.set_pending_event(InputEvent::Key('Z'));
    assert_eq!((state.update)(&mut ctx), Ok(None));
    assert_eq!(ctx.accumulated_amount(), 110);

    ctx.set_pending_event(InputEvent::Key('B'));
    assert_eq!((state.update)(&mut ctx), Ok(Some(StateName::Product)));
    assert_eq!(ctx.accumulated_amount(), 110);

    (state.exit)(&mut ctx).unwrap();
    assert_eq!(
        drain(&mut event_rx),
        vec![
            VendingEvent::CoinAccepted { value: 10 },
            VendingEvent::CoinAccepted { value: 100 },
            VendingEvent::TotalAmount { total: 110 },
        ]
    );
}

#[test]
fn test_amount_update_saturates_total() {
    let (mut ctx, _event_rx) = create_context();
    ctx.set_accumulated_amount(u32::MAX - 2);
    ctx.set_pending_event(InputEvent::Key('1'));

    assert_eq!((amount::state().update)(&mut ctx), Ok(None));
    assert_eq!(ctx.accumulated_amount(), u32::MAX);
}

#[test]
fn test_product_enter_records_selection() {
    let (mut ctx, _event_rx) = create_context();
    ctx.set_pending_event(InputEvent::Key('E'));

    (product::state().enter)(&mut ctx).unwrap();

    assert_eq!(ctx.selected_price(), Some(120));
    assert_eq!(ctx.selected_item(), Some("chips"));
}

#[test]
fn test_product_enter_rejects_non_product_key() {
    let (mut ctx, _event_rx) = create_context();
    let state = product::state();

    ctx.set_pending_event(InputEvent::Key('1'));
    assert_eq!((state.enter)(&mut ctx), Err(MachineError::UnknownProduct('1')));

    ctx.set_pending_event(InputEvent::Empty);
    assert_eq!((state.enter)(&mut ctx), Err(MachineError::NoSelection));
}

#[test]
fn test_product_update_guards_on_price() {
    let (mut ctx, _event_rx) = create_context();
    let state = product::state();
    ctx.set_pending_event(InputEvent::Key('B'));
    (state.enter)(&mut ctx).unwrap();

    ctx.set_accumulated_amount(85);
    assert_eq!((state.update)(&mut ctx), Ok(Some(StateName::Amount)));
    assert_eq!(ctx.pending_event(), InputEvent::Empty);
    assert_eq!(ctx.accumulated_amount(), 85);

    ctx.set_accumulated_amount(90);
    assert_eq!((state.update)(&mut ctx), Ok(Some(StateName::Assign)));
}

#[test]
fn test_assign_settles_change() {
    let (mut ctx, mut event_rx) = create_context();
    let state = assign::state();
    ctx.set_pending_event(InputEvent::Key('D'));
    (product::state().enter)(&mut ctx).unwrap();

    ctx.set_accumulated_amount(175);
    (state.enter)(&mut ctx).unwrap();
    assert_eq!((state.update)(&mut ctx), Ok(Some(StateName::Return)));
    assert_eq!(ctx.change_owed(), 25);

    ctx.set_accumulated_amount(150);
    assert_eq!((state.update)(&mut ctx), Ok(Some(StateName::Waiting)));
    assert_eq!(ctx.change_owed(), 0);

    (state.exit)(&mut ctx).unwrap();
    assert_eq!(
        drain(&mut event_rx),
        vec![VendingEvent::Dispensing { item: "shake" }, VendingEvent::ValveClosed]
    );
}

#[test]
fn test_assign_without_selection_fails() {
    let (mut ctx, _event_rx) = create_context();
    let state = assign::state();

    assert_eq!((state.enter)(&mut ctx), Err(MachineError::NoSelection));
    assert_eq!((state.update)(&mut ctx), Err(MachineError::NoSelection));
}

#[test]
fn test_assign_underfunded_sale_is_rejected() {
    let (mut ctx, _event_rx) = create_context();
    ctx.set_pending_event(InputEvent::Key('C'));
    (product::state().enter)(&mut ctx).unwrap();
    ctx.set_accumulated_amount(100);

    assert_eq!(
        (assign::state().update)(&mut ctx),
        Err(MachineError::InsufficientFunds { amount: 100, price: 200 })
    );
}

#[test]
fn test_returning_pays_greedy_change() {
    let (mut ctx, mut event_rx) = create_context();
    let state = returning::state();
    ctx.set_change_owed(340);

    (state.enter)(&mut ctx).unwrap();
    assert_eq!((state.update)(&mut ctx), Ok(Some(StateName::Waiting)));
    assert_eq!(ctx.change_owed(), 0);
    assert_eq!(
        drain(&mut event_rx),
        vec![
            VendingEvent::ChangeDue { amount: 340 },
            VendingEvent::CoinReturned { value: 200 },
            VendingEvent::CoinReturned { value: 100 },
            VendingEvent::CoinReturned { value: 25 },
            VendingEvent::CoinReturned { value: 10 },
            VendingEvent::CoinReturned { value: 5 },
        ]
    );
}

#[test]
fn test_returning_reports_remainder_below_smallest_coin() {
    let (mut ctx, mut event_rx) = create_context();
    ctx.set_change_owed(29);

    let result = (returning::state().update)(&mut ctx);

    assert_eq!(result, Err(MachineError::StuckChange { remainder: 4 }));
    assert_eq!(ctx.change_owed(), 4);
    assert_eq!(drain(&mut event_rx), vec![VendingEvent::CoinReturned { value: 25 }]);
}
