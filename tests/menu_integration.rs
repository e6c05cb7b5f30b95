//! Menu Integration Tests
//!
//! End-to-end coverage of the slot grid with real buttons:
//! - the door-counter example (guarded toggles through the grid)
//! - deferred close through a real scheduler tick
//! - icon write-back consistency between slot and button
//! - dispatch ordering across several buttons

use std::cell::Cell;
use std::rc::Rc;

use slotmenu::{
    Button, CloseButton, Icon, IteratingButton, Material, MenuContext, SlotGrid, TickScheduler,
    ToggleButton,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn make_ctx() -> (MenuContext, TickScheduler) {
    let scheduler = TickScheduler::new();
    (MenuContext::new("integration-test", scheduler.clone()), scheduler)
}

fn door_counter() -> IteratingButton<u32, MenuContext> {
    IteratingButton::new(Icon::new(Material::Door, "Door"), 0u32, |n| n + 1).with_update_icon(
        |_, _, n, icon, _| Icon::new(icon.material(), format!("Door x{n}")),
    )
}

// ============================================================================
// Door Counter Example
// ============================================================================

#[test]
fn test_door_counter_three_clicks() {
    let (ctx, _scheduler) = make_ctx();
    let mut grid: SlotGrid<MenuContext> = SlotGrid::new(3, 3);
    grid.set_button(4, Box::new(door_counter())).unwrap();

    for _ in 0..3 {
        assert_eq!(grid.click(&ctx, 4), Ok(true));
    }

    assert_eq!(grid.displayed_icon(4).unwrap().label(), "Door x3");
    assert_eq!(
        grid.displayed_icon(4),
        Some(grid.button(4).unwrap().icon())
    );
}

#[test]
fn test_guarded_counter_through_grid() {
    let (ctx, _scheduler) = make_ctx();
    let permit = Rc::new(Cell::new(true));

    let guard_permit = Rc::clone(&permit);
    let button = door_counter().with_guard(move |_, _, _| guard_permit.get());

    let mut grid: SlotGrid<MenuContext> = SlotGrid::new(1, 1);
    grid.set_button(0, Box::new(button)).unwrap();

    grid.click(&ctx, 0).unwrap();
    assert_eq!(grid.displayed_icon(0).unwrap().label(), "Door x1");

    permit.set(false);
    grid.click(&ctx, 0).unwrap();
    grid.click(&ctx, 0).unwrap();
    assert_eq!(
        grid.displayed_icon(0).unwrap().label(),
        "Door x1",
        "vetoed toggles must not advance the state"
    );

    permit.set(true);
    grid.click(&ctx, 0).unwrap();
    assert_eq!(grid.displayed_icon(0).unwrap().label(), "Door x2");
}

// ============================================================================
// Deferred Close
// ============================================================================

#[test]
fn test_close_button_full_cycle() {
    let (ctx, scheduler) = make_ctx();
    let mut grid: SlotGrid<MenuContext> = SlotGrid::new(3, 1);
    grid.set_button(2, Box::new(CloseButton::new())).unwrap();

    grid.click(&ctx, 2).unwrap();
    assert!(grid.is_open(), "close is deferred to the next tick");
    assert_eq!(scheduler.pending(), 1);

    scheduler.run_tick();
    assert!(!grid.is_open());

    // The view is gone; further clicks fall on the floor.
    assert_eq!(grid.click(&ctx, 2), Ok(false));
}

#[test]
fn test_close_after_shutdown_is_noop() {
    let (ctx, scheduler) = make_ctx();
    let mut grid: SlotGrid<MenuContext> = SlotGrid::new(1, 1);
    grid.set_button(0, Box::new(CloseButton::new())).unwrap();

    scheduler.shutdown();
    grid.click(&ctx, 0).unwrap();

    scheduler.run_tick();
    assert!(grid.is_open(), "the dropped close must never resurface");
}

// ============================================================================
// Mixed Grid
// ============================================================================

#[test]
fn test_buttons_keep_independent_state() {
    let (ctx, scheduler) = make_ctx();
    let mut grid: SlotGrid<MenuContext> = SlotGrid::new(3, 1);

    grid.set_button(0, Box::new(door_counter())).unwrap();
    let on = Icon::new(Material::Check, "On");
    let off = Icon::new(Material::Cross, "Off");
    grid.set_button(1, Box::new(ToggleButton::new(on, off, false)))
        .unwrap();
    grid.set_button(2, Box::new(CloseButton::new())).unwrap();

    grid.click(&ctx, 0).unwrap();
    grid.click(&ctx, 1).unwrap();
    grid.click(&ctx, 0).unwrap();

    assert_eq!(grid.displayed_icon(0).unwrap().label(), "Door x2");
    assert_eq!(grid.displayed_icon(1).unwrap().label(), "On");
    assert_eq!(scheduler.pending(), 0, "no deferred work without a close");

    grid.click(&ctx, 2).unwrap();
    scheduler.run_tick();
    assert!(!grid.is_open());
}
