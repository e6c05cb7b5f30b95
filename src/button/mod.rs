//! Buttons.
//!
//! The click-handling contract ([`Button`]) plus the buttons this crate
//! ships:
//!
//! - [`ItemButton`] — an inert icon holder
//! - [`IteratingButton`] — the generic cyclic-state toggle engine
//! - [`CycleButton`] / [`ToggleButton`] — thin specializations of the engine
//! - [`CloseButton`] — schedules closing the view on the next tick
//!
//! Extensibility is by composition: the engine exposes injectable hook
//! closures with no-op defaults instead of overridable methods.

mod close;
mod cycle;
mod iterating;

pub use close::CloseButton;
pub use cycle::{CycleButton, ToggleButton};
pub use iterating::{IteratingButton, IteratingButtonBuilder};

use crate::context::HostContext;
use crate::event::ClickEvent;
use crate::icon::Icon;

/// A clickable occupant of a menu slot.
///
/// The dispatcher calls [`on_click`](Button::on_click) exactly once per
/// qualifying click, synchronously on the dispatch thread, and delivers
/// clicks to one button strictly in order. Panics raised by a handler are
/// not caught here; recovery policy belongs to the dispatcher.
pub trait Button<C: HostContext> {
    /// The button's current icon. Reflects the most recent update.
    fn icon(&self) -> &Icon;

    /// Handle one click. May mutate the button's own state and may write
    /// a new icon into the event via [`ClickEvent::set_slot_icon`].
    fn on_click(&mut self, ctx: &C, event: &mut ClickEvent);
}

/// A button that just displays an icon and ignores clicks.
///
/// Useful for labels and decorative filler; also the canonical example of
/// the contract's minimum: an icon that is never absent.
#[derive(Debug, Clone)]
pub struct ItemButton {
    icon: Icon,
}

impl ItemButton {
    /// Create a button showing `icon`.
    pub fn new(icon: Icon) -> Self {
        Self { icon }
    }

    /// Replace the icon. The single mutation path for the field.
    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }
}

impl<C: HostContext> Button<C> for ItemButton {
    fn icon(&self) -> &Icon {
        &self.icon
    }

    fn on_click(&mut self, _ctx: &C, _event: &mut ClickEvent) {}
}
