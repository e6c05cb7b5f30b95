//! Click events.
//!
//! A [`ClickEvent`] describes one user interaction with a slot. The
//! dispatcher pre-fills it with the slot's currently displayed icon; a
//! button may replace that icon through [`ClickEvent::set_slot_icon`],
//! which is the only mutation path, and the dispatcher writes the result
//! back into the slot after the handler returns.

use crate::icon::Icon;
use crate::view::ViewHandle;

/// One click on a slot, owned by the dispatcher for the duration of the
/// handler call.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    view: ViewHandle,
    slot: usize,
    slot_icon: Icon,
}

impl ClickEvent {
    /// Create an event for a click on `slot`, carrying the slot's current
    /// displayed icon.
    pub fn new(view: ViewHandle, slot: usize, slot_icon: Icon) -> Self {
        Self {
            view,
            slot,
            slot_icon,
        }
    }

    /// Handle to the view the click came from.
    pub fn view(&self) -> &ViewHandle {
        &self.view
    }

    /// Index of the clicked slot.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// The icon currently associated with the clicked slot.
    pub fn slot_icon(&self) -> &Icon {
        &self.slot_icon
    }

    /// Replace the slot's icon. The dispatcher applies this to the grid
    /// once the handler returns.
    pub fn set_slot_icon(&mut self, icon: Icon) {
        self.slot_icon = icon;
    }

    /// Consume the event, yielding the icon to write back into the slot.
    pub fn into_slot_icon(self) -> Icon {
        self.slot_icon
    }
}
