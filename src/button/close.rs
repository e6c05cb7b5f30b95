//! The close button.

use crate::button::Button;
use crate::context::HostContext;
use crate::event::ClickEvent;
use crate::icon::{Icon, IconBuilder, Material};

/// A button that closes the menu view when clicked.
///
/// The close is deferred to the next scheduler tick rather than performed
/// inside the click handler: tearing down the view while it is still
/// dispatching its own event would mutate UI state mid-event. If the
/// scheduler has shut down, the close is dropped silently.
#[derive(Debug, Clone)]
pub struct CloseButton {
    icon: Icon,
}

impl CloseButton {
    /// A close button with the door icon and the label "Close".
    pub fn new() -> Self {
        Self::with_material(Material::Door)
    }

    /// A close button with a custom material and the label "Close".
    pub fn with_material(material: Material) -> Self {
        Self::with_label(material, "Close")
    }

    /// A close button with a custom material and label.
    pub fn with_label(material: Material, label: impl Into<String>) -> Self {
        Self {
            icon: IconBuilder::new(material).label(label).build(),
        }
    }

    /// A close button with a pre-built icon.
    pub fn with_icon(icon: Icon) -> Self {
        Self { icon }
    }
}

impl Default for CloseButton {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HostContext> Button<C> for CloseButton {
    fn icon(&self) -> &Icon {
        &self.icon
    }

    fn on_click(&mut self, ctx: &C, event: &mut ClickEvent) {
        let view = event.view().clone();
        if !ctx.scheduler().schedule_next_tick(move || view.close()) {
            tracing::debug!(
                owner = ctx.owner(),
                "deferred close dropped, scheduler is shut down"
            );
        }
    }
}
