//! Fixed-sequence specializations of the toggle engine.
//!
//! [`CycleButton`] steps through a fixed list of icons and [`ToggleButton`]
//! flips between two. Both are thin wrappers over [`IteratingButton`];
//! their whole behavior is expressed through the engine's transition and
//! icon-refresh hooks.

use crate::button::{Button, IteratingButton};
use crate::context::HostContext;
use crate::error::{MenuError, MenuResult};
use crate::event::ClickEvent;
use crate::icon::Icon;

/// A button cycling through a fixed, non-empty list of icons, wrapping
/// back to the first after the last.
#[derive(Debug)]
pub struct CycleButton<C: HostContext> {
    engine: IteratingButton<usize, C>,
}

impl<C: HostContext> CycleButton<C> {
    /// Create a cycle over `icons`, starting at the first.
    ///
    /// Fails with [`MenuError::Construction`] if `icons` is empty; a cycle
    /// button must always have an icon to show.
    pub fn new(icons: Vec<Icon>) -> MenuResult<Self> {
        if icons.is_empty() {
            return Err(MenuError::Construction { field: "icons" });
        }
        let len = icons.len();
        let first = icons[0].clone();
        let engine = IteratingButton::new(first, 0usize, move |index| (index + 1) % len)
            .with_update_icon(move |_, _, index, _, _| icons[*index].clone());
        Ok(Self { engine })
    }

    /// Index of the currently shown icon.
    pub fn selected(&self) -> usize {
        *self.engine.current_state()
    }
}

impl<C: HostContext> Button<C> for CycleButton<C> {
    fn icon(&self) -> &Icon {
        self.engine.icon()
    }

    fn on_click(&mut self, ctx: &C, event: &mut ClickEvent) {
        self.engine.on_click(ctx, event);
    }
}

/// A two-state on/off button.
#[derive(Debug)]
pub struct ToggleButton<C: HostContext> {
    engine: IteratingButton<bool, C>,
}

impl<C: HostContext> ToggleButton<C> {
    /// Create a toggle showing `on_icon` or `off_icon` depending on state.
    pub fn new(on_icon: Icon, off_icon: Icon, initially_on: bool) -> Self {
        let start = if initially_on {
            on_icon.clone()
        } else {
            off_icon.clone()
        };
        let engine = IteratingButton::new(start, initially_on, |on| !on).with_update_icon(
            move |_, _, on, _, _| {
                if *on {
                    on_icon.clone()
                } else {
                    off_icon.clone()
                }
            },
        );
        Self { engine }
    }

    /// Whether the toggle is currently on.
    pub fn is_on(&self) -> bool {
        *self.engine.current_state()
    }
}

impl<C: HostContext> Button<C> for ToggleButton<C> {
    fn icon(&self) -> &Icon {
        self.engine.icon()
    }

    fn on_click(&mut self, ctx: &C, event: &mut ClickEvent) {
        self.engine.on_click(ctx, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MenuContext;
    use crate::icon::Material;
    use crate::scheduler::TickScheduler;
    use crate::view::ViewHandle;

    fn test_ctx() -> MenuContext {
        MenuContext::new("test-plugin", TickScheduler::new())
    }

    fn click<B: Button<MenuContext>>(button: &mut B, ctx: &MenuContext) {
        let mut event = ClickEvent::new(ViewHandle::new(), 0, button.icon().clone());
        button.on_click(ctx, &mut event);
    }

    fn palette() -> Vec<Icon> {
        vec![
            Icon::new(Material::Arrow, "One"),
            Icon::new(Material::Arrow, "Two"),
            Icon::new(Material::Arrow, "Three"),
        ]
    }

    #[test]
    fn test_cycle_requires_at_least_one_icon() {
        let result: MenuResult<CycleButton<MenuContext>> = CycleButton::new(Vec::new());
        assert_eq!(
            result.err(),
            Some(MenuError::Construction { field: "icons" })
        );
    }

    #[test]
    fn test_cycle_wraps_around() {
        let ctx = test_ctx();
        let mut button: CycleButton<MenuContext> = CycleButton::new(palette()).unwrap();

        assert_eq!(button.selected(), 0);
        assert_eq!(button.icon().label(), "One");

        click(&mut button, &ctx);
        assert_eq!(button.selected(), 1);
        assert_eq!(button.icon().label(), "Two");

        click(&mut button, &ctx);
        click(&mut button, &ctx);
        assert_eq!(button.selected(), 0);
        assert_eq!(button.icon().label(), "One");
    }

    #[test]
    fn test_toggle_flips_state_and_icon() {
        let ctx = test_ctx();
        let on = Icon::new(Material::Check, "On");
        let off = Icon::new(Material::Cross, "Off");
        let mut button: ToggleButton<MenuContext> = ToggleButton::new(on, off, false);

        assert!(!button.is_on());
        assert_eq!(button.icon().label(), "Off");

        click(&mut button, &ctx);
        assert!(button.is_on());
        assert_eq!(button.icon().label(), "On");

        click(&mut button, &ctx);
        assert!(!button.is_on());
        assert_eq!(button.icon().label(), "Off");
    }
}
