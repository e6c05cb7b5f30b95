//! The cyclic-state toggle engine.
//!
//! An [`IteratingButton`] owns an opaque state value and a pure transition
//! function, and advances the state one step per permitted click. The
//! click protocol is fixed:
//!
//! 1. guard — may veto the toggle (default: always permit)
//! 2. transition — `state = transition(&state)`
//! 3. post-effect — runs only after a permitted toggle (default: no-op)
//! 4. icon refresh — always runs, and is told whether the toggle happened
//!
//! The refreshed icon is stored on the button and written into the event,
//! so the host's rendered slot updates without a full redraw. A vetoed
//! toggle still refreshes the icon (with `toggled = false`), which lets a
//! guard surface a "denied" icon variant; nothing reverts icons from
//! earlier successful toggles.

use crate::button::Button;
use crate::context::HostContext;
use crate::error::{MenuError, MenuResult};
use crate::event::ClickEvent;
use crate::icon::Icon;

type TransitionFn<T> = Box<dyn Fn(&T) -> T>;
type GuardFn<T, C> = Box<dyn FnMut(&C, &mut ClickEvent, &T) -> bool>;
type AfterToggleFn<T, C> = Box<dyn FnMut(&C, &mut ClickEvent, &T)>;
type UpdateIconFn<T, C> = Box<dyn FnMut(&C, &mut ClickEvent, &T, &Icon, bool) -> Icon>;

/// A stateful button cycling through values of `T`, one step per
/// permitted click.
pub struct IteratingButton<T, C: HostContext> {
    icon: Icon,
    state: T,
    transition: TransitionFn<T>,
    guard: GuardFn<T, C>,
    after_toggle: AfterToggleFn<T, C>,
    update_icon: UpdateIconFn<T, C>,
}

impl<T, C: HostContext> IteratingButton<T, C> {
    /// Create an engine with default hooks: the guard always permits, the
    /// post-effect does nothing, and the icon refresh keeps the icon
    /// unchanged.
    ///
    /// The transition must be pure and deterministic; it is supplied once
    /// and not replaceable.
    pub fn new(icon: Icon, initial_state: T, transition: impl Fn(&T) -> T + 'static) -> Self {
        Self {
            icon,
            state: initial_state,
            transition: Box::new(transition),
            guard: Box::new(|_, _, _| true),
            after_toggle: Box::new(|_, _, _| {}),
            update_icon: Box::new(|_, _, _, icon, _| icon.clone()),
        }
    }

    /// Start building an engine whose state or transition is supplied
    /// later. [`IteratingButtonBuilder::build`] fails fast if either is
    /// still missing.
    pub fn builder(icon: Icon) -> IteratingButtonBuilder<T, C> {
        IteratingButtonBuilder {
            icon,
            initial_state: None,
            transition: None,
            guard: None,
            after_toggle: None,
            update_icon: None,
        }
    }

    /// Replace the guard hook. Called before every toggle with the current
    /// state; returning `false` vetoes the transition.
    pub fn with_guard(
        mut self,
        guard: impl FnMut(&C, &mut ClickEvent, &T) -> bool + 'static,
    ) -> Self {
        self.guard = Box::new(guard);
        self
    }

    /// Replace the post-effect hook. Called with the new state, only after
    /// a permitted toggle.
    pub fn with_after_toggle(
        mut self,
        after_toggle: impl FnMut(&C, &mut ClickEvent, &T) + 'static,
    ) -> Self {
        self.after_toggle = Box::new(after_toggle);
        self
    }

    /// Replace the icon-refresh hook. Called after every click with the
    /// current state, the current icon, and whether the toggle happened;
    /// the returned icon becomes the button's icon.
    pub fn with_update_icon(
        mut self,
        update_icon: impl FnMut(&C, &mut ClickEvent, &T, &Icon, bool) -> Icon + 'static,
    ) -> Self {
        self.update_icon = Box::new(update_icon);
        self
    }

    /// The current state.
    pub fn current_state(&self) -> &T {
        &self.state
    }

    /// Run guard → transition → post-effect. Returns whether the toggle
    /// was permitted.
    fn try_toggle(&mut self, ctx: &C, event: &mut ClickEvent) -> bool {
        if !(self.guard)(ctx, event, &self.state) {
            return false;
        }
        self.state = (self.transition)(&self.state);
        (self.after_toggle)(ctx, event, &self.state);
        true
    }
}

impl<T, C: HostContext> Button<C> for IteratingButton<T, C> {
    fn icon(&self) -> &Icon {
        &self.icon
    }

    fn on_click(&mut self, ctx: &C, event: &mut ClickEvent) {
        let toggled = self.try_toggle(ctx, event);
        let refreshed = (self.update_icon)(ctx, event, &self.state, &self.icon, toggled);
        self.icon = refreshed.clone();
        event.set_slot_icon(refreshed);
        tracing::debug!(slot = event.slot(), toggled, "iterating button clicked");
    }
}

impl<T: std::fmt::Debug, C: HostContext> std::fmt::Debug for IteratingButton<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IteratingButton")
            .field("icon", &self.icon)
            .field("state", &self.state)
            .finish()
    }
}

/// Builder for [`IteratingButton`], covering the deferred-construction
/// path where state and transition arrive after the icon.
pub struct IteratingButtonBuilder<T, C: HostContext> {
    icon: Icon,
    initial_state: Option<T>,
    transition: Option<TransitionFn<T>>,
    guard: Option<GuardFn<T, C>>,
    after_toggle: Option<AfterToggleFn<T, C>>,
    update_icon: Option<UpdateIconFn<T, C>>,
}

impl<T, C: HostContext> IteratingButtonBuilder<T, C> {
    /// Set the initial state.
    pub fn initial_state(mut self, state: T) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the transition function.
    pub fn transition(mut self, transition: impl Fn(&T) -> T + 'static) -> Self {
        self.transition = Some(Box::new(transition));
        self
    }

    /// Set the guard hook.
    pub fn guard(mut self, guard: impl FnMut(&C, &mut ClickEvent, &T) -> bool + 'static) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Set the post-effect hook.
    pub fn after_toggle(
        mut self,
        after_toggle: impl FnMut(&C, &mut ClickEvent, &T) + 'static,
    ) -> Self {
        self.after_toggle = Some(Box::new(after_toggle));
        self
    }

    /// Set the icon-refresh hook.
    pub fn update_icon(
        mut self,
        update_icon: impl FnMut(&C, &mut ClickEvent, &T, &Icon, bool) -> Icon + 'static,
    ) -> Self {
        self.update_icon = Some(Box::new(update_icon));
        self
    }

    /// Build the engine.
    ///
    /// Fails with [`MenuError::Construction`] if the initial state or the
    /// transition is missing, so a half-configured button can never reach
    /// its first click.
    pub fn build(self) -> MenuResult<IteratingButton<T, C>> {
        let state = self.initial_state.ok_or(MenuError::Construction {
            field: "initial_state",
        })?;
        let transition = self.transition.ok_or(MenuError::Construction {
            field: "transition",
        })?;
        Ok(IteratingButton {
            icon: self.icon,
            state,
            transition,
            guard: self.guard.unwrap_or_else(|| Box::new(|_, _, _| true)),
            after_toggle: self
                .after_toggle
                .unwrap_or_else(|| Box::new(|_, _, _| {})),
            update_icon: self
                .update_icon
                .unwrap_or_else(|| Box::new(|_, _, _, icon, _| icon.clone())),
        })
    }
}
