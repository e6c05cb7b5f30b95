//! The slot-grid menu surface.
//!
//! A [`SlotGrid`] owns the buttons occupying its slots and plays the
//! dispatcher role: it maps terminal coordinates to slot indices, builds
//! the [`ClickEvent`], calls the button's handler exactly once per click,
//! and writes the event's (possibly replaced) icon back into the slot so
//! the next render shows it. Clicks are delivered strictly in the order
//! the host feeds them in; dispatch is synchronous and single-threaded.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::button::Button;
use crate::context::HostContext;
use crate::error::{MenuError, MenuResult};
use crate::event::ClickEvent;
use crate::icon::Icon;
use crate::view::ViewHandle;

struct SlotEntry<C: HostContext> {
    button: Box<dyn Button<C>>,
    /// The icon the host currently shows for this slot. Kept in sync with
    /// the button via event write-back on every dispatched click.
    displayed: Icon,
}

/// A grid of item slots, addressed row-major.
pub struct SlotGrid<C: HostContext> {
    cols: u16,
    rows: u16,
    slots: Vec<Option<SlotEntry<C>>>,
    view: ViewHandle,
}

impl<C: HostContext> SlotGrid<C> {
    /// Create an empty `cols` × `rows` grid with a freshly opened view.
    pub fn new(cols: u16, rows: u16) -> Self {
        let capacity = cols as usize * rows as usize;
        Self {
            cols,
            rows,
            slots: (0..capacity).map(|_| None).collect(),
            view: ViewHandle::new(),
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Grid width in slots.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Grid height in slots.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Handle to this grid's view.
    pub fn view(&self) -> &ViewHandle {
        &self.view
    }

    /// Whether the view is still open.
    pub fn is_open(&self) -> bool {
        self.view.is_open()
    }

    fn check_bounds(&self, index: usize) -> MenuResult<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(MenuError::SlotOutOfBounds {
                index,
                capacity: self.slots.len(),
            })
        }
    }

    /// Place a button in a slot, replacing any previous occupant. The
    /// slot's displayed icon is initialized from the button.
    pub fn set_button(&mut self, index: usize, button: Box<dyn Button<C>>) -> MenuResult<()> {
        self.check_bounds(index)?;
        let displayed = button.icon().clone();
        self.slots[index] = Some(SlotEntry { button, displayed });
        Ok(())
    }

    /// Remove the button from a slot, leaving it empty.
    pub fn clear_slot(&mut self, index: usize) -> MenuResult<()> {
        self.check_bounds(index)?;
        self.slots[index] = None;
        Ok(())
    }

    /// The button occupying a slot, if any.
    pub fn button(&self, index: usize) -> Option<&dyn Button<C>> {
        self.slots
            .get(index)?
            .as_ref()
            .map(|entry| entry.button.as_ref())
    }

    /// The icon currently displayed in a slot, if occupied.
    pub fn displayed_icon(&self, index: usize) -> Option<&Icon> {
        self.slots.get(index)?.as_ref().map(|entry| &entry.displayed)
    }

    /// Dispatch a click to the button in `index`.
    ///
    /// Returns `Ok(true)` if a button handled the click, `Ok(false)` for
    /// an empty slot or a closed view. The button's handler runs to
    /// completion before this returns; panics inside it propagate to the
    /// caller.
    pub fn click(&mut self, ctx: &C, index: usize) -> MenuResult<bool> {
        self.check_bounds(index)?;
        if !self.view.is_open() {
            tracing::debug!(slot = index, "click ignored, view is closed");
            return Ok(false);
        }
        let Some(entry) = self.slots[index].as_mut() else {
            return Ok(false);
        };

        let mut event = ClickEvent::new(self.view.clone(), index, entry.displayed.clone());
        entry.button.on_click(ctx, &mut event);
        entry.displayed = event.into_slot_icon();
        tracing::debug!(slot = index, owner = ctx.owner(), "dispatched click");
        Ok(true)
    }

    /// Map a terminal position to a slot index, given the area the grid
    /// was rendered into. Positions outside the area, or in the remainder
    /// strip left over when the area does not divide evenly, hit nothing.
    pub fn slot_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let cell_w = area.width / self.cols.max(1);
        let cell_h = area.height / self.rows.max(1);
        if cell_w == 0 || cell_h == 0 {
            return None;
        }
        if x < area.x || y < area.y {
            return None;
        }
        let col = (x - area.x) / cell_w;
        let row = (y - area.y) / cell_h;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Translate a mouse event into a click on the slot under the cursor.
    ///
    /// Only left-button presses qualify; everything else returns
    /// `Ok(false)` untouched.
    pub fn handle_mouse(&mut self, ctx: &C, area: Rect, mouse: &MouseEvent) -> MenuResult<bool> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(false);
        }
        match self.slot_at(area, mouse.column, mouse.row) {
            Some(index) => self.click(ctx, index),
            None => Ok(false),
        }
    }
}

impl<C: HostContext> Widget for &SlotGrid<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.view.is_open() {
            return;
        }
        let cell_w = area.width / self.cols.max(1);
        let cell_h = area.height / self.rows.max(1);
        if cell_w == 0 || cell_h == 0 {
            return;
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                let index = row as usize * self.cols as usize + col as usize;
                if let Some(entry) = &self.slots[index] {
                    let x = area.x + col * cell_w;
                    let y = area.y + row * cell_h;
                    buf.set_line(x, y, &entry.displayed.to_line(), cell_w);
                }
            }
        }
    }
}

impl<C: HostContext> std::fmt::Debug for SlotGrid<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotGrid")
            .field("cols", &self.cols)
            .field("rows", &self.rows)
            .field("occupied", &self.slots.iter().filter(|s| s.is_some()).count())
            .field("open", &self.view.is_open())
            .finish()
    }
}
