//! slotmenu - clickable, stateful buttons for slot-grid menus
//!
//! A small framework for building interactive menus out of a grid of item
//! slots, each occupied by a button. The heart of the crate is the
//! [`Button`] contract and the [`IteratingButton`] toggle engine; the
//! [`SlotGrid`] container, [`TickScheduler`], and [`Icon`] types supply
//! the host surface the buttons run against.
//!
//! # Dispatch model
//!
//! Everything here assumes single-threaded cooperative dispatch: the host
//! delivers click events on one logical thread, handlers run synchronously
//! to completion, and deferred work goes through the next-tick scheduler.
//! Shared handles are `Rc`-based and deliberately `!Send`.
//!
//! # Example
//!
//! ```
//! use slotmenu::{
//!     CloseButton, IteratingButton, MenuContext, SlotGrid, TickScheduler,
//!     Icon, Material,
//! };
//!
//! let scheduler = TickScheduler::new();
//! let ctx = MenuContext::new("demo", scheduler.clone());
//! let mut grid: SlotGrid<MenuContext> = SlotGrid::new(3, 1);
//!
//! let counter = IteratingButton::new(Icon::new(Material::Lever, "0"), 0u32, |n| n + 1)
//!     .with_update_icon(|_, _, n, icon, _| Icon::new(icon.material(), n.to_string()));
//! grid.set_button(0, Box::new(counter)).unwrap();
//! grid.set_button(2, Box::new(CloseButton::new())).unwrap();
//!
//! grid.click(&ctx, 0).unwrap();
//! assert_eq!(grid.displayed_icon(0).unwrap().label(), "1");
//!
//! grid.click(&ctx, 2).unwrap();
//! assert!(grid.is_open());
//! scheduler.run_tick();
//! assert!(!grid.is_open());
//! ```

pub mod button;
pub mod context;
pub mod error;
pub mod event;
pub mod grid;
pub mod icon;
pub mod scheduler;
pub mod view;

pub use button::{
    Button, CloseButton, CycleButton, IteratingButton, IteratingButtonBuilder, ItemButton,
    ToggleButton,
};
pub use context::{HostContext, MenuContext};
pub use error::{MenuError, MenuResult};
pub use event::ClickEvent;
pub use grid::SlotGrid;
pub use icon::{Icon, IconBuilder, Material};
pub use scheduler::TickScheduler;
pub use view::ViewHandle;
