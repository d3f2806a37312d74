// SPDX-License-Identifier: MPL-2.0
//! Queued snackbar notifications.
//!
//! Snackbars are short messages shown at the bottom of a surface, one at a
//! time. Requests can arrive faster than they can be shown; this module puts
//! them in order.
//!
//! # Components
//!
//! - [`descriptor`] - Immutable `Descriptor` handed to the presenter
//! - [`builder`] - Chained configuration ending in `show()`
//! - [`sequencer`] - Single-consumer queue deciding what is dispatched when
//! - [`presenter`] - Contract for whatever renders the snackbar
//! - [`facade`] - `Snackbars`, the per-surface entry point
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::snackbar::{ConsumerContext, Snackbars};
//! use iced_snackbar::ui::snackbar::Surface;
//!
//! let mut snackbars = Snackbars::attach(Surface::default(), &ConsumerContext::current())?;
//!
//! snackbars.create("Image saved").success_background_color().show()?;
//! snackbars.create("Message deleted").important().action(|| undo()).show()?;
//!
//! // Once per UI update:
//! snackbars.process_pending()?;
//! ```
//!
//! # Ordering
//!
//! - Ordinary snackbars are dispatched in submission order, each replacing the
//!   previous one on screen
//! - An important snackbar holds back everything submitted after it until it
//!   is dismissed, for whatever reason

pub mod builder;
pub mod context;
pub mod descriptor;
pub mod facade;
pub mod presenter;
pub mod resources;
pub mod sequencer;

#[cfg(test)]
pub(crate) mod testing;

pub use builder::Builder;
pub use context::ConsumerContext;
pub use descriptor::{
    Action, ActionColors, ActionState, ActionTextColor, Descriptor, DisplayDuration, SnackbarId,
};
pub use facade::Snackbars;
pub use presenter::{DismissNotifier, DismissReason, Presenter};
pub use resources::{ColorRes, ColorResolver, Resources, StringResolver};
pub use sequencer::{Event, Inbox, Mode, Sequencer};
