// SPDX-License-Identifier: MPL-2.0
//! Iced snackbar surface.
//!
//! The `Surface` is the presenter used by Iced applications. It keeps the
//! single visible snackbar, runs its timer, and reacts to the dismiss and
//! action buttons. Every way a snackbar can leave the screen reports back to
//! the sequencer when the snackbar is important.
//!
//! # Usage
//!
//! ```ignore
//! // In update:
//! Message::Snackbar(msg) => {
//!     self.snackbars.surface_mut().update(msg);
//!     self.snackbars.process_pending()?;
//! }
//!
//! // In view:
//! let overlay = snackbar::view(self.snackbars.surface(), &dismiss_label).map(Message::Snackbar);
//! ```

mod view;

pub use view::view;

use crate::config::SnackbarConfig;
use crate::snackbar::{Descriptor, DismissNotifier, DismissReason, Presenter, SnackbarId};
use std::time::{Duration, Instant};

/// Messages for snackbar surface interactions.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed the snackbar.
    Dismiss(SnackbarId),
    /// The user pressed the action button.
    ActionPressed(SnackbarId),
    /// Tick for checking the auto-dismiss timer.
    Tick(Instant),
}

#[derive(Debug)]
struct Visible {
    descriptor: Descriptor,
    shown_at: Instant,
    /// `None` for snackbars that stay until dismissed.
    timeout: Option<Duration>,
    on_dismissed: Option<DismissNotifier>,
}

/// Shows one snackbar at a time; showing another replaces it.
#[derive(Debug)]
pub struct Surface {
    visible: Option<Visible>,
    short: Duration,
    long: Duration,
    attached: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(&SnackbarConfig::default())
    }
}

impl Surface {
    #[must_use]
    pub fn new(config: &SnackbarConfig) -> Self {
        Self {
            visible: None,
            short: config.short_duration(),
            long: config.long_duration(),
            attached: true,
        }
    }

    /// The snackbar on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Descriptor> {
        self.visible.as_ref().map(|visible| &visible.descriptor)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.is_some()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Handles a surface message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::ActionPressed(id) => {
                self.invoke_action(id);
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Dismisses the visible snackbar once its display time is over.
    pub fn tick(&mut self, now: Instant) {
        let expired = self.visible.as_ref().is_some_and(|visible| {
            visible
                .timeout
                .is_some_and(|timeout| now.saturating_duration_since(visible.shown_at) >= timeout)
        });
        if expired {
            self.close(DismissReason::Timeout);
        }
    }

    /// Closes the snackbar with the given id.
    ///
    /// Returns `false` if it is no longer on screen.
    pub fn dismiss(&mut self, id: SnackbarId) -> bool {
        if !self.is_showing(id) {
            return false;
        }
        self.close(DismissReason::Manual);
        true
    }

    /// Runs the action of the snackbar with the given id, then closes it.
    ///
    /// Returns `false` if it is no longer on screen or has no action.
    pub fn invoke_action(&mut self, id: SnackbarId) -> bool {
        let Some(action) = self
            .current()
            .filter(|descriptor| descriptor.id() == id)
            .and_then(Descriptor::action)
            .cloned()
        else {
            return false;
        };
        action.invoke();
        self.close(DismissReason::Action);
        true
    }

    /// Removes the surface. The visible snackbar is dismissed and later
    /// dispatches are dropped.
    pub fn detach(&mut self) {
        self.attached = false;
        self.close(DismissReason::Teardown);
    }

    fn is_showing(&self, id: SnackbarId) -> bool {
        self.current().is_some_and(|descriptor| descriptor.id() == id)
    }

    fn close(&mut self, reason: DismissReason) {
        let Some(visible) = self.visible.take() else {
            return;
        };
        tracing::debug!(id = %visible.descriptor.id(), ?reason, "snackbar closed");
        if let Some(notifier) = visible.on_dismissed {
            notifier.notify(reason);
        }
    }

    fn show_at(
        &mut self,
        descriptor: Descriptor,
        on_dismissed: Option<DismissNotifier>,
        now: Instant,
    ) {
        if !self.attached {
            tracing::warn!(id = %descriptor.id(), "snackbar surface is gone, dropping snackbar");
            if let Some(notifier) = on_dismissed {
                notifier.notify(DismissReason::Teardown);
            }
            return;
        }

        self.close(DismissReason::Superseded);
        let timeout = descriptor.duration().resolve(self.short, self.long);
        self.visible = Some(Visible {
            descriptor,
            shown_at: now,
            timeout,
            on_dismissed,
        });
    }
}

impl Presenter for Surface {
    fn dispatch(&mut self, descriptor: Descriptor, on_dismissed: Option<DismissNotifier>) {
        self.show_at(descriptor, on_dismissed, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::testing::descriptor;
    use crate::snackbar::{ConsumerContext, DisplayDuration, Mode, Snackbars};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn attach() -> Snackbars<Surface> {
        Snackbars::attach(Surface::default(), &ConsumerContext::current())
            .expect("attach on current thread")
    }

    fn text_of(snackbars: &Snackbars<Surface>) -> Option<&str> {
        snackbars.surface().current().map(Descriptor::text)
    }

    #[test]
    fn new_surface_is_empty() {
        let surface = Surface::default();
        assert!(!surface.is_visible());
        assert!(surface.is_attached());
    }

    #[test]
    fn dispatch_replaces_visible_snackbar() {
        let mut surface = Surface::default();
        surface.dispatch(descriptor("first", false), None);
        surface.dispatch(descriptor("second", false), None);

        assert_eq!(surface.current().map(Descriptor::text), Some("second"));
    }

    #[test]
    fn tick_times_out_after_long_duration() {
        let mut surface = Surface::new(&SnackbarConfig::default());
        let start = Instant::now();
        surface.show_at(descriptor("bye", false), None, start);

        surface.tick(start + Duration::from_millis(100));
        assert!(surface.is_visible());

        surface.tick(start + SnackbarConfig::default().long_duration());
        assert!(!surface.is_visible());
    }

    #[test]
    fn indefinite_snackbar_never_times_out() {
        let mut surface = Surface::default();
        let mut request = descriptor("stay", false);
        request.duration = DisplayDuration::Indefinite;
        let start = Instant::now();
        surface.show_at(request, None, start);

        surface.tick(start + Duration::from_secs(3600));
        assert!(surface.is_visible());
    }

    #[test]
    fn dismiss_ignores_stale_ids() {
        let mut surface = Surface::default();
        let old = descriptor("old", false);
        let old_id = old.id();
        surface.dispatch(old, None);
        surface.dispatch(descriptor("new", false), None);

        assert!(!surface.dismiss(old_id));
        assert!(surface.is_visible());
    }

    #[test]
    fn important_timeout_releases_queue() {
        let mut snackbars = attach();
        snackbars
            .create("important")
            .important()
            .duration(DisplayDuration::Millis(10))
            .show()
            .expect("show");
        snackbars.create("next").show().expect("show");
        snackbars.process_pending().expect("process");
        assert_eq!(text_of(&snackbars), Some("important"));

        snackbars
            .surface_mut()
            .tick(Instant::now() + Duration::from_secs(1));
        snackbars.process_pending().expect("process");

        assert_eq!(text_of(&snackbars), Some("next"));
        assert_eq!(snackbars.mode(), Mode::ShowingNormal);
    }

    #[test]
    fn action_press_runs_callback_and_releases_queue() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut snackbars = attach();
        let id = snackbars
            .create("deleted")
            .important()
            .action_text("Undo")
            .action(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .show()
            .expect("show");
        snackbars.create("after").show().expect("show");
        snackbars.process_pending().expect("process");

        snackbars.surface_mut().update(Message::ActionPressed(id));
        snackbars.process_pending().expect("process");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(text_of(&snackbars), Some("after"));
    }

    #[test]
    fn action_press_without_action_is_ignored() {
        let mut surface = Surface::default();
        let plain = descriptor("plain", false);
        let id = plain.id();
        surface.dispatch(plain, None);

        assert!(!surface.invoke_action(id));
        assert!(surface.is_visible());
    }

    #[test]
    fn manual_dismiss_releases_queue() {
        let mut snackbars = attach();
        let id = snackbars.create("a").important().show().expect("show");
        snackbars.create("b").important().show().expect("show");
        snackbars.process_pending().expect("process");

        snackbars.surface_mut().update(Message::Dismiss(id));
        snackbars.process_pending().expect("process");

        assert_eq!(text_of(&snackbars), Some("b"));
        assert_eq!(snackbars.mode(), Mode::ShowingImportant);
    }

    #[test]
    fn detached_surface_drops_dispatches_without_stalling() {
        let mut snackbars = attach();
        snackbars.surface_mut().detach();

        snackbars.create("one").important().show().expect("show");
        snackbars.create("two").important().show().expect("show");
        snackbars.process_pending().expect("process");

        assert!(!snackbars.surface().is_visible());
        assert_eq!(snackbars.mode(), Mode::Idle);
        assert_eq!(snackbars.pending_len(), 0);
    }

    #[test]
    fn detach_dismisses_visible_important_snackbar() {
        let mut snackbars = attach();
        snackbars.create("gate").important().show().expect("show");
        snackbars.process_pending().expect("process");
        assert_eq!(snackbars.mode(), Mode::ShowingImportant);

        snackbars.surface_mut().detach();
        snackbars.process_pending().expect("process");

        assert_eq!(snackbars.mode(), Mode::Idle);
    }
}
