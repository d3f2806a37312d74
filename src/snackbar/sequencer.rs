// SPDX-License-Identifier: MPL-2.0
//! Ordering of snackbar requests.
//!
//! The `Sequencer` consumes [`Event`]s from its inbox and decides when the
//! next descriptor reaches the presenter. It runs on one thread only; the
//! inbox is the only part shared with other threads.
//!
//! Ordinary snackbars are dispatched as soon as they are dequeued and rely on
//! the presenter replacing whatever is visible. An important snackbar blocks
//! the queue until its dismissal comes back through the inbox.

use super::descriptor::{Descriptor, SnackbarId};
use super::presenter::{DismissNotifier, Presenter};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::VecDeque;

/// Messages processed by the sequencer.
#[derive(Debug)]
pub enum Event {
    /// A finalized descriptor was submitted.
    New(Descriptor),
    /// An important snackbar is no longer visible.
    Dismissed(SnackbarId),
}

/// Handle for posting events to a sequencer.
///
/// This handle is cheap to clone and can be shared across threads.
/// Posting never blocks.
#[derive(Clone, Debug)]
pub struct Inbox {
    event_tx: Sender<Event>,
}

impl Inbox {
    pub fn post(&self, event: Event) {
        // The sequencer keeps a sender of its own, so this only fails once it
        // has been dropped and nobody is left to display anything.
        if self.event_tx.send(event).is_err() {
            tracing::debug!("sequencer gone, event discarded");
        }
    }
}

pub(crate) fn channel() -> (Inbox, Receiver<Event>) {
    let (event_tx, event_rx) = unbounded();
    (Inbox { event_tx }, event_rx)
}

/// Sequencer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// An ordinary snackbar was dispatched last. Behaves like `Idle`.
    ShowingNormal,
    /// Waiting for the in-flight important snackbar to be dismissed.
    ShowingImportant,
}

pub struct Sequencer<P> {
    mode: Mode,
    pending: VecDeque<Descriptor>,
    /// Important snackbar whose dismissal is awaited.
    in_flight: Option<SnackbarId>,
    presenter: P,
    inbox: Inbox,
    event_rx: Receiver<Event>,
}

impl<P: Presenter> Sequencer<P> {
    #[must_use]
    pub fn new(presenter: P) -> Self {
        let (inbox, event_rx) = channel();
        Self {
            mode: Mode::Idle,
            pending: VecDeque::new(),
            in_flight: None,
            presenter,
            inbox,
            event_rx,
        }
    }

    /// Creates a handle for posting events to this sequencer.
    #[must_use]
    pub fn inbox(&self) -> Inbox {
        self.inbox.clone()
    }

    /// Handles every event currently in the inbox, including dismissals the
    /// presenter posts while dispatching. Returns the number handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::New(descriptor) => self.on_new(descriptor),
            Event::Dismissed(id) => self.on_dismissed(id),
        }
    }

    fn on_new(&mut self, descriptor: Descriptor) {
        match self.mode {
            Mode::Idle | Mode::ShowingNormal => self.dispatch(descriptor),
            Mode::ShowingImportant => {
                tracing::debug!(
                    id = %descriptor.id(),
                    pending = self.pending.len() + 1,
                    "important snackbar visible, queued"
                );
                self.pending.push_back(descriptor);
            }
        }
    }

    fn on_dismissed(&mut self, id: SnackbarId) {
        if self.mode != Mode::ShowingImportant || self.in_flight != Some(id) {
            tracing::debug!(id = %id, mode = ?self.mode, "ignoring unexpected dismissal");
            return;
        }
        self.in_flight = None;
        self.mode = Mode::Idle;
        self.advance();
    }

    /// Dispatches queued descriptors until an important one is in flight or
    /// the queue is empty.
    fn advance(&mut self) {
        while let Some(next) = self.pending.pop_front() {
            self.dispatch(next);
            if self.mode == Mode::ShowingImportant {
                break;
            }
        }
    }

    fn dispatch(&mut self, descriptor: Descriptor) {
        let id = descriptor.id();
        // State is updated first: the presenter may post the dismissal
        // before `dispatch` returns.
        let on_dismissed = if descriptor.is_important() {
            self.mode = Mode::ShowingImportant;
            self.in_flight = Some(id);
            Some(DismissNotifier::new(id, self.inbox()))
        } else {
            self.mode = Mode::ShowingNormal;
            None
        };
        tracing::debug!(id = %id, mode = ?self.mode, "dispatching snackbar");
        self.presenter.dispatch(descriptor, on_dismissed);
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<SnackbarId> {
        self.in_flight
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::testing::{descriptor, RecordingPresenter};

    fn sequencer() -> Sequencer<RecordingPresenter> {
        Sequencer::new(RecordingPresenter::default())
    }

    fn submit(
        sequencer: &mut Sequencer<RecordingPresenter>,
        text: &str,
        important: bool,
    ) -> SnackbarId {
        let descriptor = descriptor(text, important);
        let id = descriptor.id();
        sequencer.inbox().post(Event::New(descriptor));
        id
    }

    #[test]
    fn new_sequencer_is_idle() {
        let sequencer = sequencer();
        assert_eq!(sequencer.mode(), Mode::Idle);
        assert_eq!(sequencer.pending_len(), 0);
        assert_eq!(sequencer.in_flight(), None);
    }

    #[test]
    fn ordinary_snackbars_dispatch_in_order_without_dismissals() {
        let mut sequencer = sequencer();
        submit(&mut sequencer, "one", false);
        submit(&mut sequencer, "two", false);
        submit(&mut sequencer, "three", false);

        assert_eq!(sequencer.process_pending(), 3);
        assert_eq!(sequencer.presenter().texts(), ["one", "two", "three"]);
        assert_eq!(sequencer.mode(), Mode::ShowingNormal);
        assert_eq!(sequencer.pending_len(), 0);
    }

    #[test]
    fn important_snackbar_blocks_queue_until_dismissed() {
        let mut sequencer = sequencer();
        let first = submit(&mut sequencer, "important", true);
        submit(&mut sequencer, "ordinary", false);
        sequencer.process_pending();

        assert_eq!(sequencer.presenter().texts(), ["important"]);
        assert_eq!(sequencer.mode(), Mode::ShowingImportant);
        assert_eq!(sequencer.in_flight(), Some(first));
        assert_eq!(sequencer.pending_len(), 1);

        sequencer.presenter_mut().dismiss_current();
        sequencer.process_pending();

        assert_eq!(sequencer.presenter().texts(), ["important", "ordinary"]);
        assert_eq!(sequencer.mode(), Mode::ShowingNormal);
        assert_eq!(sequencer.in_flight(), None);
    }

    #[test]
    fn last_dismissal_returns_to_idle() {
        let mut sequencer = sequencer();
        submit(&mut sequencer, "a", true);
        submit(&mut sequencer, "b", true);
        sequencer.process_pending();

        sequencer.presenter_mut().dismiss_current();
        sequencer.process_pending();
        assert_eq!(sequencer.presenter().texts(), ["a", "b"]);
        assert_eq!(sequencer.mode(), Mode::ShowingImportant);

        sequencer.presenter_mut().dismiss_current();
        sequencer.process_pending();
        assert_eq!(sequencer.presenter().texts(), ["a", "b"]);
        assert_eq!(sequencer.mode(), Mode::Idle);
    }

    #[test]
    fn ordinary_run_after_dismissal_drains_until_next_important() {
        let mut sequencer = sequencer();
        submit(&mut sequencer, "gate", true);
        submit(&mut sequencer, "n1", false);
        submit(&mut sequencer, "n2", false);
        submit(&mut sequencer, "gate2", true);
        submit(&mut sequencer, "n3", false);
        sequencer.process_pending();
        assert_eq!(sequencer.pending_len(), 4);

        sequencer.presenter_mut().dismiss_current();
        sequencer.process_pending();

        assert_eq!(sequencer.presenter().texts(), ["gate", "n1", "n2", "gate2"]);
        assert_eq!(sequencer.mode(), Mode::ShowingImportant);
        assert_eq!(sequencer.pending_len(), 1);
    }

    #[test]
    fn dismissal_while_idle_is_ignored() {
        let mut sequencer = sequencer();
        sequencer.handle(Event::Dismissed(SnackbarId::new()));
        sequencer.handle(Event::Dismissed(SnackbarId::new()));

        assert_eq!(sequencer.mode(), Mode::Idle);
        assert!(sequencer.presenter().texts().is_empty());
    }

    #[test]
    fn dismissal_with_foreign_id_does_not_release_queue() {
        let mut sequencer = sequencer();
        submit(&mut sequencer, "gate", true);
        submit(&mut sequencer, "waiting", false);
        sequencer.process_pending();

        sequencer.handle(Event::Dismissed(SnackbarId::new()));

        assert_eq!(sequencer.mode(), Mode::ShowingImportant);
        assert_eq!(sequencer.pending_len(), 1);
    }

    #[test]
    fn important_snackbar_dispatches_immediately_over_ordinary_one() {
        let mut sequencer = sequencer();
        submit(&mut sequencer, "ordinary", false);
        submit(&mut sequencer, "important", true);
        sequencer.process_pending();

        assert_eq!(sequencer.presenter().texts(), ["ordinary", "important"]);
        assert_eq!(sequencer.mode(), Mode::ShowingImportant);
    }

    #[test]
    fn dismissal_posted_during_dispatch_is_handled_in_same_pass() {
        let mut sequencer = Sequencer::new(RecordingPresenter::dropping_notifiers());
        submit(&mut sequencer, "a", true);
        submit(&mut sequencer, "b", true);

        // Each dispatch drops its notifier, posting the dismissal right away.
        assert_eq!(sequencer.process_pending(), 4);
        assert_eq!(sequencer.presenter().texts(), ["a", "b"]);
        assert_eq!(sequencer.mode(), Mode::Idle);
    }

    #[test]
    fn inbox_clone_posts_from_other_threads() {
        let mut sequencer = sequencer();
        let inbox = sequencer.inbox();

        std::thread::spawn(move || {
            inbox.post(Event::New(descriptor("remote", false)));
        })
        .join()
        .expect("thread panicked");

        assert_eq!(sequencer.process_pending(), 1);
        assert_eq!(sequencer.presenter().texts(), ["remote"]);
    }
}
