// SPDX-License-Identifier: MPL-2.0
//! Contract between the sequencer and whatever renders snackbars.

use super::descriptor::{Descriptor, SnackbarId};
use super::sequencer::{Event, Inbox};

/// Why a rendered snackbar went away. Every reason counts as a dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Its display duration elapsed.
    Timeout,
    /// The user closed it.
    Manual,
    /// Another snackbar replaced it.
    Superseded,
    /// The user pressed its action button.
    Action,
    /// The surface went away before it was dismissed.
    Teardown,
}

/// Renders descriptors handed over by the sequencer.
///
/// A presenter shows at most one snackbar; dispatching a new one replaces
/// the visible one. `on_dismissed` is only given for important descriptors
/// and must be kept until that snackbar is gone.
pub trait Presenter {
    fn dispatch(&mut self, descriptor: Descriptor, on_dismissed: Option<DismissNotifier>);
}

/// Reports the dismissal of an important snackbar back to its sequencer.
///
/// The dismissal is posted exactly once: either through [`notify`] or, if the
/// notifier is dropped first, with [`DismissReason::Teardown`]. A presenter
/// that is torn down therefore never stalls the queue.
///
/// [`notify`]: DismissNotifier::notify
#[derive(Debug)]
pub struct DismissNotifier {
    id: SnackbarId,
    inbox: Inbox,
    sent: bool,
}

impl DismissNotifier {
    pub(crate) fn new(id: SnackbarId, inbox: Inbox) -> Self {
        Self {
            id,
            inbox,
            sent: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> SnackbarId {
        self.id
    }

    pub fn notify(mut self, reason: DismissReason) {
        self.send(reason);
    }

    fn send(&mut self, reason: DismissReason) {
        if self.sent {
            return;
        }
        self.sent = true;
        tracing::debug!(id = %self.id, ?reason, "snackbar dismissed");
        self.inbox.post(Event::Dismissed(self.id));
    }
}

impl Drop for DismissNotifier {
    fn drop(&mut self) {
        self.send(DismissReason::Teardown);
    }
}
