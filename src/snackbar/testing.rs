// SPDX-License-Identifier: MPL-2.0
//! Test helpers for the snackbar core.

use super::descriptor::{Descriptor, DisplayDuration, SnackbarId};
use super::presenter::{DismissNotifier, DismissReason, Presenter};
use iced::Color;

/// Builds a descriptor with default styling.
pub(crate) fn descriptor(text: &str, important: bool) -> Descriptor {
    Descriptor {
        id: SnackbarId::new(),
        text: text.to_string(),
        max_lines: 1,
        text_color: Color::WHITE,
        background_color: Color::BLACK,
        duration: DisplayDuration::Long,
        important,
        action: None,
    }
}

/// Presenter that records every dispatch.
#[derive(Debug, Default)]
pub(crate) struct RecordingPresenter {
    pub dispatched: Vec<Descriptor>,
    notifiers: Vec<DismissNotifier>,
    drop_notifiers: bool,
}

impl RecordingPresenter {
    /// A presenter that drops notifiers immediately, like a torn-down surface.
    pub fn dropping_notifiers() -> Self {
        Self {
            drop_notifiers: true,
            ..Self::default()
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.dispatched.iter().map(Descriptor::text).collect()
    }

    /// Dismisses the most recent important snackbar.
    pub fn dismiss_current(&mut self) {
        if let Some(notifier) = self.notifiers.pop() {
            notifier.notify(DismissReason::Manual);
        }
    }
}

impl Presenter for RecordingPresenter {
    fn dispatch(&mut self, descriptor: Descriptor, on_dismissed: Option<DismissNotifier>) {
        self.dispatched.push(descriptor);
        if let Some(notifier) = on_dismissed {
            if !self.drop_notifiers {
                self.notifiers.push(notifier);
            }
        }
    }
}
