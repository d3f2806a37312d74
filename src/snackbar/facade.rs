// SPDX-License-Identifier: MPL-2.0
//! Per-surface entry point.

use super::builder::Builder;
use super::context::ConsumerContext;
use super::presenter::Presenter;
use super::resources::Resources;
use super::sequencer::{Inbox, Mode, Sequencer};
use crate::error::Result;
use std::fmt;

/// Binds one sequencer to one presentation surface.
///
/// Create builders with [`create`], submit them with `show()`, and call
/// [`process_pending`] from the designated thread (typically once per UI
/// update) to let queued snackbars through.
///
/// [`create`]: Snackbars::create
/// [`process_pending`]: Snackbars::process_pending
pub struct Snackbars<P> {
    sequencer: Sequencer<P>,
    context: ConsumerContext,
    resources: Resources,
}

impl<P: Presenter> Snackbars<P> {
    /// Attaches to `surface` with the default palette and translations.
    ///
    /// # Errors
    ///
    /// Fails with `PreconditionViolation` off the designated thread.
    pub fn attach(surface: P, context: &ConsumerContext) -> Result<Self> {
        context.verify()?;
        Self::with_resources(surface, context, Resources::default())
    }

    /// Attaches to `surface` with custom color and string resolvers.
    ///
    /// # Errors
    ///
    /// Fails with `PreconditionViolation` off the designated thread.
    pub fn with_resources(
        surface: P,
        context: &ConsumerContext,
        resources: Resources,
    ) -> Result<Self> {
        context.verify()?;
        tracing::debug!(thread = ?context.thread(), "snackbar surface attached");
        Ok(Self {
            sequencer: Sequencer::new(surface),
            context: *context,
            resources,
        })
    }

    /// Starts a snackbar with literal text.
    pub fn create(&self, text: impl Into<String>) -> Builder {
        Builder::new(
            text.into(),
            self.resources.clone(),
            self.sequencer.inbox(),
            self.context,
        )
    }

    /// Starts a snackbar whose text is a string resource.
    pub fn create_res(&self, key: &str) -> Builder {
        self.create(self.resources.string(key))
    }

    /// Lets the sequencer handle everything posted so far.
    ///
    /// # Errors
    ///
    /// Fails with `PreconditionViolation` off the designated thread.
    pub fn process_pending(&mut self) -> Result<usize> {
        self.context.verify()?;
        Ok(self.sequencer.process_pending())
    }

    #[must_use]
    pub fn surface(&self) -> &P {
        self.sequencer.presenter()
    }

    pub fn surface_mut(&mut self) -> &mut P {
        self.sequencer.presenter_mut()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.sequencer.mode()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.sequencer.pending_len()
    }

    /// Creates a handle for posting raw events from other threads.
    #[must_use]
    pub fn inbox(&self) -> Inbox {
        self.sequencer.inbox()
    }
}

impl<P> fmt::Debug for Snackbars<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snackbars")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::snackbar::resources::StringResolver;
    use crate::snackbar::testing::RecordingPresenter;
    use crate::ui::design_tokens::DesignTokens;
    use std::sync::Arc;

    struct Echo;

    impl StringResolver for Echo {
        fn string(&self, key: &str) -> String {
            format!("text for {key}")
        }
    }

    fn attach() -> Snackbars<RecordingPresenter> {
        let resources = Resources::new(Arc::new(DesignTokens), Arc::new(Echo));
        Snackbars::with_resources(
            RecordingPresenter::default(),
            &ConsumerContext::current(),
            resources,
        )
        .expect("attach on current thread")
    }

    #[test]
    fn attach_off_thread_fails() {
        let context = ConsumerContext::current();
        let result = std::thread::spawn(move || {
            Snackbars::attach(RecordingPresenter::default(), &context).map(|_| ())
        })
        .join()
        .expect("thread panicked");

        assert!(matches!(result, Err(Error::PreconditionViolation { .. })));
    }

    #[test]
    fn show_is_not_displayed_before_processing() {
        let mut snackbars = attach();
        snackbars.create("queued").show().expect("show");

        assert!(snackbars.surface().dispatched.is_empty());
        assert_eq!(snackbars.process_pending(), Ok(1));
        assert_eq!(snackbars.surface().texts(), ["queued"]);
    }

    #[test]
    fn create_res_resolves_text() {
        let mut snackbars = attach();
        snackbars.create_res("greeting").show().expect("show");
        snackbars.process_pending().expect("process");

        assert_eq!(snackbars.surface().texts(), ["text for greeting"]);
    }

    #[test]
    fn important_gating_through_facade() {
        let mut snackbars = attach();
        snackbars.create("first").important().show().expect("show");
        snackbars.create("second").show().expect("show");
        snackbars.process_pending().expect("process");

        assert_eq!(snackbars.mode(), Mode::ShowingImportant);
        assert_eq!(snackbars.pending_len(), 1);

        snackbars.surface_mut().dismiss_current();
        snackbars.process_pending().expect("process");

        assert_eq!(snackbars.surface().texts(), ["first", "second"]);
        assert_eq!(snackbars.mode(), Mode::ShowingNormal);
    }
}
