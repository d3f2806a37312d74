// SPDX-License-Identifier: MPL-2.0
//! Fluent configuration of a single snackbar.

use super::context::ConsumerContext;
use super::descriptor::{
    Action, ActionCallback, ActionColors, ActionTextColor, Descriptor, DisplayDuration, SnackbarId,
};
use super::resources::{ColorRes, Resources, DEFAULT_ACTION_KEY};
use super::sequencer::{Event, Inbox};
use crate::config::DEFAULT_MAX_LINES;
use crate::error::Result;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::sync::Arc;

/// Accumulates snackbar parameters, then submits them with [`show`].
///
/// Every setter takes and returns the builder, so calls chain:
///
/// ```ignore
/// snackbars
///     .create("Message deleted")
///     .important()
///     .action_text("Undo")
///     .action(|| restore())
///     .show()?;
/// ```
///
/// Color resources are resolved as soon as the setter is called.
///
/// [`show`]: Builder::show
#[must_use = "a snackbar is only displayed once `show` is called"]
pub struct Builder {
    id: SnackbarId,
    text: String,
    max_lines: i32,
    text_color: Color,
    background_color: Color,
    duration: DisplayDuration,
    important: bool,
    action_label: String,
    action_callback: Option<ActionCallback>,
    action_text_color: Option<Color>,
    action_text_colors: Option<ActionColors>,
    resources: Resources,
    inbox: Inbox,
    context: ConsumerContext,
}

impl Builder {
    pub(crate) fn new(
        text: String,
        resources: Resources,
        inbox: Inbox,
        context: ConsumerContext,
    ) -> Self {
        let background_color = resources
            .color(ColorRes::DEFAULT_BACKGROUND)
            .unwrap_or(palette::SNACKBAR_BACKGROUND);
        let action_label = resources.string(DEFAULT_ACTION_KEY);

        Self {
            id: SnackbarId::new(),
            text,
            max_lines: DEFAULT_MAX_LINES,
            text_color: Color::WHITE,
            background_color,
            duration: DisplayDuration::default(),
            important: false,
            action_label,
            action_callback: None,
            action_text_color: None,
            action_text_colors: None,
            resources,
            inbox,
            context,
        }
    }

    /// Id the snackbar will carry once shown.
    pub fn id(&self) -> SnackbarId {
        self.id
    }

    /// Lines of text to show. Not range checked.
    pub fn max_lines(mut self, max_lines: i32) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn text_color_res(mut self, id: ColorRes) -> Self {
        if let Some(color) = self.resolve(id) {
            self.text_color = color;
        }
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn background_color_res(mut self, id: ColorRes) -> Self {
        if let Some(color) = self.resolve(id) {
            self.background_color = color;
        }
        self
    }

    pub fn success_background_color(self) -> Self {
        self.semantic_background(ColorRes::SUCCESS, palette::GREEN_500)
    }

    pub fn error_background_color(self) -> Self {
        self.semantic_background(ColorRes::ERROR, palette::RED_500)
    }

    pub fn warning_background_color(self) -> Self {
        self.semantic_background(ColorRes::WARNING, palette::YELLOW_700)
    }

    pub fn neutral_background_color(self) -> Self {
        self.semantic_background(ColorRes::DEFAULT_BACKGROUND, palette::SNACKBAR_BACKGROUND)
    }

    /// Important snackbars hold back the queue until they are dismissed.
    pub fn important(self) -> Self {
        self.set_important(true)
    }

    pub fn set_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Adds an action button. Without a callback no button is shown.
    pub fn action<F>(mut self, on_invoke: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action_callback = Some(Arc::new(on_invoke));
        self
    }

    pub fn action_text(mut self, text: impl Into<String>) -> Self {
        self.action_label = text.into();
        self
    }

    pub fn action_text_res(mut self, key: &str) -> Self {
        self.action_label = self.resources.string(key);
        self
    }

    /// Solid action label color. Wins over [`action_text_colors`].
    ///
    /// [`action_text_colors`]: Builder::action_text_colors
    pub fn action_text_color(mut self, color: Color) -> Self {
        self.action_text_color = Some(color);
        self
    }

    pub fn action_text_color_res(self, id: ColorRes) -> Self {
        match self.resolve(id) {
            Some(color) => self.action_text_color(color),
            None => self,
        }
    }

    /// Per-state action label colors.
    pub fn action_text_colors(mut self, colors: ActionColors) -> Self {
        self.action_text_colors = Some(colors);
        self
    }

    /// Finalizes the descriptor without submitting it.
    pub fn build(self) -> Descriptor {
        let text_color = match (self.action_text_color, self.action_text_colors) {
            (Some(color), _) => ActionTextColor::Solid(color),
            (None, Some(colors)) => ActionTextColor::States(colors),
            (None, None) => ActionTextColor::ThemeDefault,
        };
        let action = self
            .action_callback
            .map(|on_invoke| Action::new(self.action_label, on_invoke, text_color));

        Descriptor {
            id: self.id,
            text: self.text,
            max_lines: self.max_lines,
            text_color: self.text_color,
            background_color: self.background_color,
            duration: self.duration,
            important: self.important,
            action,
        }
    }

    /// Submits the snackbar to the queue and returns immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] when called off the
    /// designated thread; nothing is queued in that case.
    ///
    /// [`Error::PreconditionViolation`]: crate::error::Error::PreconditionViolation
    pub fn show(self) -> Result<SnackbarId> {
        self.context.verify()?;
        let inbox = self.inbox.clone();
        let descriptor = self.build();
        let id = descriptor.id();
        tracing::debug!(id = %id, important = descriptor.is_important(), "snackbar submitted");
        inbox.post(Event::New(descriptor));
        Ok(id)
    }

    fn semantic_background(mut self, id: ColorRes, fallback: Color) -> Self {
        self.background_color = self.resources.color(id).unwrap_or(fallback);
        self
    }

    fn resolve(&self, id: ColorRes) -> Option<Color> {
        let color = self.resources.color(id);
        if color.is_none() {
            tracing::warn!(color = id.name(), "unknown color resource, keeping previous color");
        }
        color
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("important", &self.important)
            .field("has_action", &self.action_callback.is_some())
            .finish_non_exhaustive()
    }
}
