// SPDX-License-Identifier: MPL-2.0
//! Core snackbar data structures.
//!
//! A [`Descriptor`] is produced by the builder and never changes afterwards;
//! the sequencer and the presenter only read it.

use iced::Color;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Unique identifier for a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnackbarId(u64);

impl SnackbarId {
    /// Creates a new unique snackbar ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SnackbarId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnackbarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How long a snackbar stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayDuration {
    Short,
    #[default]
    Long,
    /// Stays until dismissed by the user or replaced.
    Indefinite,
    Millis(u32),
}

impl DisplayDuration {
    /// Resolves the policy against the configured short/long durations.
    /// Returns `None` when the snackbar must not time out.
    #[must_use]
    pub fn resolve(self, short: Duration, long: Duration) -> Option<Duration> {
        match self {
            DisplayDuration::Short => Some(short),
            DisplayDuration::Long => Some(long),
            DisplayDuration::Indefinite => None,
            DisplayDuration::Millis(ms) => Some(Duration::from_millis(u64::from(ms))),
        }
    }
}

/// Interaction state of the action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    Active,
    Hovered,
    Pressed,
    Disabled,
}

/// Action label colors keyed by interaction state.
///
/// States without an explicit entry fall back to the `active` color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionColors {
    active: Color,
    hovered: Option<Color>,
    pressed: Option<Color>,
    disabled: Option<Color>,
}

impl ActionColors {
    #[must_use]
    pub fn new(active: Color) -> Self {
        Self {
            active,
            hovered: None,
            pressed: None,
            disabled: None,
        }
    }

    #[must_use]
    pub fn hovered(mut self, color: Color) -> Self {
        self.hovered = Some(color);
        self
    }

    #[must_use]
    pub fn pressed(mut self, color: Color) -> Self {
        self.pressed = Some(color);
        self
    }

    #[must_use]
    pub fn disabled(mut self, color: Color) -> Self {
        self.disabled = Some(color);
        self
    }

    #[must_use]
    pub fn color_for(&self, state: ActionState) -> Color {
        let specific = match state {
            ActionState::Active => None,
            ActionState::Hovered => self.hovered,
            ActionState::Pressed => self.pressed,
            ActionState::Disabled => self.disabled,
        };
        specific.unwrap_or(self.active)
    }
}

/// The single color mechanism in effect for an action label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActionTextColor {
    /// Let the surface pick its theme color.
    #[default]
    ThemeDefault,
    Solid(Color),
    States(ActionColors),
}

impl ActionTextColor {
    /// Color to paint the label with, if one was configured.
    #[must_use]
    pub fn color_for(&self, state: ActionState) -> Option<Color> {
        match self {
            ActionTextColor::ThemeDefault => None,
            ActionTextColor::Solid(color) => Some(*color),
            ActionTextColor::States(colors) => Some(colors.color_for(state)),
        }
    }
}

/// Callback run when the action button is pressed.
pub type ActionCallback = Arc<dyn Fn() + Send + Sync>;

/// Optional button shown next to the snackbar text.
#[derive(Clone)]
pub struct Action {
    label: String,
    on_invoke: ActionCallback,
    text_color: ActionTextColor,
}

impl Action {
    pub(crate) fn new(
        label: String,
        on_invoke: ActionCallback,
        text_color: ActionTextColor,
    ) -> Self {
        Self {
            label,
            on_invoke,
            text_color,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn text_color(&self) -> ActionTextColor {
        self.text_color
    }

    /// Runs the action callback.
    pub fn invoke(&self) {
        (self.on_invoke)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("text_color", &self.text_color)
            .finish_non_exhaustive()
    }
}

/// A finalized snackbar request.
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub(crate) id: SnackbarId,
    pub(crate) text: String,
    pub(crate) max_lines: i32,
    pub(crate) text_color: Color,
    pub(crate) background_color: Color,
    pub(crate) duration: DisplayDuration,
    pub(crate) important: bool,
    pub(crate) action: Option<Action>,
}

impl Descriptor {
    #[must_use]
    pub fn id(&self) -> SnackbarId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Maximum number of text lines. Values below 1 are passed through as-is.
    #[must_use]
    pub fn max_lines(&self) -> i32 {
        self.max_lines
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn is_important(&self) -> bool {
        self.important
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }
}
