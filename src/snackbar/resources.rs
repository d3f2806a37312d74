// SPDX-License-Identifier: MPL-2.0
//! Color and string resources used while configuring a snackbar.
//!
//! Builders never reach into global state for defaults: they hold a
//! [`Resources`] value carrying the two resolvers explicitly.

use crate::i18n::I18n;
use crate::ui::design_tokens::DesignTokens;
use iced::Color;
use std::fmt;
use std::sync::Arc;

/// Identifier of a named color resource, e.g. `ColorRes::SUCCESS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRes(&'static str);

impl ColorRes {
    pub const WHITE: Self = Self("white");
    pub const BLACK: Self = Self("black");
    pub const DEFAULT_BACKGROUND: Self = Self("default_background");
    pub const SUCCESS: Self = Self("green_500");
    pub const ERROR: Self = Self("red_500");
    pub const WARNING: Self = Self("yellow_700");
    pub const PRIMARY: Self = Self("primary_500");

    /// Refers to a color by name. Unknown names resolve to nothing.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Resolves color resource identifiers to concrete colors.
pub trait ColorResolver: Send + Sync {
    fn color(&self, id: ColorRes) -> Option<Color>;
}

/// Resolves string resource keys to localized text.
pub trait StringResolver: Send + Sync {
    fn string(&self, key: &str) -> String;
}

/// Key of the label used when an action is set without explicit text.
pub const DEFAULT_ACTION_KEY: &str = "snackbar-default-action";

/// The resolvers a builder consults while it is being configured.
#[derive(Clone)]
pub struct Resources {
    colors: Arc<dyn ColorResolver>,
    strings: Arc<dyn StringResolver>,
}

impl Resources {
    pub fn new(colors: Arc<dyn ColorResolver>, strings: Arc<dyn StringResolver>) -> Self {
        Self { colors, strings }
    }

    #[must_use]
    pub fn color(&self, id: ColorRes) -> Option<Color> {
        self.colors.color(id)
    }

    #[must_use]
    pub fn string(&self, key: &str) -> String {
        self.strings.string(key)
    }
}

impl Default for Resources {
    /// Design-token palette and the embedded translations for the system locale.
    fn default() -> Self {
        Self::new(Arc::new(DesignTokens), Arc::new(I18n::default()))
    }
}

impl fmt::Debug for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources").finish_non_exhaustive()
    }
}
