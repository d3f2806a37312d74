// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`snackbar`] - Iced presenter and widget for snackbars

pub mod design_tokens;
pub mod snackbar;
