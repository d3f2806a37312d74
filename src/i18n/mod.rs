// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Snackbar texts and action labels can be given as resource keys; they are
//! resolved here through the Fluent localization system.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at build time
//! - Runtime language switching
//! - Fallback to the default locale when a translation is missing

pub mod fluent;

pub use fluent::I18n;
