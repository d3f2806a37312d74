// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` queues transient notifications ("snackbars") for Iced
//! applications.
//!
//! Ordinary snackbars replace whatever is on screen. Important snackbars stay
//! until they are dismissed and hold back everything submitted after them.
//! Requests are built with a fluent [`snackbar::Builder`], ordered by the
//! [`snackbar::Sequencer`], and displayed by a [`snackbar::Presenter`] such as
//! the Iced [`ui::snackbar::Surface`].

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod snackbar;
pub mod ui;
