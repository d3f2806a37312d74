// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::snackbar;

/// Kinds of snackbar the demo can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Success,
    Error,
    Warning,
    Neutral,
    /// Important snackbar with an "Undo" action.
    Important,
    /// An important snackbar followed by two ordinary ones.
    Burst,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Show(Request),
    Snackbar(snackbar::Message),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override, e.g. `fr`.
    pub lang: Option<String>,
}
