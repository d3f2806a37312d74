// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.

// ==========================================================================
// Snackbar Durations
// ==========================================================================

/// Display time of a `Short` snackbar (in milliseconds).
pub const DEFAULT_SHORT_DURATION_MS: u32 = 1500;

/// Display time of a `Long` snackbar (in milliseconds).
pub const DEFAULT_LONG_DURATION_MS: u32 = 2750;

/// Minimum accepted duration from the config file (in milliseconds).
pub const MIN_DURATION_MS: u32 = 250;

/// Maximum accepted duration from the config file (in milliseconds).
pub const MAX_DURATION_MS: u32 = 60_000;

// ==========================================================================
// Snackbar Layout
// ==========================================================================

/// Lines of message text shown when the caller does not ask for more.
pub const DEFAULT_MAX_LINES: i32 = 1;

// ==========================================================================
// Surface Timer
// ==========================================================================

/// Interval of the tick that drives auto-dismiss while a snackbar is visible.
pub const TICK_INTERVAL_MS: u64 = 100;

const _: () = {
    assert!(DEFAULT_SHORT_DURATION_MS < DEFAULT_LONG_DURATION_MS);
    assert!(MIN_DURATION_MS <= DEFAULT_SHORT_DURATION_MS);
    assert!(DEFAULT_LONG_DURATION_MS <= MAX_DURATION_MS);
};
