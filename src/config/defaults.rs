// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Container**: Identifier of the region hosting the toasts
//! - **Notification**: Default kind and display timeout
//! - **Fade**: Delay between the fade trigger and removal

// ==========================================================================
// Container Defaults
// ==========================================================================

/// Identifier of the container that hosts every toast.
pub const DEFAULT_CONTAINER_ID: &str = "notify-container";

/// Class shared by every toast element; the kind is appended after it.
pub const BASE_CLASS: &str = "notify";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Kind used when the caller does not pass one.
pub const DEFAULT_KIND: &str = "info";

/// How long a toast stays fully visible (in milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Longest display timeout accepted from configuration (in milliseconds).
pub const MAX_TIMEOUT_MS: u64 = 600_000;

// ==========================================================================
// Fade Defaults
// ==========================================================================

/// Delay between the fade trigger and the removal (in milliseconds).
pub const DEFAULT_FADE_DELAY_MS: u64 = 300;

/// Longest fade delay accepted from configuration (in milliseconds).
pub const MAX_FADE_DELAY_MS: u64 = 10_000;

/// Opacity written by the fade step.
pub const FADED_OPACITY: f32 = 0.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TIMEOUT_MS <= MAX_TIMEOUT_MS);
    assert!(DEFAULT_FADE_DELAY_MS <= MAX_FADE_DELAY_MS);
    assert!(FADED_OPACITY == 0.0);
};
