// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The message input changed.
    DraftChanged(String),
    /// A kind button was pressed.
    KindSelected(&'static str),
    /// Show the current draft as a toast.
    Notify,
    Tick(Instant), // Periodic tick driving fade and removal timers
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Toast shown as soon as the window opens.
    pub message: Option<String>,
    /// Kind used for toasts, overriding the configured default.
    pub kind: Option<String>,
    /// Timeout in milliseconds, overriding the configured default.
    pub timeout_ms: Option<i64>,
    /// Settings file to read instead of the per-user one.
    pub config_path: Option<PathBuf>,
}
