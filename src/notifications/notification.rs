// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `NotificationRequest` passed to the notifier and
//! the `Phase` every toast moves through.

use crate::config::defaults::{BASE_CLASS, DEFAULT_KIND, DEFAULT_TIMEOUT_MS};
use std::fmt;
use std::time::Duration;

/// Lifecycle of a single toast. Transitions are time-driven and one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Element built but not yet attached. Only exists inside `notify`;
    /// `Notifier::phase` never reports it.
    Created,
    /// Attached and fully opaque.
    Visible,
    /// Opacity set to transparent, removal pending.
    Fading,
    /// Detached from the document.
    Removed,
}

impl Phase {
    /// Returns the phase that follows this one, or `None` once removed.
    #[must_use]
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Created => Some(Phase::Visible),
            Phase::Visible => Some(Phase::Fading),
            Phase::Fading => Some(Phase::Removed),
            Phase::Removed => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::Removed
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Created => "created",
            Phase::Visible => "visible",
            Phase::Fading => "fading",
            Phase::Removed => "removed",
        };
        f.write_str(name)
    }
}

/// A message to show, with its kind and display timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Text shown verbatim.
    message: String,
    /// Appended to the base class; drives styling only.
    kind: String,
    /// Time the toast stays fully visible before fading.
    timeout: Duration,
}

impl NotificationRequest {
    /// Creates a request with the default kind and timeout.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: DEFAULT_KIND.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the timeout from signed milliseconds. Negative values mean "now".
    #[must_use]
    pub fn with_timeout_ms(self, ms: i64) -> Self {
        self.with_timeout(Duration::from_millis(u64::try_from(ms).unwrap_or(0)))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Class list of the element built for this request.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("{BASE_CLASS} {}", self.kind)
    }
}
