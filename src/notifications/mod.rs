// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides short-lived, non-blocking notifications. Each toast
//! is appended to a notification container, faded out after its timeout and
//! detached shortly after the fade starts.
//!
//! # Components
//!
//! - [`document`] - `Document`, `Container` and `Element`, the tree toasts live in
//! - [`notification`] - `NotificationRequest` and the `Phase` lifecycle
//! - [`notifier`] - `Notifier`, which creates toasts and runs their timers
//! - [`scheduler`] - `Clock` implementations and the `TimerQueue`
//!
//! # Usage
//!
//! ```
//! use toast_notify::notifications::{Document, ManualClock, Notifier, Phase};
//!
//! let clock = ManualClock::new();
//! let mut notifier = Notifier::with_clock(clock.clone());
//! let mut document = Document::with_container("notify-container");
//!
//! let id = notifier.notify(&mut document, "Saved").unwrap();
//!
//! clock.advance_ms(3300);
//! notifier.tick(&mut document);
//! assert_eq!(notifier.phase(&document, id), Phase::Removed);
//! ```

pub mod document;
pub mod notification;
pub mod notifier;
pub mod scheduler;

pub use document::{Container, Document, Element, ElementId};
pub use notification::{NotificationRequest, Phase};
pub use notifier::{Notifier, NotifierSettings};
pub use scheduler::{Clock, ManualClock, SystemClock, TimerQueue, TokioClock};
