// SPDX-License-Identifier: MPL-2.0
//! `toast_notify` shows short-lived toast notifications.
//!
//! Each toast is appended to a notification container, faded out once its
//! timeout elapses and detached a short delay later. The lifecycle runs on an
//! injectable clock so it can be driven by wall-clock time, tokio time or a
//! virtual clock in tests, and the container can be rendered with Iced.

pub mod app;
pub mod config;
pub mod error;
pub mod notifications;
pub mod runtime;
pub mod ui;
