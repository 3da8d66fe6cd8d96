// SPDX-License-Identifier: MPL-2.0
//! Rendering of notification containers with Iced.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`toast`] - Toast cards and the bottom-right overlay

pub mod design_tokens;
pub mod toast;
