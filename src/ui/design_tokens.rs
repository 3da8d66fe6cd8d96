// SPDX-License-Identifier: MPL-2.0
//! Design tokens used by the toast overlay and the demo window.
//!
//! - **Palette**: Base and semantic colors
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Border**, **Radius**, **Shadow**: Card decoration
//!
//! ```
//! use toast_notify::ui::design_tokens::{palette, spacing};
//! use iced::Color;
//!
//! let dimmed = Color { a: 0.5, ..palette::INFO_500 };
//! let padding = spacing::MD; // 16px
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const INPUT_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - Window heading
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Toast text, labels
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - Toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(typography::TITLE_MD > typography::BODY);
};
