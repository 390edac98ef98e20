// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by the banner and the demo window.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_banner::ui::design_tokens::{palette, spacing};
use iced::Color;

let scrim = Color {
    a: 0.5,
    ..palette::BLACK
};

let inset = spacing::BANNER_INSET; // 10px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Semantic
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);

    // Demo banner backgrounds
    pub const NETWORK_RED: Color = Color::from_rgb(0.8, 0.2, 0.2);
    pub const MESSAGE_YELLOW: Color = Color::from_rgb(1.0, 0.85, 0.1);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;

    /// Fixed inset around and between banner elements.
    pub const BANNER_INSET: f32 = 10.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_LG: f32 = 32.0;

    pub const BUTTON_WIDTH: f32 = 280.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - navigation bar title
    pub const TITLE_MD: f32 = 20.0;

    /// Banner headline
    pub const BANNER_TITLE: f32 = 16.0;

    /// Standard body - banner description, buttons
    pub const BODY: f32 = 14.0;

    /// Caption - status strip clock
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
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

    assert!(sizing::ICON_LG > sizing::ICON_SM);

    assert!(typography::TITLE_MD > typography::BANNER_TITLE);
    assert!(typography::BANNER_TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
