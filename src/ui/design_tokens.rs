// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by toast styling and the overlay renderer.

## Organization

- **Palette**: Base colors
- **Opacity**: Fade endpoints
- **Spacing**: Screen-edge insets
- **Typography**: Font size scale (10-foot UI, sized for television viewing distance)
- **Radius**: Corner radii
- **Motion**: Fade timings

## Examples

```
use iced_toast::ui::design_tokens::{palette, spacing};

let background = palette::GRAY_500;
let inset = spacing::SCREEN_EDGE; // 20px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_500: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    /// Distance kept between a toast and the edge it is anchored to.
    pub const SCREEN_EDGE: f32 = 20.0;

    /// Extra size added to the font size for inline glyphs.
    pub const GLYPH_PADDING: f32 = 30.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes for a 1920x1080 television canvas.

    /// Headline - Default toast text
    pub const HEADLINE: f32 = 38.0;

    /// Body - Secondary text
    pub const BODY: f32 = 29.0;

    /// Caption - Small info
    pub const CAPTION: f32 = 23.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const TOAST: f32 = 10.0;
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Duration of both the fade-in and the fade-out.
    pub const FADE: Duration = Duration::from_millis(300);

    /// Spring damping ratio. 1.0 is critically damped: no overshoot.
    pub const SPRING_DAMPING: f32 = 1.0;

    /// Initial spring velocity.
    pub const SPRING_VELOCITY: f32 = 0.0;

    /// Default time a toast stays fully visible.
    pub const HOLD: Duration = Duration::from_secs(3);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::HEADLINE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(spacing::SCREEN_EDGE > 0.0);
    assert!(radius::TOAST > radius::NONE);
};
