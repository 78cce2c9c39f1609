// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the picker.

## Organization

- **Palette**: Base colors (neutral grays and a leaf-green brand scale)
- **Spacing**: Spacing scale (4px baseline)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Emphasis**: Hover and selection feedback

## Examples

```
use gadantic_ui::ui::design_tokens::{emphasis, palette, spacing};

let gap = spacing::SM;
assert!(emphasis::HOVER_SCALE > 1.0);
let _accent = palette::LEAF_500;
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand (leaf green)
    pub const LEAF_300: Color = Color::from_rgb(0.6, 0.82, 0.5);
    pub const LEAF_500: Color = Color::from_rgb(0.33, 0.63, 0.25);
    pub const LEAF_700: Color = Color::from_rgb(0.2, 0.45, 0.15);
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const PICKER_MAX_WIDTH: f32 = 960.0;
}

pub mod typography {
    /// Screen heading
    pub const TITLE_MD: f32 = 20.0;

    /// Crop name under the preview
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text
    pub const BODY: f32 = 14.0;

    /// Tooltips and footprint details
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod border {
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Lifted look of a hovered option.
    pub const RAISED: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 14.0,
    };
}

pub mod emphasis {
    use super::Color;

    /// Scale applied to an option under the pointer.
    pub const HOVER_SCALE: f32 = 1.15;

    /// Stacking layer of an option under the pointer, above its siblings.
    pub const HOVER_LAYER: u8 = 99;

    /// Stacking layer of an option at rest.
    pub const REST_LAYER: u8 = 0;

    /// Tint used to render desaturated icons.
    pub const DESATURATED_TINT: Color = Color::from_rgb(0.55, 0.55, 0.55);
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(emphasis::HOVER_SCALE > 1.0);
    assert!(emphasis::HOVER_LAYER > emphasis::REST_LAYER);
};
