// SPDX-License-Identifier: MPL-2.0
//! Icon styles.

use crate::ui::design_tokens::emphasis;
use iced::widget::svg;
use iced::Theme;

/// Renders the icon in its own colors.
pub fn full_color(_theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style { color: None }
}

/// Grayscale at rest, full color under the pointer.
pub fn grayscale(_theme: &Theme, status: svg::Status) -> svg::Style {
    match status {
        svg::Status::Hovered => svg::Style { color: None },
        svg::Status::Idle => svg::Style {
            color: Some(emphasis::DESATURATED_TINT),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grayscale_tints_only_when_idle() {
        assert_eq!(
            grayscale(&Theme::Dark, svg::Status::Idle).color,
            Some(emphasis::DESATURATED_TINT)
        );
        assert_eq!(grayscale(&Theme::Dark, svg::Status::Hovered).color, None);
    }

    #[test]
    fn full_color_never_tints() {
        assert_eq!(full_color(&Theme::Light, svg::Status::Idle).color, None);
    }
}
