// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::join_item::Appearance;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for one option of an exclusive-selection group.
///
/// The underlying button is the invisible selection control, so at rest it
/// draws nothing but its content. Checked options get a brand outline,
/// hovered ones are lifted above their neighbours.
pub fn join_item(checked: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let appearance = Appearance::resolve(checked, hovered);
        let text_color = theme.palette().text;

        button::Style {
            background: appearance.raised().then(|| {
                Background::Color(Color {
                    a: 0.08,
                    ..text_color
                })
            }),
            text_color: if appearance.desaturated {
                palette::GRAY_400
            } else {
                text_color
            },
            border: Border {
                color: if checked {
                    palette::LEAF_500
                } else {
                    Color::TRANSPARENT
                },
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: if appearance.raised() {
                shadow::RAISED
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}
