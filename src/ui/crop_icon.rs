// SPDX-License-Identifier: MPL-2.0
//! Icon of a crop.
//!
//! The icon source and its textual description are fully determined by the
//! crop; since [`Crop`] is a closed enum there is no "unknown crop" case.

use crate::assets::AssetRef;
use crate::crop::Crop;
use crate::ui::styles;
use iced::widget::{svg, tooltip, Svg};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropIcon {
    crop: Crop,
    size: f32,
    grayscale: bool,
}

impl CropIcon {
    pub const DEFAULT_SIZE: f32 = 48.0;

    #[must_use]
    pub fn new(crop: Crop) -> Self {
        Self {
            crop,
            size: Self::DEFAULT_SIZE,
            grayscale: false,
        }
    }

    /// Edge length of the square icon.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Renders the icon gray until hovered.
    #[must_use]
    pub fn grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    #[must_use]
    pub fn crop(&self) -> Crop {
        self.crop
    }

    #[must_use]
    pub fn source(&self) -> AssetRef {
        self.crop.asset()
    }

    /// Textual description of the image.
    #[must_use]
    pub fn alt(&self) -> String {
        format!("{} icon", self.crop.name())
    }

    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        let image: Svg<'a> = svg(self.source().handle())
            .width(Length::Fixed(self.size))
            .height(Length::Fixed(self.size))
            .style(if self.grayscale {
                styles::svg::grayscale
            } else {
                styles::svg::full_color
            });

        styles::tooltip::styled(image, self.alt(), tooltip::Position::Bottom).into()
    }
}

impl From<Crop> for CropIcon {
    fn from(crop: Crop) -> Self {
        Self::new(crop)
    }
}
