// SPDX-License-Identifier: MPL-2.0
//! Crop picker screen.
//!
//! Shows every crop as one option of the `crop` selection group, followed by
//! a preview of the selected crop and its footprint.

use crate::config::{CROP_GROUP, PREVIEW_SCALE};
use crate::crop::Crop;
use crate::i18n::fluent::I18n;
use crate::ui::crop_icon::CropIcon;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::join_item::{GroupName, JoinItem};
use crate::ui::selection::SelectionGroups;
use fluent_bundle::FluentValue;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Selected(Crop),
}

/// Context required to render the picker.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: &'a SelectionGroups<Crop>,
}

#[derive(Debug, Clone)]
pub struct State {
    group: GroupName,
    items: Vec<JoinItem<Crop>>,
    icon_size: f32,
}

impl State {
    pub fn new(icon_size: f32) -> Self {
        const GROUP: GroupName = GroupName::from_static(CROP_GROUP);

        let items = Crop::ALL
            .into_iter()
            .map(|crop| JoinItem::new(GROUP, crop))
            .collect();

        Self {
            group: GROUP,
            items,
            icon_size,
        }
    }

    pub fn group(&self) -> &GroupName {
        &self.group
    }

    /// Options in display order.
    pub fn items(&self) -> &[JoinItem<Crop>] {
        &self.items
    }

    pub fn icon_size(&self) -> f32 {
        self.icon_size
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let options = self.items.iter().map(|item| {
            let icon = CropIcon::new(item.value())
                .size(self.icon_size)
                .grayscale(!item.is_checked(ctx.selection));
            item.view(ctx.selection, icon.view::<Message>(), Message::Selected)
        });

        let options = Row::with_children(options)
            .spacing(spacing::XXS)
            .wrap();

        let title = Text::new(ctx.i18n.tr("picker-title")).size(typography::TITLE_MD);

        let content = Column::new()
            .push(title)
            .push(options)
            .push(self.view_preview(&ctx))
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .max_width(sizing::PICKER_MAX_WIDTH)
            .align_x(alignment::Horizontal::Center);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    fn view_preview<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let Some(crop) = ctx.selection.selected(&self.group) else {
            return Text::new(ctx.i18n.tr("picker-empty"))
                .size(typography::BODY)
                .into();
        };

        let footprint = ctx.i18n.tr_with_args(
            "picker-footprint",
            &[("tiles", FluentValue::from(crop.tiles()))],
        );
        let grid = ctx
            .i18n
            .tr_with_args("picker-grid", &[("size", FluentValue::from(crop.size()))]);

        Column::new()
            .push(
                CropIcon::new(crop)
                    .size(self.icon_size * PREVIEW_SCALE)
                    .view::<Message>(),
            )
            .push(Text::new(crop.name()).size(typography::BODY_LG))
            .push(Text::new(format!("{footprint} · {grid}")).size(typography::CAPTION))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}
