// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires together the crop picker, localization and
//! settings, and turns picker messages into selection changes and config
//! persistence.

mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::config::{self, Config, CROP_GROUP};
use crate::crop::Crop;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::join_item::GroupName;
use crate::ui::picker;
use crate::ui::selection::SelectionGroups;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{window, Element, Length, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Directory settings are saved to; `None` uses the resolved default.
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    picker: picker::State,
    selection: SelectionGroups<Crop>,
    /// i18n key of the warning shown above the picker.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selected", &self.selected_crop())
            .field("warning", &self.warning)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 420.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        (App::new(flags, None), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Builds the initial state from CLI flags and the settings file found
    /// in `config_dir` (or the default config directory).
    pub fn new(flags: Flags, config_dir: Option<PathBuf>) -> Self {
        let (config, warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let mut selection = SelectionGroups::new();
        if let Some(crop) = flags.crop.or(config.picker.selected_crop) {
            selection.select(&Self::crop_group(), crop);
        }

        tracing::info!(
            locale = %i18n.current_locale(),
            selected = ?selection.selected(&Self::crop_group()),
            "application started"
        );

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            picker: picker::State::new(config.picker.effective_icon_size()),
            config,
            config_dir,
            selection,
            warning,
        }
    }

    fn crop_group() -> GroupName {
        GroupName::from_static(CROP_GROUP)
    }

    pub fn selected_crop(&self) -> Option<Crop> {
        self.selection.selected(&Self::crop_group())
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.selected_crop() {
            Some(crop) => format!("{} - {app_name}", crop.name()),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Picker(picker::Message::Selected(crop)) => self.select_crop(crop),
            Message::DismissWarning => self.warning = None,
        }
        Task::none()
    }

    fn select_crop(&mut self, crop: Crop) {
        let previous = self.selection.select(&Self::crop_group(), crop);
        if previous == Some(crop) {
            return;
        }
        tracing::debug!(crop = crop.id(), previous = ?previous.map(Crop::id), "crop selected");

        self.config.picker.selected_crop = Some(crop);
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(error = %err, "failed to save settings");
            self.warning = Some("notification-config-save-error".to_string());
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let picker = self
            .picker
            .view(picker::ViewContext {
                i18n: &self.i18n,
                selection: &self.selection,
            })
            .map(Message::Picker);

        let mut column = Column::new();
        if let Some(key) = &self.warning {
            column = column.push(self.view_warning(key));
        }

        Container::new(column.push(picker))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_warning<'a>(&'a self, key: &str) -> Element<'a, Message> {
        let banner = Row::new()
            .push(
                Text::new(self.i18n.tr(key))
                    .size(typography::BODY)
                    .color(palette::WHITE)
                    .width(Length::Fill),
            )
            .push(button(Text::new("×")).on_press(Message::DismissWarning))
            .spacing(spacing::SM)
            .align_y(iced::alignment::Vertical::Center);

        Container::new(banner)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(|_theme: &Theme| iced::widget::container::Style {
                background: Some(iced::Background::Color(palette::LEAF_700)),
                ..Default::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn app_in(dir: &std::path::Path, flags: Flags) -> App {
        App::new(
            Flags {
                lang: Some("en-US".into()),
                ..flags
            },
            Some(dir.to_path_buf()),
        )
    }

    #[test]
    fn starts_without_selection() {
        let dir = tempdir().expect("temp dir");
        let app = app_in(dir.path(), Flags::default());
        assert_eq!(app.selected_crop(), None);
        assert_eq!(app.title(), "Gadantic");
        assert!(app.warning().is_none());
    }

    #[test]
    fn cli_crop_overrides_saved_selection() {
        let dir = tempdir().expect("temp dir");
        let mut config = Config::default();
        config.picker.selected_crop = Some(Crop::Rice);
        config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");

        let restored = app_in(dir.path(), Flags::default());
        assert_eq!(restored.selected_crop(), Some(Crop::Rice));

        let overridden = app_in(
            dir.path(),
            Flags {
                crop: Some(Crop::Apple),
                ..Flags::default()
            },
        );
        assert_eq!(overridden.selected_crop(), Some(Crop::Apple));
    }

    #[test]
    fn selecting_a_crop_updates_title_and_persists() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path(), Flags::default());

        let _ = app.update(Message::Picker(picker::Message::Selected(Crop::SpicyPepper)));
        assert_eq!(app.selected_crop(), Some(Crop::SpicyPepper));
        assert_eq!(app.title(), "Spicy Pepper - Gadantic");

        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.picker.selected_crop, Some(Crop::SpicyPepper));
    }

    #[test]
    fn selection_is_exclusive() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path(), Flags::default());

        let _ = app.update(Message::Picker(picker::Message::Selected(Crop::Corn)));
        let _ = app.update(Message::Picker(picker::Message::Selected(Crop::Wheat)));
        assert_eq!(app.selected_crop(), Some(Crop::Wheat));
    }

    #[test]
    fn invalid_settings_show_a_dismissable_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("settings.toml"), "[picker\n").expect("write");

        let mut app = app_in(dir.path(), Flags::default());
        assert_eq!(app.warning(), Some("notification-config-load-error"));

        let _ = app.update(Message::DismissWarning);
        assert!(app.warning().is_none());
    }

    #[test]
    fn stale_saved_crop_does_not_erase_other_settings() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join("settings.toml"),
            "[general]\nlanguage = \"fr\"\ntheme_mode = \"dark\"\n\n[picker]\nselected_crop = \"durian\"\n",
        )
        .expect("write");

        let mut app = app_in(dir.path(), Flags::default());
        assert_eq!(app.selected_crop(), None);
        assert!(app.warning().is_none());

        let _ = app.update(Message::Picker(picker::Message::Selected(Crop::Rice)));

        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.general.language.as_deref(), Some("fr"));
        assert_eq!(saved.general.theme_mode, ThemeMode::Dark);
        assert_eq!(saved.picker.selected_crop, Some(Crop::Rice));
    }

    #[test]
    fn unwritable_config_dir_reports_save_failure() {
        let dir = tempdir().expect("temp dir");
        // A regular file where the config directory should be.
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").expect("write");

        let mut app = app_in(&blocker, Flags::default());
        let _ = app.update(Message::Picker(picker::Message::Selected(Crop::Onion)));

        assert_eq!(app.selected_crop(), Some(Crop::Onion));
        assert_eq!(app.warning(), Some("notification-config-save-error"));
    }

    #[test]
    fn view_renders_with_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("settings.toml"), "[picker\n").expect("write");
        let app = app_in(dir.path(), Flags::default());
        let _ = app.view();
    }
}
