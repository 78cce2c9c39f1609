// SPDX-License-Identifier: MPL-2.0
//! `gadantic_ui` is the crop picker of the Gadantic garden planner, built with
//! the Iced GUI framework.
//!
//! It provides a closed crop catalogue with embedded icons, a reusable
//! exclusive-selection option widget, Fluent-based internationalization and
//! persisted user preferences.

pub mod app;
pub mod assets;
pub mod config;
pub mod crop;
pub mod error;
pub mod i18n;
pub mod ui;
