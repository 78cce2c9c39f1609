// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: they
//! render from the state they are given and report user intent as messages.
//!
//! # Components
//!
//! - [`crop_icon`] - Icon of a crop with its textual description
//! - [`join_item`] - One option of an exclusive-selection group
//! - [`selection`] - Selected value per group
//! - [`picker`] - Crop picker screen
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, icons, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod crop_icon;
pub mod design_tokens;
pub mod join_item;
pub mod picker;
pub mod selection;
pub mod styles;
pub mod theming;
