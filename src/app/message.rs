// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::crop::Crop;
use crate::ui::picker;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Picker(picker::Message),
    /// Hide the warning banner.
    DismissWarning,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GADANTIC_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Crop to select on startup, overriding the saved selection.
    pub crop: Option<Crop>,
}
