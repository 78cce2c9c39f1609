// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system. Translation files are embedded from
//! `assets/i18n/` and the active locale is resolved from the CLI, the config
//! file, then the operating system.
//!
//! Crop names are catalogue identifiers and are not translated.

pub mod fluent;
