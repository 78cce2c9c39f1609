// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Picker**: Crop icon size bounds
//! - **Selection**: Group name shared by the crop options

// ==========================================================================
// Picker Defaults
// ==========================================================================

/// Default edge length of a crop icon in the picker row, in logical pixels.
pub const DEFAULT_ICON_SIZE: f32 = 48.0;

/// Smallest icon size accepted from the config file.
pub const MIN_ICON_SIZE: f32 = 24.0;

/// Largest icon size accepted from the config file.
pub const MAX_ICON_SIZE: f32 = 128.0;

/// Scale factor of the preview icon relative to the picker icons.
pub const PREVIEW_SCALE: f32 = 2.0;

// ==========================================================================
// Selection Defaults
// ==========================================================================

/// Exclusive-selection group the crop options belong to.
pub const CROP_GROUP: &str = "crop";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ICON_SIZE > 0.0);
    assert!(MAX_ICON_SIZE > MIN_ICON_SIZE);
    assert!(DEFAULT_ICON_SIZE >= MIN_ICON_SIZE);
    assert!(DEFAULT_ICON_SIZE <= MAX_ICON_SIZE);
    assert!(PREVIEW_SCALE >= 1.0);
    assert!(!CROP_GROUP.is_empty());
};
