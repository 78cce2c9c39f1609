// SPDX-License-Identifier: MPL-2.0
//! Embedded image assets.
//!
//! Crop icons are SVG files under `assets/crops/`, embedded into the binary
//! at compile time via `rust-embed`. An icon that is referenced but missing
//! from the folder shows up in the `every_crop_asset_is_embedded` test rather
//! than at runtime.
//!
//! SVG handles are created once on first access and reused thereafter.

use crate::error::{Error, Result};
use iced::widget::svg::Handle;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/crops/"]
struct CropAssets;

/// Opaque reference to an embedded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetRef {
    file: &'static str,
}

impl AssetRef {
    pub(crate) const fn crop(file: &'static str) -> Self {
        Self { file }
    }

    /// File name inside the crop asset folder.
    #[must_use]
    pub fn file(self) -> &'static str {
        self.file
    }

    /// Path relative to the repository's `assets/` directory.
    #[must_use]
    pub fn path(self) -> String {
        format!("crops/{}", self.file)
    }

    /// Raw SVG bytes.
    pub fn bytes(self) -> Result<Cow<'static, [u8]>> {
        CropAssets::get(self.file)
            .map(|embedded| embedded.data)
            .ok_or_else(|| Error::Asset(self.path()))
    }

    /// Cached SVG handle for rendering.
    ///
    /// A missing asset renders as an empty image and is logged once per
    /// lookup.
    #[must_use]
    pub fn handle(self) -> Handle {
        static HANDLES: OnceLock<HashMap<String, Handle>> = OnceLock::new();
        let handles = HANDLES.get_or_init(|| {
            CropAssets::iter()
                .filter_map(|file| {
                    let data = CropAssets::get(&file)?.data;
                    Some((file.into_owned(), Handle::from_memory(data)))
                })
                .collect()
        });

        match handles.get(self.file) {
            Some(handle) => handle.clone(),
            None => {
                tracing::warn!(asset = %self.path(), "missing embedded asset");
                Handle::from_memory(Vec::<u8>::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::Crop;

    #[test]
    fn every_crop_asset_is_embedded() {
        for crop in Crop::ALL {
            let bytes = crop
                .asset()
                .bytes()
                .unwrap_or_else(|err| panic!("{crop}: {err}"));
            assert!(!bytes.is_empty(), "{crop} icon is empty");
        }
    }

    #[test]
    fn crop_assets_are_svg_documents() {
        for crop in Crop::ALL {
            let bytes = crop.asset().bytes().expect("asset should be embedded");
            let text = String::from_utf8_lossy(&bytes);
            assert!(text.contains("<svg"), "{crop} icon is not an SVG");
        }
    }

    #[test]
    fn missing_asset_reports_its_path() {
        let missing = AssetRef::crop("durian.svg");
        assert_eq!(
            missing.bytes(),
            Err(Error::Asset("crops/durian.svg".to_string()))
        );
    }

    #[test]
    fn handles_are_cached() {
        let first = Crop::Corn.asset().handle();
        let second = Crop::Corn.asset().handle();
        assert_eq!(first.id(), second.id());
    }
}
