// SPDX-License-Identifier: MPL-2.0
//! Crop catalogue.
//!
//! The set of crops is closed: every crop the planner knows about is a
//! variant of [`Crop`], and [`Crop::ALL`] lists them in display order.
//! Because the set is closed, lookups by crop never fail; only parsing a
//! crop from a textual identifier can.

use crate::assets::AssetRef;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Crop {
    // single-tile crops
    Tomato,
    Potato,
    NapaCabbage,
    Rice,
    Wheat,
    Corn,
    Carrot,
    Onion,
    BokChoy,
    Cotton,
    // 2x2 crops
    Blueberries,
    BatterflyBeans,
    SpicyPepper,
    RockhopperPumpkin,
    // 3x3 crops
    Apple,
}

impl Crop {
    /// Every crop, in the order they are displayed.
    pub const ALL: [Crop; 15] = [
        Crop::Tomato,
        Crop::Potato,
        Crop::NapaCabbage,
        Crop::Rice,
        Crop::Wheat,
        Crop::Corn,
        Crop::Carrot,
        Crop::Onion,
        Crop::BokChoy,
        Crop::Cotton,
        Crop::Blueberries,
        Crop::BatterflyBeans,
        Crop::SpicyPepper,
        Crop::RockhopperPumpkin,
        Crop::Apple,
    ];

    /// Human readable name, as shown next to the icon.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Crop::Tomato => "Tomato",
            Crop::Potato => "Potato",
            Crop::NapaCabbage => "Napa Cabbage",
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Corn => "Corn",
            Crop::Carrot => "Carrot",
            Crop::Onion => "Onion",
            Crop::BokChoy => "Bok Choy",
            Crop::Cotton => "Cotton",
            Crop::Blueberries => "Blueberries",
            Crop::BatterflyBeans => "Batterfly Beans",
            Crop::SpicyPepper => "Spicy Pepper",
            Crop::RockhopperPumpkin => "Rockhopper Pumpkin",
            Crop::Apple => "Apple",
        }
    }

    /// Stable identifier used in config files and on the command line.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Crop::Tomato => "tomato",
            Crop::Potato => "potato",
            Crop::NapaCabbage => "napa-cabbage",
            Crop::Rice => "rice",
            Crop::Wheat => "wheat",
            Crop::Corn => "corn",
            Crop::Carrot => "carrot",
            Crop::Onion => "onion",
            Crop::BokChoy => "bok-choy",
            Crop::Cotton => "cotton",
            Crop::Blueberries => "blueberries",
            Crop::BatterflyBeans => "batterfly-beans",
            Crop::SpicyPepper => "spicy-pepper",
            Crop::RockhopperPumpkin => "rockhopper-pumpkin",
            Crop::Apple => "apple",
        }
    }

    /// Icon bound to this crop.
    #[must_use]
    pub fn asset(self) -> AssetRef {
        let file = match self {
            Crop::Tomato => "tomato.svg",
            Crop::Potato => "potato.svg",
            Crop::NapaCabbage => "cabbage.svg",
            Crop::Rice => "rice.svg",
            Crop::Wheat => "wheat.svg",
            Crop::Corn => "corn.svg",
            Crop::Carrot => "carrot.svg",
            Crop::Onion => "onion.svg",
            Crop::BokChoy => "bok_choy.svg",
            Crop::Cotton => "cotton.svg",
            Crop::Blueberries => "blueberry.svg",
            Crop::BatterflyBeans => "beans.svg",
            Crop::SpicyPepper => "pepper.svg",
            Crop::RockhopperPumpkin => "pumpkin.svg",
            Crop::Apple => "apple.svg",
        };
        AssetRef::crop(file)
    }

    /// Side length, in tiles, of the square the crop occupies in a plot.
    #[must_use]
    pub fn size(self) -> u8 {
        match self {
            Crop::Blueberries
            | Crop::BatterflyBeans
            | Crop::SpicyPepper
            | Crop::RockhopperPumpkin => 2,
            Crop::Apple => 3,
            _ => 1,
        }
    }

    /// Number of tiles covered by one plant.
    #[must_use]
    pub fn tiles(self) -> u8 {
        self.size() * self.size()
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Crop {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Crop::ALL
            .into_iter()
            .find(|crop| crop.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCrop(s.to_string()))
    }
}
