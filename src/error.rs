// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// An embedded asset could not be found in the bundle.
    Asset(String),
    /// Selection group names must contain at least one non-blank character.
    InvalidGroupName(String),
    /// The identifier does not name any crop in the catalogue.
    UnknownCrop(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Asset(path) => write!(f, "Asset Error: missing embedded asset {}", path),
            Error::InvalidGroupName(name) => write!(f, "Invalid group name: {:?}", name),
            Error::UnknownCrop(id) => write!(f, "Unknown crop: {}", id),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_failure_becomes_config_error() {
        let parsed: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn asset_error_names_the_path() {
        let err = Error::Asset("crops/tomato.svg".into());
        assert!(format!("{}", err).contains("crops/tomato.svg"));
    }

    #[test]
    fn invalid_group_name_is_quoted() {
        let err = Error::InvalidGroupName("  ".into());
        assert_eq!(format!("{}", err), "Invalid group name: \"  \"");
    }

    #[test]
    fn unknown_crop_display() {
        let err = Error::UnknownCrop("durian".into());
        assert_eq!(format!("{}", err), "Unknown crop: durian");
    }
}
