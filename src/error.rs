// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No container is registered under the requested identifier.
    MissingContainer(String),
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingContainer(id) => {
                write!(f, "Missing notification container: {}", id)
            }
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
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
    fn display_names_missing_container() {
        let err = Error::MissingContainer("notify-container".to_string());
        assert_eq!(
            format!("{}", err),
            "Missing notification container: notify-container"
        );
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
    fn toml_parse_error_maps_to_config_variant() {
        let parse = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
