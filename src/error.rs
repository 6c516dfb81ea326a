// SPDX-License-Identifier: MPL-2.0
use crate::application::port::StoreError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Store(StoreError),
}

impl Error {
    /// Returns the i18n key shown to the user for this error.
    ///
    /// Remote failures all collapse onto the same generic message; the
    /// detail only goes to the log.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) | Error::Store(_) => "error-occurred",
            Error::Config(_) => "notification-config-load-error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Store(e) => write!(f, "Store Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::Store(err)
    }
}

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
    fn store_error_wraps_and_formats() {
        let err: Error = StoreError::Status {
            code: 401,
            message: "invalid api key".into(),
        }
        .into();
        assert!(matches!(err, Error::Store(_)));
        assert!(format!("{}", err).contains("401"));
    }

    #[test]
    fn remote_failures_share_the_generic_message() {
        assert_eq!(Error::Store(StoreError::EmptyResponse).i18n_key(), "error-occurred");
        assert_eq!(Error::Io("gone".into()).i18n_key(), "error-occurred");
    }
}
