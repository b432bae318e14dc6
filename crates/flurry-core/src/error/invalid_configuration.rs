use super::Error;

/// Error when connection settings are missing or malformed.
///
/// Raised before any connection attempt is made and never retried.
#[derive(Debug)]
pub(super) struct InvalidConfiguration {
    message: Box<str>,
}

impl std::error::Error for InvalidConfiguration {}

impl core::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfiguration(
            InvalidConfiguration {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidConfiguration(_)))
    }
}
