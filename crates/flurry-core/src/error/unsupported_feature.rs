use super::Error;

/// Error when the warehouse dialect cannot express a construct.
///
/// This occurs when:
/// - An expression node, function or aggregate has no renderer registered
/// - A field kind has no native storage type
/// - A statement asks for something the dialect lacks (row locks, savepoints,
///   conflict handling)
///
/// Nothing is rendered partially: the whole compilation fails.
#[derive(Debug)]
pub(super) struct UnsupportedFeature {
    message: Box<str>,
}

impl std::error::Error for UnsupportedFeature {}

impl core::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported feature: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported feature error.
    pub fn unsupported_feature(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFeature(UnsupportedFeature {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported feature error.
    pub fn is_unsupported_feature(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedFeature(_)))
    }
}
