use super::Error;

/// Error when a statement is malformed.
///
/// This occurs when:
/// - An insert row does not have one value per field
/// - A row asks for a column's server-side default but the field has none
/// - A statement has incorrect structure or arguments
#[derive(Debug)]
pub(super) struct InvalidStatement {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl core::fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidStatement(_)))
    }
}
