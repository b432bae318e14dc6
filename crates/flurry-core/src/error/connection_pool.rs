use super::Error;

/// Error from the connection pool.
#[derive(Debug)]
pub(super) struct ConnectionPoolError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionPoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectionPoolError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "connection pool: {}", self.inner)
    }
}

impl Error {
    /// Creates an error from a connection pool failure.
    pub fn connection_pool(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
        Error::from(super::ErrorKind::ConnectionPool(ConnectionPoolError {
            inner: err.into(),
        }))
    }

    /// Returns `true` if this error is a connection pool error.
    pub fn is_connection_pool(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ConnectionPool(_)))
    }
}
