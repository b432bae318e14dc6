use super::Error;

/// Error from the underlying warehouse driver.
#[derive(Debug)]
pub(super) struct DriverError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver error.
    ///
    /// Driver errors are passed through unchanged; Flurry does not interpret
    /// warehouse error codes.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a driver error.
    pub fn is_driver(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Driver(_)))
    }

    /// Returns `true` if the warehouse reported that the object being
    /// addressed does not exist.
    ///
    /// Existence probes treat this as a negative answer rather than a failure.
    pub fn is_object_does_not_exist(&self) -> bool {
        self.any_kind(|kind| match kind {
            super::ErrorKind::Driver(err) => err.to_string().contains("does not exist"),
            _ => false,
        })
    }
}
