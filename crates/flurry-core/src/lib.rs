pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, IntoError};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses Flurry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
