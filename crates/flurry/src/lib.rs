pub mod db;
pub use db::{Connect, Db, Pool, PoolConfig, PooledConnection, Transaction};

pub use flurry_core::{driver, schema, stmt, Error, Result};
pub use flurry_sql::{Dialect, ExplainFormat};

/// A boxed future borrowing from its caller for `'a`.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;
