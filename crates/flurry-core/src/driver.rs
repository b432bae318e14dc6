mod capability;
pub use capability::{Capability, ParamStyle, StorageTypes};

mod connect_params;
pub use connect_params::ConnectParams;

mod rows;
pub use rows::Rows;

mod transaction;
pub use transaction::Transaction;

use crate::{async_trait, stmt::Value};

use std::fmt::Debug;

/// Opens sessions against the warehouse.
///
/// The transport, authentication and TLS are the driver's business; Flurry
/// only asks it for connections and does not retry failed connects.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the driver's capability, which informs SQL generation.
    fn capability(&self) -> &Capability;

    /// Open a new session using the given connection parameters.
    async fn connect(&self, params: &ConnectParams) -> crate::Result<Box<dyn Connection>>;
}

/// A live warehouse session.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a statement, binding `params` positionally, and fetch all rows.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> crate::Result<Rows>;

    /// Close the statement handle that is currently active on this session,
    /// if any.
    fn cancel(&mut self) -> crate::Result<()>;

    /// Close the session.
    fn close(&mut self) -> crate::Result<()>;
}
