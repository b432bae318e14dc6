use super::{Connect, Db, Pool, PoolConfig, Shared};
use crate::{Dialect, Result};

use flurry_core::driver::{ConnectParams, Driver};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Overrides the dialect derived from the driver's capability.
    dialect: Option<Dialect>,

    pool_config: PoolConfig,
}

impl Builder {
    pub fn dialect(&mut self, dialect: Dialect) -> &mut Self {
        self.dialect = Some(dialect);
        self
    }

    pub fn pool_config(&mut self, pool_config: PoolConfig) -> &mut Self {
        self.pool_config = pool_config;
        self
    }

    /// Connect using parameters parsed from a `snowflake://` URL.
    pub fn connect(&mut self, driver: impl Driver, url: &str) -> Result<Db> {
        let params = Connect::new(url)?.into_params();
        self.build(driver, params)
    }

    pub fn build(&mut self, driver: impl Driver, params: ConnectParams) -> Result<Db> {
        let dialect = match self.dialect.take() {
            Some(dialect) => dialect,
            None => Dialect::snowflake().with_capability(driver.capability().clone()),
        };

        let pool = Pool::new(driver, params, self.pool_config.clone())?;

        Ok(Db {
            shared: Arc::new(Shared { dialect, pool }),
        })
    }
}
