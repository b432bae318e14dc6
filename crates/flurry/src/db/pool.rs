//! Connection pooling for warehouse sessions.

use crate::{BoxFuture, Result};

use flurry_core::{
    driver::{Capability, ConnectParams, Connection, Driver},
    Error,
};

use parking_lot::Mutex;
use tokio::time::Instant;

use std::{
    collections::VecDeque,
    ops::{Deref, DerefMut},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Weak,
    },
    time::Duration,
};

/// Configuration for connection pool behavior.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of idle connections kept for reuse.
    pub max_size: usize,

    /// How long a connection may be used after it was opened.
    pub max_lifetime: Duration,
}

impl PoolConfig {
    /// Creates a new pool configuration with default settings.
    pub fn new() -> Self {
        Self {
            max_size: 100,
            max_lifetime: Duration::from_secs(60 * 60),
        }
    }

    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn max_lifetime(mut self, max_lifetime: Duration) -> Self {
        self.max_lifetime = max_lifetime;
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A pool of warehouse sessions.
///
/// Acquiring never waits for capacity: when no idle connection is available a
/// new one is opened. The bound applies when connections come back; a
/// connection released into a full pool is closed. Expiry is checked lazily,
/// on acquire and on release.
#[derive(Clone)]
pub struct Pool {
    inner: Arc<Inner>,
}

struct Inner {
    driver: Box<dyn Driver>,
    params: ConnectParams,
    config: PoolConfig,
    idle: Mutex<VecDeque<Idle>>,

    /// Set by `shutdown`; released connections are closed from then on.
    closed: AtomicBool,
}

struct Idle {
    connection: Box<dyn Connection>,
    expires_at: Instant,
}

impl Pool {
    /// Creates a new connection pool.
    ///
    /// The connection parameters are checked here, before any connection is
    /// attempted. No connection is opened until the first `acquire`.
    pub fn new(driver: impl Driver, params: ConnectParams, config: PoolConfig) -> Result<Pool> {
        params.validate()?;

        if config.max_size == 0 {
            return Err(Error::invalid_configuration(
                "pool `max_size` must be at least 1",
            ));
        }

        Ok(Pool {
            inner: Arc::new(Inner {
                driver: Box::new(driver),
                params,
                config,
                idle: Mutex::new(VecDeque::new()),
                closed: AtomicBool::new(false),
            }),
        })
    }

    /// Retrieves a connection from the pool, opening a new one if no
    /// unexpired idle connection is available.
    pub async fn acquire(&self) -> Result<PooledConnection> {
        let now = Instant::now();

        loop {
            let idle = self.inner.idle.lock().pop_front();

            let Some(idle) = idle else {
                break;
            };

            if idle.expires_at > now {
                return Ok(self.lease(idle.connection, idle.expires_at));
            }

            tracing::debug!("closing expired idle connection");
            close_quietly(idle.connection);
        }

        let connection = self.inner.driver.connect(&self.inner.params).await?;
        tracing::debug!(
            account = self.inner.params.account.as_deref(),
            "opened new connection"
        );

        Ok(self.lease(connection, now + self.inner.config.max_lifetime))
    }

    /// Runs `f` with a leased connection.
    ///
    /// The connection goes back to the pool once `f` completes. When `f`
    /// fails, the statement active on the connection is cancelled first. If
    /// the returned future is dropped before `f` completes, the connection
    /// is discarded instead.
    pub async fn scoped<T, F>(&self, f: F) -> Result<T>
    where
        F: for<'c> FnOnce(&'c mut PooledConnection) -> BoxFuture<'c, Result<T>>,
    {
        let mut connection = self.acquire().await?;

        connection.set_reusable(false);
        let ret = f(&mut connection).await;
        connection.set_reusable(true);

        if ret.is_err() {
            connection.cancel_quietly();
        }

        ret
    }

    /// Closes every idle connection. Connections still leased are closed
    /// when they are released.
    pub fn shutdown(&self) {
        let drained = {
            let mut idle = self.inner.idle.lock();
            self.inner.closed.store(true, Ordering::Release);
            std::mem::take(&mut *idle)
        };
        tracing::debug!(connections = drained.len(), "shutting down pool");

        for idle in drained {
            close_quietly(idle.connection);
        }
    }

    /// Number of connections waiting in the pool.
    pub fn idle_count(&self) -> usize {
        self.inner.idle.lock().len()
    }

    pub fn config(&self) -> &PoolConfig {
        &self.inner.config
    }

    /// Returns the database driver's capabilities.
    pub fn capability(&self) -> &Capability {
        self.inner.driver.capability()
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.inner.driver
    }

    fn lease(&self, connection: Box<dyn Connection>, expires_at: Instant) -> PooledConnection {
        PooledConnection {
            connection: Some(connection),
            expires_at,
            reusable: true,
            pool: Arc::downgrade(&self.inner),
        }
    }
}

impl Inner {
    fn release(&self, connection: Box<dyn Connection>, expires_at: Instant) {
        if Instant::now() >= expires_at {
            tracing::debug!("released connection has expired; closing");
            close_quietly(connection);
            return;
        }

        // `shutdown` sets `closed` while holding the idle lock.
        let rejected = {
            let mut idle = self.idle.lock();

            if self.closed.load(Ordering::Acquire) {
                Some((connection, "pool is shut down; closing released connection"))
            } else if idle.len() >= self.config.max_size {
                Some((connection, "pool is full; closing connection"))
            } else {
                idle.push_back(Idle {
                    connection,
                    expires_at,
                });
                None
            }
        };

        if let Some((connection, reason)) = rejected {
            tracing::debug!(max_size = self.config.max_size, "{reason}");
            close_quietly(connection);
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        for idle in self.idle.get_mut().drain(..) {
            close_quietly(idle.connection);
        }
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("driver", &self.inner.driver)
            .field("config", &self.inner.config)
            .field("idle", &self.idle_count())
            .finish()
    }
}

/// A connection leased from a pool.
///
/// When dropped, the connection is returned to the pool it came from, or
/// closed if it expired, the pool is full or the pool is gone.
pub struct PooledConnection {
    // Present until dropped.
    connection: Option<Box<dyn Connection>>,
    expires_at: Instant,

    /// Cleared while the session holds state the next lessee must not see,
    /// such as an open transaction.
    reusable: bool,
    pool: Weak<Inner>,
}

impl PooledConnection {
    /// When the connection stops being reused.
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Mark whether the connection may go back to the pool when dropped.
    /// A connection dropped while not reusable is cancelled and closed.
    pub(crate) fn set_reusable(&mut self, reusable: bool) {
        self.reusable = reusable;
    }

    fn cancel_quietly(&mut self) {
        if let Err(err) = self.cancel() {
            tracing::warn!(%err, "failed to cancel statement");
        }
    }
}

impl Deref for PooledConnection {
    type Target = dyn Connection;

    fn deref(&self) -> &Self::Target {
        match &self.connection {
            Some(connection) => &**connection,
            None => unreachable!("connection used after release"),
        }
    }
}

impl DerefMut for PooledConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.connection {
            Some(connection) => &mut **connection,
            None => unreachable!("connection used after release"),
        }
    }
}

impl Drop for PooledConnection {
    fn drop(&mut self) {
        let Some(mut connection) = self.connection.take() else {
            return;
        };

        if !self.reusable {
            tracing::debug!("connection dropped mid-operation; discarding");
            if let Err(err) = connection.cancel() {
                tracing::warn!(%err, "failed to cancel statement");
            }
            close_quietly(connection);
            return;
        }

        match self.pool.upgrade() {
            Some(pool) => pool.release(connection, self.expires_at),
            None => close_quietly(connection),
        }
    }
}

impl std::fmt::Debug for PooledConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledConnection")
            .field("connection", &self.connection)
            .field("expires_at", &self.expires_at)
            .field("reusable", &self.reusable)
            .finish()
    }
}

/// Close a connection that is being discarded. Failures are logged and
/// otherwise ignored.
fn close_quietly(mut connection: Box<dyn Connection>) {
    if let Err(err) = connection.close() {
        tracing::warn!(%err, "failed to close connection");
    }
}
