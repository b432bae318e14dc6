#![allow(dead_code)]

use flurry::{
    driver::{Capability, ConnectParams, Connection, Driver, Rows},
    stmt::{Value, ValueRecord},
    Error, Result,
};

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

type Respond = dyn Fn(&str) -> Result<Rows> + Send + Sync;

/// An in-memory driver recording everything its connections do.
#[derive(Clone)]
pub struct MockDriver {
    capability: Capability,
    log: Arc<Mutex<Log>>,
    respond: Arc<Respond>,
    fail_connect: bool,
    fail_close: bool,
}

#[derive(Debug, Default, Clone)]
pub struct Log {
    pub connects: usize,
    pub closes: usize,
    pub cancels: usize,

    /// SQL and parameters, in execution order.
    pub executed: Vec<(String, Vec<Value>)>,
}

struct MockConnection {
    id: usize,
    log: Arc<Mutex<Log>>,
    respond: Arc<Respond>,
    fail_close: bool,
}

/// Error returned by a mock connection.
#[derive(Debug)]
pub struct MockError(pub String);

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for MockError {}

/// Route pool and compiler events to the test output. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn params() -> ConnectParams {
    ConnectParams::new()
        .account("xy12345")
        .user("loader")
        .password("hunter2")
        .warehouse("COMPUTE_WH")
        .schema("PUBLIC")
}

pub fn driver_error(message: &str) -> Error {
    Error::driver(MockError(message.to_string()))
}

/// A single-row, single-column result.
pub fn scalar(column: &str, value: impl Into<Value>) -> Rows {
    Rows::new(
        vec![column.to_string()],
        vec![ValueRecord::from_vec(vec![value.into()])],
    )
}

impl MockDriver {
    pub fn new() -> MockDriver {
        MockDriver {
            capability: Capability::SNOWFLAKE,
            log: Arc::default(),
            respond: Arc::new(|_: &str| Ok(Rows::default())),
            fail_connect: false,
            fail_close: false,
        }
    }

    pub fn with_capability(mut self, capability: Capability) -> MockDriver {
        self.capability = capability;
        self
    }

    /// Answer every executed statement with `respond`.
    pub fn respond(mut self, respond: impl Fn(&str) -> Result<Rows> + Send + Sync + 'static) -> MockDriver {
        self.respond = Arc::new(respond);
        self
    }

    pub fn fail_connect(mut self) -> MockDriver {
        self.fail_connect = true;
        self
    }

    pub fn fail_close(mut self) -> MockDriver {
        self.fail_close = true;
        self
    }

    /// A snapshot of what happened so far.
    pub fn log(&self) -> Log {
        self.log.lock().unwrap().clone()
    }

    pub fn executed_sql(&self) -> Vec<String> {
        self.log().executed.into_iter().map(|(sql, _)| sql).collect()
    }
}

impl std::fmt::Debug for MockDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockDriver").finish_non_exhaustive()
    }
}

#[async_trait]
impl Driver for MockDriver {
    fn capability(&self) -> &Capability {
        &self.capability
    }

    async fn connect(&self, params: &ConnectParams) -> Result<Box<dyn Connection>> {
        assert_ok_params(params);

        if self.fail_connect {
            return Err(driver_error("250001: Could not connect to Snowflake backend"));
        }

        let mut log = self.log.lock().unwrap();
        log.connects += 1;

        Ok(Box::new(MockConnection {
            id: log.connects,
            log: self.log.clone(),
            respond: self.respond.clone(),
            fail_close: self.fail_close,
        }))
    }
}

fn assert_ok_params(params: &ConnectParams) {
    assert!(params.validate().is_ok(), "connected with invalid params");
}

impl std::fmt::Debug for MockConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockConnection").field("id", &self.id).finish()
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        self.log
            .lock()
            .unwrap()
            .executed
            .push((sql.to_string(), params.to_vec()));

        (self.respond)(sql)
    }

    fn cancel(&mut self) -> Result<()> {
        self.log.lock().unwrap().cancels += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.log.lock().unwrap().closes += 1;

        if self.fail_close {
            return Err(driver_error("390114: Authentication token has expired"));
        }

        Ok(())
    }
}
