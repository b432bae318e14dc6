mod builder;
mod connect;
mod pool;
mod transaction;

pub use builder::Builder;
pub use connect::*;
pub use pool::*;
pub use transaction::Transaction;

use crate::{BoxFuture, Dialect, Result};

use flurry_core::{
    driver::{ConnectParams, Driver, Rows},
    stmt::{self, Statement},
    Error,
};
use flurry_sql::{Compiled, Serializer};

use std::sync::Arc;

/// Shared state between all `Db` clones.
#[derive(Debug)]
struct Shared {
    dialect: Dialect,
    pool: Pool,
}

/// A database handle: compiles statements for the warehouse dialect and runs
/// them on pooled connections.
///
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates a handle with the default pool configuration and a dialect
    /// built from the driver's capability.
    pub fn new(driver: impl Driver, params: ConnectParams) -> Result<Db> {
        Db::builder().build(driver, params)
    }

    /// Like [`Db::new`], with parameters parsed from a `snowflake://` URL.
    pub fn connect(driver: impl Driver, url: &str) -> Result<Db> {
        Db::builder().connect(driver, url)
    }

    /// Execute a statement on a leased connection and fetch all rows.
    ///
    /// Inserts may run as several statements; their rows are concatenated.
    pub async fn exec(&self, stmt: &Statement) -> Result<Rows> {
        let plan = self.plan(stmt)?;
        self.shared
            .pool
            .scoped(move |connection| Box::pin(plan.run(connection)))
            .await
    }

    /// Insert rows, returning the requested columns of the inserted rows.
    pub async fn insert(&self, insert: &stmt::Insert) -> Result<Rows> {
        let plan = self.plan_insert(insert)?;
        self.shared
            .pool
            .scoped(move |connection| Box::pin(plan.run(connection)))
            .await
    }

    /// Run `f` inside a transaction on a single connection.
    ///
    /// The transaction commits when `f` succeeds and rolls back when it fails.
    /// A connection whose `COMMIT` fails, or whose transaction is abandoned
    /// by dropping the returned future, is closed rather than pooled.
    pub async fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: for<'t> FnOnce(&'t mut Transaction<'_>) -> BoxFuture<'t, Result<T>>,
    {
        let mut tx = Transaction::begin(self).await?;

        match f(&mut tx).await {
            Ok(ret) => {
                tx.commit().await?;
                Ok(ret)
            }
            Err(err) => {
                tx.rollback().await;
                Err(err)
            }
        }
    }

    /// Returns `false` when the warehouse reports that the database does not
    /// exist.
    pub async fn database_exists(&self, name: &str) -> Result<bool> {
        let sql = self.serializer().serialize_describe_database(name)?;
        let mut connection = self.shared.pool.acquire().await?;

        match connection.execute(&sql, &[]).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_object_does_not_exist() => {
                tracing::debug!(database = name, "database does not exist");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Empty the given tables. Identity sequences restart only when
    /// `reset_sequences` is set.
    pub async fn flush(&self, tables: &[&str], reset_sequences: bool) -> Result<()> {
        let statements = self
            .serializer()
            .serialize_flush(tables, reset_sequences)?
            .into_iter()
            .map(|sql| Compiled {
                sql,
                params: vec![],
            })
            .collect();

        let plan = Plan {
            statements,
            last_insert_id: None,
        };

        self.shared
            .pool
            .scoped(move |connection| Box::pin(plan.run(connection)))
            .await?;

        Ok(())
    }

    pub fn dialect(&self) -> &Dialect {
        &self.shared.dialect
    }

    pub fn pool(&self) -> &Pool {
        &self.shared.pool
    }

    /// Close all idle connections.
    pub fn shutdown(&self) {
        self.shared.pool.shutdown();
    }

    fn serializer(&self) -> Serializer<'_> {
        Serializer::new(&self.shared.dialect)
    }

    fn plan(&self, stmt: &Statement) -> Result<Plan> {
        match stmt {
            Statement::Insert(insert) => self.plan_insert(insert),
            Statement::Query(_) => Ok(Plan {
                statements: self.serializer().serialize(stmt)?,
                last_insert_id: None,
            }),
        }
    }

    fn plan_insert(&self, insert: &stmt::Insert) -> Result<Plan> {
        let statements = self.serializer().serialize_insert(insert)?;
        let capability = self.shared.dialect.capability();

        // Without RETURNING support the generated key is read back after each
        // single-row statement.
        let last_insert_id =
            if insert.returning.is_empty() || capability.can_return_columns_from_insert {
                None
            } else {
                let Some(pk) = insert.primary_key.as_deref() else {
                    return Err(Error::invalid_statement(
                        "returning generated keys requires the primary key column",
                    ));
                };

                if insert.returning.iter().any(|column| column != pk) {
                    return Err(Error::unsupported_feature(
                        "returning columns other than the primary key from an insert",
                    ));
                }

                Some(LastInsertId {
                    sql: self.serializer().serialize_last_insert_id(&insert.table, pk)?,
                    column: pk.to_string(),
                })
            };

        Ok(Plan {
            statements,
            last_insert_id,
        })
    }
}

/// Compiled statements ready to run on one connection.
struct Plan {
    statements: Vec<Compiled>,
    last_insert_id: Option<LastInsertId>,
}

struct LastInsertId {
    sql: String,
    column: String,
}

impl Plan {
    async fn run(self, connection: &mut PooledConnection) -> Result<Rows> {
        let mut ret = Rows::default();

        for compiled in &self.statements {
            tracing::trace!(
                sql = %compiled.sql,
                params = compiled.params.len(),
                "executing statement"
            );

            let rows = connection.execute(&compiled.sql, &compiled.params).await?;

            match &self.last_insert_id {
                Some(last_insert_id) => {
                    let rows = connection.execute(&last_insert_id.sql, &[]).await?;
                    ret.extend(Rows::new(vec![last_insert_id.column.clone()], rows.rows));
                }
                None => ret.extend(rows),
            }
        }

        Ok(ret)
    }
}
