use super::{Db, PooledConnection};
use crate::Result;

use flurry_core::{
    driver::{Rows, Transaction as TransactionOp},
    stmt::Statement,
};

/// A transaction holding one leased connection.
///
/// The warehouse has a single level of transactions; nesting is not
/// supported.
///
/// The connection returns to the pool only after a successful `COMMIT` or
/// `ROLLBACK`. Dropping the transaction in any other state, including when
/// the surrounding future is cancelled, closes the connection.
#[derive(Debug)]
pub struct Transaction<'a> {
    db: &'a Db,
    connection: PooledConnection,
}

impl<'a> Transaction<'a> {
    pub(super) async fn begin(db: &'a Db) -> Result<Transaction<'a>> {
        let mut tx = Transaction {
            db,
            connection: db.pool().acquire().await?,
        };

        tx.connection.set_reusable(false);
        tx.control(TransactionOp::Begin).await?;
        Ok(tx)
    }

    /// Execute a statement inside the transaction.
    pub async fn exec(&mut self, stmt: &Statement) -> Result<Rows> {
        let plan = self.db.plan(stmt)?;
        plan.run(&mut self.connection).await
    }

    /// Commit. On failure the session state is unknown and the connection
    /// is discarded when `self` drops.
    pub(super) async fn commit(mut self) -> Result<()> {
        self.control(TransactionOp::Commit).await?;
        self.connection.set_reusable(true);
        Ok(())
    }

    /// Roll back, logging failures. The caller already has an error to
    /// report.
    pub(super) async fn rollback(mut self) {
        if let Err(err) = self.connection.cancel() {
            tracing::warn!(%err, "failed to cancel statement");
        }

        match self.control(TransactionOp::Rollback).await {
            Ok(()) => self.connection.set_reusable(true),
            Err(err) => tracing::warn!(%err, "failed to roll back transaction"),
        }
    }

    async fn control(&mut self, op: TransactionOp) -> Result<()> {
        let sql = self.db.serializer().serialize_transaction(&op)?;
        tracing::trace!(%sql, "transaction control");
        self.connection.execute(&sql, &[]).await?;
        Ok(())
    }
}
