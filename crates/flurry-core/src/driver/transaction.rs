/// Transaction control operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Start a transaction
    Begin,

    /// Commit the current transaction
    Commit,

    /// Roll back the current transaction
    Rollback,

    /// Create a savepoint with the given identifier
    Savepoint(usize),

    /// Release a savepoint
    ReleaseSavepoint(usize),

    /// Roll back to a savepoint
    RollbackToSavepoint(usize),
}

impl Transaction {
    pub fn is_savepoint(&self) -> bool {
        matches!(
            self,
            Self::Savepoint(_) | Self::ReleaseSavepoint(_) | Self::RollbackToSavepoint(_)
        )
    }
}
