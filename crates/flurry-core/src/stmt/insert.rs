use super::*;
use crate::schema::Field;

/// Inserts rows into a table.
///
/// Every row holds one value per entry of `fields`, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table
    pub table: String,

    /// The table's primary key column. Required when `fields` is empty, in
    /// which case every row asks for the primary key's default.
    pub primary_key: Option<String>,

    pub fields: Vec<Field>,

    pub rows: Vec<Vec<InsertValue>>,

    /// Columns returned for the inserted rows.
    pub returning: Vec<String>,

    pub on_conflict: OnConflict,
}

/// A single value in an insert row.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertValue {
    /// Bound as a parameter
    Value(Value),

    /// Rendered inline
    Expr(Expr),

    /// Let the database supply the column's default.
    Default,
}

/// What to do when an inserted row conflicts with an existing one.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum OnConflict {
    /// Fail the statement
    #[default]
    None,

    /// Skip the conflicting row
    Ignore,

    /// Update the existing row
    Update {
        update_fields: Vec<String>,
        unique_fields: Vec<String>,
    },
}

impl Insert {
    pub fn new(table: impl Into<String>, fields: Vec<Field>) -> Insert {
        Insert {
            table: table.into(),
            primary_key: None,
            fields,
            rows: vec![],
            returning: vec![],
            on_conflict: OnConflict::None,
        }
    }

    pub fn primary_key(mut self, name: impl Into<String>) -> Insert {
        self.primary_key = Some(name.into());
        self
    }

    pub fn row(mut self, row: impl IntoIterator<Item = impl Into<InsertValue>>) -> Insert {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    pub fn returning(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Insert {
        self.returning = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn on_conflict(mut self, on_conflict: OnConflict) -> Insert {
        self.on_conflict = on_conflict;
        self
    }
}

impl InsertValue {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl From<Expr> for InsertValue {
    fn from(value: Expr) -> Self {
        InsertValue::Expr(value)
    }
}

macro_rules! impl_from_value {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for InsertValue {
                fn from(value: $t) -> Self {
                    InsertValue::Value(value.into())
                }
            }
        )+
    };
}

impl_from_value!(
    Value,
    bool,
    i32,
    i64,
    f64,
    String,
    &String,
    &str,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::TimeDelta,
    uuid::Uuid,
    serde_json::Value
);

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
