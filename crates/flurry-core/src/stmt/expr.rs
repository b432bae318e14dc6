use super::*;

/// A node in a portable expression tree.
///
/// Trees are read-only during SQL generation; rendering is a structural fold
/// that produces SQL text and an ordered parameter list.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Aggregate function call
    Aggregate(ExprAggregate),

    /// AND a set of boolean expressions
    And(ExprAnd),

    /// Comparison
    BinaryOp(ExprBinaryOp),

    /// Cast an expression to the storage type of a field kind
    Cast(ExprCast),

    /// Apply a collation to a string expression
    Collate(ExprCollate),

    /// References a column
    Column(ExprColumn),

    /// Arithmetic or bitwise combination of two expressions
    Combine(ExprCombine),

    /// Cast a timestamp to its date or time component
    DateCast(ExprDateCast),

    /// Tests whether a subquery returns any rows
    Exists(ExprExists),

    /// Extract a component of a date or timestamp
    Extract(ExprExtract),

    /// Scalar function call
    Func(ExprFunc),

    /// Tests whether JSON keys are present
    HasKey(ExprHasKey),

    /// In list
    InList(ExprInList),

    /// The expression is contained by the given subquery
    InSubquery(ExprInSubquery),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// Navigate into a JSON value
    JsonKey(ExprJsonKey),

    /// Negate a boolean expression
    Not(ExprNot),

    /// OR a set of boolean expressions
    Or(ExprOr),

    /// Checks if an expression matches a LIKE pattern.
    Pattern(ExprPattern),

    /// Evaluates to a tuple
    Record(ExprRecord),

    /// Checks if an expression matches a regular expression.
    Regex(ExprRegex),

    /// Evaluate a scalar subquery
    Stmt(ExprStmt),

    /// Difference between two temporal values, in microseconds
    TemporalSub(ExprTemporalSub),

    /// Truncate a date or timestamp
    Trunc(ExprTrunc),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Name of the node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Aggregate(_) => "Aggregate",
            Self::And(_) => "And",
            Self::BinaryOp(_) => "BinaryOp",
            Self::Cast(_) => "Cast",
            Self::Collate(_) => "Collate",
            Self::Column(_) => "Column",
            Self::Combine(_) => "Combine",
            Self::DateCast(_) => "DateCast",
            Self::Exists(_) => "Exists",
            Self::Extract(_) => "Extract",
            Self::Func(_) => "Func",
            Self::HasKey(_) => "HasKey",
            Self::InList(_) => "InList",
            Self::InSubquery(_) => "InSubquery",
            Self::IsNull(_) => "IsNull",
            Self::JsonKey(_) => "JsonKey",
            Self::Not(_) => "Not",
            Self::Or(_) => "Or",
            Self::Pattern(_) => "Pattern",
            Self::Record(_) => "Record",
            Self::Regex(_) => "Regex",
            Self::Stmt(_) => "Stmt",
            Self::TemporalSub(_) => "TemporalSub",
            Self::Trunc(_) => "Trunc",
            Self::Value(_) => "Value",
        }
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::null()
    }
}

macro_rules! impl_from_value {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Expr {
                fn from(value: $t) -> Self {
                    Self::Value(value.into())
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
