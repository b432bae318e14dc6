use super::*;

/// Navigate into a semi-structured value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprJsonKey {
    pub expr: Box<Expr>,

    pub path: JsonPath,

    /// Project the value at `path` as text instead of JSON.
    pub as_text: bool,
}

/// Tests whether one or more keys are present in a semi-structured value.
///
/// A key holding JSON `null` is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprHasKey {
    /// The value being tested. When this is itself a [`ExprJsonKey`], the
    /// keys are resolved relative to its path.
    pub expr: Box<Expr>,

    pub keys: Vec<JsonPath>,

    /// How the tests for multiple keys are combined.
    pub connector: KeyConnector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyConnector {
    And,
    Or,
}

impl Expr {
    pub fn json_key(expr: impl Into<Self>, path: impl Into<JsonPath>) -> Self {
        ExprJsonKey {
            expr: Box::new(expr.into()),
            path: path.into(),
            as_text: false,
        }
        .into()
    }

    pub fn json_key_text(expr: impl Into<Self>, path: impl Into<JsonPath>) -> Self {
        ExprJsonKey {
            expr: Box::new(expr.into()),
            path: path.into(),
            as_text: true,
        }
        .into()
    }

    pub fn has_key(expr: impl Into<Self>, key: impl Into<JsonPath>) -> Self {
        ExprHasKey {
            expr: Box::new(expr.into()),
            keys: vec![key.into()],
            connector: KeyConnector::And,
        }
        .into()
    }

    pub fn has_keys(expr: impl Into<Self>, keys: impl IntoIterator<Item = impl Into<JsonPath>>) -> Self {
        ExprHasKey {
            expr: Box::new(expr.into()),
            keys: keys.into_iter().map(Into::into).collect(),
            connector: KeyConnector::And,
        }
        .into()
    }

    pub fn has_any_keys(
        expr: impl Into<Self>,
        keys: impl IntoIterator<Item = impl Into<JsonPath>>,
    ) -> Self {
        ExprHasKey {
            expr: Box::new(expr.into()),
            keys: keys.into_iter().map(Into::into).collect(),
            connector: KeyConnector::Or,
        }
        .into()
    }
}

impl From<ExprJsonKey> for Expr {
    fn from(value: ExprJsonKey) -> Self {
        Self::JsonKey(value)
    }
}

impl From<ExprHasKey> for Expr {
    fn from(value: ExprHasKey) -> Self {
        Self::HasKey(value)
    }
}
