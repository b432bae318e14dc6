use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprRecord {
    pub fields: Vec<Expr>,
}

impl Expr {
    pub fn record(fields: impl IntoIterator<Item = impl Into<Self>>) -> Self {
        ExprRecord {
            fields: fields.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprRecord> for Expr {
    fn from(value: ExprRecord) -> Self {
        Self::Record(value)
    }
}
