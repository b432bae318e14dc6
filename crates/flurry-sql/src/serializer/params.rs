use super::{Formatter, ToSql};

use flurry_core::{driver::ParamStyle, stmt, Result};

/// Collects the values bound to a statement, in placeholder order.
pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// A bind marker. Holds the 1-based position of the parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match f.serializer.dialect.capability().param_style {
            ParamStyle::Format => f.dst.push_str("%s"),
            ParamStyle::Qmark => f.dst.push('?'),
            ParamStyle::Numeric => {
                f.dst.push(':');
                f.dst.push_str(&self.0.to_string());
            }
        }
        Ok(())
    }
}
