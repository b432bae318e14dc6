use super::{Comma, Formatter, ToSql};

use flurry_core::{stmt, Error, Result};

impl ToSql for &stmt::Value {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Value::*;

        match self {
            Record(value) => {
                fmt!(f, "(" Comma(value.fields.iter()) ")");
            }
            List(values) => {
                fmt!(f, "(" Comma(values.iter()) ")");
            }
            Json(value) => {
                // There is no bind type for semi-structured values; bind the
                // text and parse it server side.
                let text = stmt::Value::String(value.to_string());
                fmt!(f, "PARSE_JSON(");
                f.bind(&text)?;
                fmt!(f, ")");
            }
            value => f.bind(&prepare(value)?)?,
        }

        Ok(())
    }
}

/// Converts a value to the representation it is bound with.
///
/// Durations are stored as a number of microseconds, UUIDs as 32 hex
/// digits without hyphens and semi-structured values as JSON text.
pub(super) fn prepare(value: &stmt::Value) -> Result<stmt::Value> {
    Ok(match value {
        stmt::Value::Duration(delta) => match delta.num_microseconds() {
            Some(micros) => stmt::Value::I64(micros),
            None => {
                return Err(Error::invalid_statement(format!(
                    "duration {delta} does not fit in microseconds"
                )))
            }
        },
        stmt::Value::Json(value) => stmt::Value::String(value.to_string()),
        stmt::Value::Uuid(uuid) => stmt::Value::String(uuid.simple().to_string()),
        value => value.clone(),
    })
}
