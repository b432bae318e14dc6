use super::Dialect;

use flurry_core::{
    schema::{Field, FieldKind},
    Error, Result,
};

const NUMBER: &str = "NUMBER(38, 0)";
const AUTO: &str = "NUMBER(38, 0) AUTOINCREMENT START 1 INCREMENT 1";

impl Dialect {
    /// The column type used to store a field.
    pub fn db_type(&self, field: &Field) -> Result<String> {
        let decimal = field.max_digits.zip(field.decimal_places);

        self.storage_type(&field.kind, field.max_length, decimal)
            .map_err(|err| err.context(Error::from_args(format_args!("field `{}`", field.name))))
    }

    /// The type an expression is cast to.
    ///
    /// Identity kinds cast to plain `NUMBER` and a character kind without a
    /// length casts to an unbounded `varchar`.
    pub fn cast_type(
        &self,
        kind: &FieldKind,
        max_length: Option<u64>,
        decimal: Option<(u32, u32)>,
    ) -> Result<String> {
        match kind {
            FieldKind::Auto | FieldKind::BigAuto | FieldKind::SmallAuto => Ok("NUMBER".to_string()),
            FieldKind::Char if max_length.is_none() => Ok("varchar".to_string()),
            kind => self.storage_type(kind, max_length, decimal),
        }
    }

    fn storage_type(
        &self,
        kind: &FieldKind,
        max_length: Option<u64>,
        decimal: Option<(u32, u32)>,
    ) -> Result<String> {
        use FieldKind::*;

        Ok(match kind {
            Auto | BigAuto | SmallAuto => AUTO.to_string(),
            Binary => "BINARY".to_string(),
            Boolean => "BOOLEAN".to_string(),
            Char | File | FilePath | Slug => self.varchar(kind, max_length)?,
            Date => "DATE".to_string(),
            DateTime => "TIMESTAMPNTZ".to_string(),
            Decimal => match decimal {
                Some((max_digits, decimal_places)) => {
                    format!("NUMBER({max_digits}, {decimal_places})")
                }
                None => {
                    return Err(Error::invalid_statement(
                        "DecimalField requires max_digits and decimal_places",
                    ))
                }
            },
            // Durations are stored as a number of microseconds.
            Duration => NUMBER.to_string(),
            BigInteger | Integer | PositiveBigInteger | PositiveInteger | PositiveSmallInteger
            | SmallInteger => NUMBER.to_string(),
            Float => "FLOAT".to_string(),
            GenericIpAddress => "VARCHAR(39)".to_string(),
            Json => "VARIANT".to_string(),
            Text => "VARCHAR".to_string(),
            Time => "TIME".to_string(),
            // Hex digits without hyphens
            Uuid => "VARCHAR(32)".to_string(),
            Other(name) => {
                return Err(Error::unsupported_feature(format!("field type {name}")))
            }
        })
    }

    fn varchar(&self, kind: &FieldKind, max_length: Option<u64>) -> Result<String> {
        let Some(max_length) = max_length else {
            return Err(Error::invalid_statement(format!(
                "{} requires max_length",
                kind.name()
            )));
        };

        match self.capability().storage_types.varchar {
            Some(limit) if max_length > limit => Err(Error::invalid_statement(format!(
                "max_length {max_length} exceeds the VARCHAR limit of {limit}"
            ))),
            None => Err(Error::unsupported_feature("VARCHAR columns")),
            _ => Ok(format!("VARCHAR({max_length})")),
        }
    }
}
