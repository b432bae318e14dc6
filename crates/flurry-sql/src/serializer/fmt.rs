use super::Formatter;

use flurry_core::Result;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f)?;
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()>;
}

impl ToSql for &str {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl ToSql for i64 {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(&self.to_string());
        Ok(())
    }
}

impl ToSql for usize {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(&self.to_string());
        Ok(())
    }
}

/// A literal `%` in SQL text. Doubled when the client interpolates
/// parameters.
pub(super) struct Percent;

impl ToSql for Percent {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        if f.escapes_percent() {
            f.dst.push_str("%%");
        } else {
            f.dst.push('%');
        }
        Ok(())
    }
}

/// Text that may contain `%` characters, written verbatim apart from percent
/// escaping.
pub(super) struct Raw<'a>(pub(super) &'a str);

impl ToSql for Raw<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.push_escaped(self.0);
        Ok(())
    }
}

/// A single-quoted string literal.
pub(super) struct Literal<'a>(pub(super) &'a str);

impl ToSql for Literal<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push('\'');
        f.push_escaped(&self.0.replace('\'', "''"));
        f.dst.push('\'');
        Ok(())
    }
}
