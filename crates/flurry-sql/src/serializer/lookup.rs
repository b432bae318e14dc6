use super::{Formatter, Percent, Raw, ToSql};

use flurry_core::{stmt, Error, Result};

/// `lhs [I]LIKE ['%' ||] needle [|| '%'] ESCAPE '\\'`
///
/// The wildcards are concatenated around the needle so that wildcard
/// characters in the needle itself are matched literally.
pub(super) fn pattern(expr: &stmt::ExprPattern, f: &mut Formatter<'_>) -> Result<()> {
    let Some(op) = f.dialect().lookup(expr.lookup) else {
        return Err(Error::unsupported_feature(format!(
            "lookup {}",
            expr.lookup.name()
        )));
    };

    let escape = f.dialect().capability().like_escape;

    fmt!(f, expr.expr " " op " ");

    if expr.lookup.leading_wildcard() {
        fmt!(f, "'" Percent "' || ");
    }

    match &*expr.rhs {
        stmt::Expr::Value(stmt::Value::String(needle)) => {
            f.bind(&stmt::Value::String(escape_like(needle, escape)))?;
        }
        stmt::Expr::Value(stmt::Value::Null) => {
            return Err(Error::invalid_statement(format!(
                "{} lookup against NULL",
                expr.lookup.name()
            )));
        }
        rhs => EscapedExpr { expr: rhs, escape }.to_sql(f)?,
    }

    if expr.lookup.trailing_wildcard() {
        fmt!(f, " || '" Percent "'");
    }

    fmt!(f, " ESCAPE " EscapeChar(escape));
    Ok(())
}

/// `REGEXP_LIKE(lhs, pattern, 'c' | 'i')`
pub(super) fn regex(expr: &stmt::ExprRegex, f: &mut Formatter<'_>) -> Result<()> {
    let flags = if expr.case_insensitive { "'i'" } else { "'c'" };
    fmt!(f, "REGEXP_LIKE(" expr.expr ", " expr.pattern ", " flags ")");
    Ok(())
}

/// Escape the escape character, `%` and `_` in that order.
pub(super) fn escape_like(value: &str, escape: char) -> String {
    let mut ret = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == escape || ch == '%' || ch == '_' {
            ret.push(escape);
        }
        ret.push(ch);
    }
    ret
}

/// The escape character as a string literal.
struct EscapeChar(char);

impl ToSql for EscapeChar {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, "'" Raw(&escape_literal(self.0, 1)) "'");
        Ok(())
    }
}

/// A dynamic needle with its wildcard characters escaped server side.
struct EscapedExpr<'a> {
    expr: &'a stmt::Expr,
    escape: char,
}

impl ToSql for EscapedExpr<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let once = escape_literal(self.escape, 1);
        let twice = escape_literal(self.escape, 2);

        fmt!(
            f,
            "REPLACE(REPLACE(REPLACE(" self.expr ", '" Raw(&once) "', '" Raw(&twice) "'), '"
            Percent "', '" Raw(&once) Percent "'), '_', '" Raw(&once) "_')"
        );
        Ok(())
    }
}

/// `count` copies of the escape character, written as the body of a string
/// literal. Backslashes and quotes are themselves escaped.
fn escape_literal(escape: char, count: usize) -> String {
    let one = match escape {
        '\\' => "\\\\".to_string(),
        '\'' => "''".to_string(),
        ch => ch.to_string(),
    };
    one.repeat(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_handles_all_wildcards() {
        assert_eq!(escape_like(r"50%_off\", '\\'), r"50\%\_off\\");
    }

    #[test]
    fn escape_like_escapes_escape_first() {
        // A pre-existing escape sequence is not mistaken for an escaped
        // wildcard.
        assert_eq!(escape_like(r"\%", '\\'), r"\\\%");
    }

    #[test]
    fn apostrophes_are_untouched() {
        assert_eq!(escape_like("O'Brien", '\\'), "O'Brien");
    }

    #[test]
    fn custom_escape_character() {
        assert_eq!(escape_like("a!b%", '!'), "a!!b!%");
    }
}
