use super::{Formatter, Raw, ToSql};

use flurry_core::{
    stmt::{self, JsonPath, KeyConnector, PathSegment},
    Error, Result,
};

/// Render a path in the warehouse's semi-structured path syntax.
///
/// The first key is introduced by `:` and the following ones by `.`; array
/// indices are written as `[n]`. Keys are double quoted with embedded quotes
/// escaped. Literal `%` characters are doubled when the path is written into
/// a statement whose parameters are interpolated by the client.
///
/// ```
/// # use flurry_core::stmt::JsonPath;
/// # use flurry_sql::render_json_path;
/// let path = JsonPath::new().key("owner").index(0).key("name");
/// assert_eq!(render_json_path(&path), r#":"owner"[0]."name""#);
/// ```
pub fn render_json_path(path: &JsonPath) -> String {
    let mut ret = String::new();

    for segment in &path.segments {
        match segment {
            PathSegment::Key(key) => {
                ret.push(if ret.is_empty() { ':' } else { '.' });
                ret.push('"');
                ret.push_str(&key.replace('"', "\\\""));
                ret.push('"');
            }
            PathSegment::Index(index) => {
                ret.push('[');
                ret.push_str(&index.to_string());
                ret.push(']');
            }
        }
    }

    ret
}

/// Parse a path produced by [`render_json_path`].
pub fn parse_json_path(src: &str) -> Result<JsonPath> {
    let mut segments = vec![];
    let mut chars = src.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            ':' | '.' => {
                let expected = if pos == 0 { ':' } else { '.' };
                if ch != expected {
                    return Err(Error::invalid_statement(format!(
                        "JSON path `{src}`: expected `{expected}` at offset {pos}"
                    )));
                }

                if !matches!(chars.next(), Some((_, '"'))) {
                    return Err(Error::invalid_statement(format!(
                        "JSON path `{src}`: key at offset {pos} is not quoted"
                    )));
                }

                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some((_, '\\')) if matches!(chars.peek(), Some((_, '"'))) => {
                            chars.next();
                            key.push('"');
                        }
                        Some((_, '"')) => break,
                        Some((_, ch)) => key.push(ch),
                        None => {
                            return Err(Error::invalid_statement(format!(
                                "JSON path `{src}`: unterminated key"
                            )))
                        }
                    }
                }

                segments.push(PathSegment::Key(key));
            }
            '[' => {
                let mut digits = String::new();
                loop {
                    match chars.next() {
                        Some((_, ']')) => break,
                        Some((_, ch)) => digits.push(ch),
                        None => {
                            return Err(Error::invalid_statement(format!(
                                "JSON path `{src}`: unterminated index"
                            )))
                        }
                    }
                }

                segments.push(PathSegment::Index(digits.parse()?));
            }
            ch => {
                return Err(Error::invalid_statement(format!(
                    "JSON path `{src}`: unexpected `{ch}` at offset {pos}"
                )))
            }
        }
    }

    Ok(JsonPath { segments })
}

/// Splits nested key transforms into the underlying value and the combined
/// path.
fn flatten<'a>(expr: &'a stmt::Expr, path: &JsonPath) -> (&'a stmt::Expr, JsonPath) {
    match expr {
        stmt::Expr::JsonKey(inner) if !inner.as_text => flatten(&inner.expr, &inner.path.join(path)),
        expr => (expr, path.clone()),
    }
}

pub(super) fn key_transform(expr: &stmt::ExprJsonKey, f: &mut Formatter<'_>) -> Result<()> {
    let (base, path) = flatten(&expr.expr, &expr.path);

    if path.is_empty() {
        return Err(Error::invalid_statement("JSON key transform with an empty path"));
    }

    let path = render_json_path(&path);

    if expr.as_text {
        fmt!(f, base Raw(&path) "::VARCHAR");
    } else {
        fmt!(f, "TO_JSON(" base Raw(&path) ")");
    }

    Ok(())
}

/// `IS_NULL_VALUE(value<path>) IS NOT NULL` for each key.
///
/// `IS_NULL_VALUE` is NULL only when the path is missing, so keys holding a
/// JSON null still count as present.
pub(super) fn has_key(expr: &stmt::ExprHasKey, f: &mut Formatter<'_>) -> Result<()> {
    let (base, lhs_path) = match &*expr.expr {
        stmt::Expr::JsonKey(lhs) if !lhs.as_text => flatten(&lhs.expr, &lhs.path),
        lhs => (lhs, JsonPath::new()),
    };

    if expr.keys.is_empty() {
        return Err(Error::invalid_statement("has_key lookup without keys"));
    }

    let connector = match expr.connector {
        KeyConnector::And => " AND ",
        KeyConnector::Or => " OR ",
    };

    let grouped = expr.keys.len() > 1;

    if grouped {
        fmt!(f, "(");
    }

    for (i, key) in expr.keys.iter().enumerate() {
        if key.is_empty() {
            return Err(Error::invalid_statement("has_key lookup with an empty key"));
        }

        if i > 0 {
            fmt!(f, connector);
        }

        let path = render_json_path(&lhs_path.join(key));
        fmt!(f, "IS_NULL_VALUE(" base Raw(&path) ") IS NOT NULL");
    }

    if grouped {
        fmt!(f, ")");
    }

    Ok(())
}
