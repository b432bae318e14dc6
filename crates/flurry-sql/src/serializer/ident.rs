use super::{Formatter, ToSql};

use flurry_core::Result;

/// A quoted identifier.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.push_escaped(&quote_name(self.0.as_ref()));
        Ok(())
    }
}

/// Quote an identifier.
///
/// Names are folded to upper case, which is how the warehouse stores
/// unquoted identifiers, and a `.` starts a new quoted segment so qualified
/// names can be passed whole. A name that is already quoted is returned
/// unchanged.
///
/// ```
/// # use flurry_sql::quote_name;
/// assert_eq!(quote_name("author"), r#""AUTHOR""#);
/// assert_eq!(quote_name("app.author"), r#""APP"."AUTHOR""#);
/// assert_eq!(quote_name(r#""Mixed""#), r#""Mixed""#);
/// ```
pub fn quote_name(name: &str) -> String {
    if is_quoted(name) {
        return name.to_string();
    }

    let mut ret = String::with_capacity(name.len() + 2);
    ret.push('"');
    for ch in name.chars() {
        match ch {
            '.' => ret.push_str("\".\""),
            '"' => ret.push_str("\"\""),
            ch => ret.extend(ch.to_uppercase()),
        }
    }
    ret.push('"');
    ret
}

fn is_quoted(name: &str) -> bool {
    name.len() >= 2 && name.starts_with('"') && name.ends_with('"')
}
