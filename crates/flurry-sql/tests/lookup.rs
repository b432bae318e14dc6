use flurry_core::{
    driver::{Capability, ParamStyle},
    stmt::{Expr, Lookup, Value},
};
use flurry_sql::{Dialect, Serializer};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

const LOOKUPS: [Lookup; 7] = [
    Lookup::IExact,
    Lookup::Contains,
    Lookup::IContains,
    Lookup::StartsWith,
    Lookup::IStartsWith,
    Lookup::EndsWith,
    Lookup::IEndsWith,
];

fn render_with(dialect: &Dialect, expr: Expr) -> (String, Vec<Value>) {
    let mut params = Vec::<Value>::new();
    let sql = assert_ok!(Serializer::new(dialect).serialize_expr(&expr, &mut params));
    (sql, params)
}

fn render(expr: Expr) -> (String, Vec<Value>) {
    render_with(&Dialect::snowflake(), expr)
}

#[test]
fn istartswith_with_apostrophe() {
    let expr = Expr::pattern(Lookup::IStartsWith, Expr::column("name"), "O'Brien");

    let (sql, params) = render(expr.clone());
    assert_eq!(sql, r#""NAME" ILIKE %s || '%%' ESCAPE '\\'"#);
    assert_eq!(params, vec![Value::from("O'Brien")]);

    let qmark = Dialect::snowflake().with_capability(Capability {
        param_style: ParamStyle::Qmark,
        ..Capability::SNOWFLAKE
    });

    let (sql, params) = render_with(&qmark, expr);
    assert_eq!(sql, r#""NAME" ILIKE ? || '%' ESCAPE '\\'"#);
    assert_eq!(params, vec![Value::from("O'Brien")]);
}

#[test]
fn wildcards_in_needle_are_escaped() {
    let (sql, params) = render(Expr::contains(Expr::column("name"), "50%_off"));
    assert_eq!(sql, r#""NAME" LIKE '%%' || %s || '%%' ESCAPE '\\'"#);
    assert_eq!(params, vec![Value::from(r"50\%\_off")]);
}

#[test]
fn wildcard_placement() {
    let cases = [
        (Lookup::IExact, r#""NAME" ILIKE %s ESCAPE '\\'"#),
        (Lookup::StartsWith, r#""NAME" LIKE %s || '%%' ESCAPE '\\'"#),
        (Lookup::EndsWith, r#""NAME" LIKE '%%' || %s ESCAPE '\\'"#),
        (Lookup::IEndsWith, r#""NAME" ILIKE '%%' || %s ESCAPE '\\'"#),
        (Lookup::IContains, r#""NAME" ILIKE '%%' || %s || '%%' ESCAPE '\\'"#),
    ];

    for (lookup, expected) in cases {
        let (sql, _) = render(Expr::pattern(lookup, Expr::column("name"), "x"));
        assert_eq!(sql, expected, "lookup={lookup:?}");
    }
}

#[test]
fn every_lookup_has_one_escape_clause() {
    for lookup in LOOKUPS {
        for rhs in [Expr::from("a%b"), Expr::column("other")] {
            let (sql, params) = render(Expr::pattern(lookup, Expr::column("name"), rhs));

            assert_eq!(sql.matches(" ESCAPE ").count(), 1, "{sql}");
            assert!(sql.ends_with(r" ESCAPE '\\'"), "{sql}");

            // Wildcards never end up inside the bound needle.
            for param in &params {
                assert_eq!(param, &Value::from(r"a\%b"));
            }
        }
    }
}

#[test]
fn dynamic_needle_is_escaped_server_side() {
    let (sql, params) = render(Expr::contains(
        Expr::column("name"),
        Expr::column("nickname"),
    ));
    assert_eq!(
        sql,
        r#""NAME" LIKE '%%' || REPLACE(REPLACE(REPLACE("NICKNAME", '\\', '\\\\'), '%%', '\\%%'), '_', '\\_') || '%%' ESCAPE '\\'"#
    );
    assert_empty!(params);
}

#[test]
fn null_needle_is_rejected() {
    let dialect = Dialect::snowflake();
    let mut params = Vec::<Value>::new();
    let expr = Expr::starts_with(Expr::column("name"), Expr::null());

    let err = assert_err!(Serializer::new(&dialect).serialize_expr(&expr, &mut params));
    assert!(err.is_invalid_statement());
}
