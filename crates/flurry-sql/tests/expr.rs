use chrono::TimeDelta;
use flurry_core::{
    driver::{Capability, ParamStyle},
    schema::FieldKind,
    stmt::{
        AggregateKind, Connector, DatePart, Direction, Expr, FuncKind, JsonPath, Query,
        TemporalKind, TruncKind, Value,
    },
};
use flurry_sql::{Dialect, Serializer};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn render_with(dialect: &Dialect, expr: impl Into<Expr>) -> (String, Vec<Value>) {
    let mut params = Vec::<Value>::new();
    let sql = assert_ok!(Serializer::new(dialect).serialize_expr(&expr.into(), &mut params));
    (sql, params)
}

fn render(expr: impl Into<Expr>) -> (String, Vec<Value>) {
    render_with(&Dialect::snowflake(), expr)
}

fn sql(expr: impl Into<Expr>) -> String {
    render(expr).0
}

fn qmark() -> Dialect {
    Dialect::snowflake().with_capability(Capability {
        param_style: ParamStyle::Qmark,
        ..Capability::SNOWFLAKE
    })
}

#[test]
fn concat_coalesces_operands() {
    assert_eq!(
        sql(Expr::concat(Expr::column("first_name"), Expr::column("last_name"))),
        r#"CONCAT(COALESCE("FIRST_NAME", ''), COALESCE("LAST_NAME", ''))"#
    );
}

#[test]
fn str_index_swaps_arguments() {
    let (sql, params) = render(Expr::str_index(Expr::column("title"), "bar"));
    assert_eq!(sql, r#"POSITION(%s, "TITLE")"#);
    assert_eq!(params, vec![Value::from("bar")]);
}

#[test]
fn registered_functions() {
    assert_eq!(
        sql(Expr::func(FuncKind::Sha256, [Expr::column("name")])),
        r#"SHA2("NAME", 256)"#
    );
    assert_eq!(
        sql(Expr::func(FuncKind::Sha512, [Expr::column("name")])),
        r#"SHA2("NAME", 512)"#
    );
    assert_eq!(
        sql(Expr::func(FuncKind::Random, Vec::<Expr>::new())),
        "UNIFORM(0, 0.99999999999999999, RANDOM())"
    );
    assert_eq!(
        sql(Expr::func(FuncKind::CurrentTimestamp, Vec::<Expr>::new())),
        "CURRENT_TIMESTAMP()"
    );
    assert_eq!(
        sql(Expr::func(FuncKind::Ceil, [Expr::column("price")])),
        r#"CEIL("PRICE")"#
    );
    assert_eq!(
        sql(Expr::collate(Expr::column("name"), "en-ci")),
        r#"COLLATE("NAME", 'en-ci')"#
    );
}

#[test]
fn unregistered_function_is_unsupported() {
    let dialect = Dialect::snowflake();
    let mut params = Vec::<Value>::new();
    let expr = Expr::func(FuncKind::JsonObject, [Expr::from("key"), Expr::column("value")]);

    let err = assert_err!(Serializer::new(&dialect).serialize_expr(&expr, &mut params));
    assert!(err.is_unsupported_feature());
    assert_eq!(err.to_string(), "unsupported feature: function JsonObject");
}

#[test]
fn function_arity_is_checked() {
    let dialect = Dialect::snowflake();
    let mut params = Vec::<Value>::new();
    let expr = Expr::func(FuncKind::StrIndex, [Expr::column("title")]);

    let err = assert_err!(Serializer::new(&dialect).serialize_expr(&expr, &mut params));
    assert!(err.is_invalid_statement());
}

#[test]
fn bitwise_connectors_are_functions() {
    let (sql, params) = render(Expr::combine(Expr::column("flags"), Connector::BitAnd, 4i64));
    assert_eq!(sql, r#"BITAND("FLAGS", %s)"#);
    assert_eq!(params, vec![Value::I64(4)]);

    let cases = [
        (Connector::BitOr, "BITOR"),
        (Connector::BitXor, "BITXOR"),
        (Connector::BitLeftShift, "BITSHIFTLEFT"),
        (Connector::BitRightShift, "BITSHIFTRIGHT"),
        (Connector::Pow, "POWER"),
    ];

    for (connector, name) in cases {
        assert_eq!(
            crate::sql(Expr::combine(Expr::column("a"), connector, Expr::column("b"))),
            format!(r#"{name}("A", "B")"#)
        );
    }
}

#[test]
fn arithmetic_is_infix() {
    assert_eq!(
        sql(Expr::combine(Expr::column("a"), Connector::Add, Expr::column("b"))),
        r#"("A" + "B")"#
    );
    assert_eq!(
        sql(Expr::combine(Expr::column("a"), Connector::Mod, Expr::column("b"))),
        r#"("A" %% "B")"#
    );
    assert_eq!(
        render_with(
            &qmark(),
            Expr::combine(Expr::column("a"), Connector::Mod, Expr::column("b"))
        )
        .0,
        r#"("A" % "B")"#
    );
}

#[test]
fn duration_operands_are_intervals() {
    let (sql, params) = render(Expr::combine(
        Expr::column("start"),
        Connector::Add,
        TimeDelta::milliseconds(1500),
    ));
    assert_eq!(sql, r#"("START" + INTERVAL '1500000 MICROSECONDS')"#);
    assert_empty!(params);
}

#[test]
fn extract_renumbers_week_day() {
    assert_eq!(
        sql(Expr::extract(DatePart::WeekDay, Expr::column("created"))),
        r#"EXTRACT('dow', "CREATED") + 1"#
    );
    assert_eq!(
        sql(Expr::extract(DatePart::IsoWeekDay, Expr::column("created"))),
        r#"EXTRACT('dow_iso', "CREATED")"#
    );
    assert_eq!(
        sql(Expr::extract(DatePart::IsoYear, Expr::column("created"))),
        r#"EXTRACT('yearofweekiso', "CREATED")"#
    );
}

#[test]
fn extract_binds_part_name() {
    let (sql, params) = render(Expr::extract(DatePart::Month, Expr::column("created")));
    assert_eq!(sql, r#"EXTRACT(%s, "CREATED")"#);
    assert_eq!(params, vec![Value::from("month")]);
}

#[test]
fn extract_converts_time_zone() {
    let expr = Expr::extract_in_tz(DatePart::Year, Expr::column("created"), "Europe/Paris");

    let (sql, params) = render(expr.clone());
    assert_eq!(
        sql,
        r#"EXTRACT(%s, CONVERT_TIMEZONE(%s, TO_TIMESTAMP("CREATED")))"#
    );
    assert_eq!(params, vec![Value::from("year"), Value::from("Europe/Paris")]);

    // Without time zone support the conversion is skipped.
    let (sql, params) = render_with(&Dialect::snowflake().use_tz(false), expr);
    assert_eq!(sql, r#"EXTRACT(%s, "CREATED")"#);
    assert_eq!(params, vec![Value::from("year")]);
}

#[test]
fn trunc() {
    let (sql, params) = render(Expr::trunc(
        TruncKind::Month,
        Expr::column("created"),
        TemporalKind::Date,
    ));
    assert_eq!(sql, r#"DATE_TRUNC(%s, "CREATED")"#);
    assert_eq!(params, vec![Value::from("month")]);

    assert_eq!(
        crate::sql(Expr::trunc(TruncKind::Hour, Expr::column("at"), TemporalKind::Time)),
        r#"DATE_TRUNC(%s, "AT")::time"#
    );
}

#[test]
fn date_cast() {
    assert_eq!(
        sql(Expr::cast_date(Expr::column("created"), None)),
        r#"("CREATED")::date"#
    );

    let (sql, params) = render(Expr::cast_time(
        Expr::column("created"),
        Some("UTC".to_string()),
    ));
    assert_eq!(
        sql,
        r#"(CONVERT_TIMEZONE(%s, TO_TIMESTAMP("CREATED")))::time"#
    );
    assert_eq!(params, vec![Value::from("UTC")]);
}

#[test]
fn temporal_subtraction() {
    assert_eq!(
        sql(Expr::temporal_sub(
            Expr::column("end"),
            Expr::column("start"),
            TemporalKind::DateTime
        )),
        r#"TIMEDIFF(MICROSECOND, "START", "END")"#
    );

    let (sql, params) = render(Expr::temporal_sub(
        Expr::column("end"),
        "09:00:00",
        TemporalKind::Time,
    ));
    assert_eq!(sql, r#"TIMEDIFF(MICROSECOND, TO_TIME(%s), "END")"#);
    assert_eq!(params, vec![Value::from("09:00:00")]);
}

#[test]
fn json_key_transforms() {
    assert_eq!(
        sql(Expr::json_key(
            Expr::column("data"),
            JsonPath::new().key("owner").index(0)
        )),
        r#"TO_JSON("DATA":"owner"[0])"#
    );
    assert_eq!(
        sql(Expr::json_key_text(Expr::column("data"), "name")),
        r#""DATA":"name"::VARCHAR"#
    );

    // Nested transforms share a single path.
    assert_eq!(
        sql(Expr::json_key_text(
            Expr::json_key(Expr::column("data"), "a"),
            "b"
        )),
        r#""DATA":"a"."b"::VARCHAR"#
    );
}

#[test]
fn json_path_percent_is_doubled_for_format_params() {
    let expr = Expr::json_key(Expr::column("data"), "100%");
    assert_eq!(sql(expr.clone()), r#"TO_JSON("DATA":"100%%")"#);
    assert_eq!(render_with(&qmark(), expr).0, r#"TO_JSON("DATA":"100%")"#);
}

#[test]
fn has_key() {
    assert_eq!(
        sql(Expr::has_key(Expr::column("data"), "a")),
        r#"IS_NULL_VALUE("DATA":"a") IS NOT NULL"#
    );
    assert_eq!(
        sql(Expr::has_keys(Expr::column("data"), ["a", "b"])),
        r#"(IS_NULL_VALUE("DATA":"a") IS NOT NULL AND IS_NULL_VALUE("DATA":"b") IS NOT NULL)"#
    );
    assert_eq!(
        sql(Expr::has_any_keys(Expr::column("data"), ["a", "b"])),
        r#"(IS_NULL_VALUE("DATA":"a") IS NOT NULL OR IS_NULL_VALUE("DATA":"b") IS NOT NULL)"#
    );
}

#[test]
fn has_key_below_key_transform() {
    assert_eq!(
        sql(Expr::has_key(
            Expr::json_key(Expr::column("data"), "owner"),
            "name"
        )),
        r#"IS_NULL_VALUE("DATA":"owner"."name") IS NOT NULL"#
    );
    assert_eq!(
        sql(Expr::has_key(
            Expr::column("data"),
            JsonPath::new().key("owner").index(1)
        )),
        r#"IS_NULL_VALUE("DATA":"owner"[1]) IS NOT NULL"#
    );
}

#[test]
fn exists_strips_limit_but_keeps_order() {
    let query = Query::new("book")
        .filter(Expr::eq(
            Expr::qualified_column("book", "author_id"),
            Expr::qualified_column("author", "id"),
        ))
        .order_by(Expr::column("title"), Direction::Asc)
        .limit(1);

    assert_eq!(
        sql(Expr::exists(query.clone())),
        r#"EXISTS(SELECT * FROM "BOOK" WHERE "BOOK"."AUTHOR_ID" = "AUTHOR"."ID" ORDER BY "TITLE" ASC)"#
    );
    assert_eq!(
        sql(Expr::not_exists(query)),
        r#"NOT EXISTS(SELECT * FROM "BOOK" WHERE "BOOK"."AUTHOR_ID" = "AUTHOR"."ID" ORDER BY "TITLE" ASC)"#
    );
}

#[test]
fn aggregates() {
    assert_eq!(sql(Expr::count_star()), "COUNT(*)");
    assert_eq!(
        sql(Expr::aggregate(AggregateKind::Count, [Expr::column("x")]).distinct()),
        r#"COUNT(DISTINCT "X")"#
    );
    assert_eq!(
        sql(Expr::aggregate(AggregateKind::StdDevSamp, [Expr::column("x")])),
        r#"STDDEV_SAMP("X")"#
    );

    let (sql, params) = render(Expr::string_agg(Expr::column("name"), ", "));
    assert_eq!(sql, r#"LISTAGG("NAME", %s)"#);
    assert_eq!(params, vec![Value::from(", ")]);
}

#[test]
fn filtered_aggregates_use_case() {
    let (sql, params) = render(
        Expr::aggregate(AggregateKind::Count, Vec::<Expr>::new())
            .filter(Expr::eq(Expr::column("active"), true)),
    );
    assert_eq!(sql, r#"COUNT(CASE WHEN "ACTIVE" = %s THEN 1 END)"#);
    assert_eq!(params, vec![Value::Bool(true)]);

    assert_eq!(
        crate::sql(
            Expr::aggregate(AggregateKind::Sum, [Expr::column("amount")])
                .filter(Expr::is_not_null(Expr::column("paid_at")))
        ),
        r#"SUM(CASE WHEN "PAID_AT" IS NOT NULL THEN "AMOUNT" END)"#
    );
}

#[test]
fn casts() {
    assert_eq!(
        sql(Expr::cast(Expr::column("id"), FieldKind::BigAuto)),
        r#"CAST("ID" AS NUMBER)"#
    );
    assert_eq!(
        sql(Expr::cast(Expr::column("n"), FieldKind::Char)),
        r#"CAST("N" AS varchar)"#
    );
}

#[test]
fn regex_uses_match_flag() {
    let (sql, params) = render(Expr::regex(Expr::column("name"), "^a.*"));
    assert_eq!(sql, r#"REGEXP_LIKE("NAME", %s, 'c')"#);
    assert_eq!(params, vec![Value::from("^a.*")]);

    assert_eq!(
        crate::sql(Expr::iregex(Expr::column("name"), "^a.*")),
        r#"REGEXP_LIKE("NAME", %s, 'i')"#
    );
}

#[test]
fn boolean_composition() {
    let expr = Expr::and(
        Expr::eq(Expr::column("a"), 1i64),
        Expr::or(
            Expr::is_null(Expr::column("b")),
            Expr::in_list(Expr::column("c"), [2i64, 3i64]),
        ),
    );

    let (sql, params) = render(expr);
    assert_eq!(sql, r#""A" = %s AND ("B" IS NULL OR "C" IN (%s, %s))"#);
    assert_eq!(params, vec![Value::I64(1), Value::I64(2), Value::I64(3)]);

    assert_eq!(
        crate::sql(Expr::not(Expr::eq(Expr::column("a"), 1i64))),
        r#"NOT ("A" = %s)"#
    );
}

#[test]
fn json_values_are_parsed_server_side() {
    let (sql, params) = render(Expr::eq(
        Expr::column("data"),
        serde_json::json!({ "k": 1 }),
    ));
    assert_eq!(sql, r#""DATA" = PARSE_JSON(%s)"#);
    assert_eq!(params, vec![Value::from(r#"{"k":1}"#)]);
}

#[test]
fn comparison_with_null_is_rejected() {
    let dialect = Dialect::snowflake();
    let mut params = Vec::<Value>::new();
    let expr = Expr::eq(Expr::column("a"), Expr::null());

    let err = assert_err!(Serializer::new(&dialect).serialize_expr(&expr, &mut params));
    assert!(err.is_invalid_statement());
}

#[test]
fn numeric_placeholders_are_numbered() {
    let dialect = Dialect::snowflake().with_capability(Capability {
        param_style: ParamStyle::Numeric,
        ..Capability::SNOWFLAKE
    });

    let (sql, _) = render_with(
        &dialect,
        Expr::and(
            Expr::eq(Expr::column("a"), 1i64),
            Expr::eq(Expr::column("b"), 2i64),
        ),
    );
    assert_eq!(sql, r#""A" = :1 AND "B" = :2"#);
}
