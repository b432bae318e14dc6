use flurry_core::{
    driver::{Capability, Transaction},
    stmt::{Direction, Expr, Lock, Query, Statement, Value},
};
use flurry_sql::{parse_json_path, render_json_path, Dialect, ExplainFormat, Serializer};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn query(query: &Query) -> (String, Vec<Value>) {
    let dialect = Dialect::snowflake();
    let mut params = Vec::<Value>::new();
    let sql = assert_ok!(Serializer::new(&dialect).serialize_query(query, &mut params));
    (sql, params)
}

#[test]
fn select_with_all_clauses() {
    let (sql, params) = query(
        &Query::new("author")
            .select([Expr::column("id"), Expr::column("name")])
            .filter(Expr::gt(Expr::column("age"), 30i64))
            .order_by(Expr::column("name"), Direction::Desc)
            .limit(10)
            .offset(20),
    );

    assert_eq!(
        sql,
        r#"SELECT "ID", "NAME" FROM "AUTHOR" WHERE "AGE" > %s ORDER BY "NAME" DESC LIMIT 10 OFFSET 20"#
    );
    assert_eq!(params, vec![Value::I64(30)]);
}

#[test]
fn offset_without_limit() {
    assert_eq!(
        query(&Query::new("author").offset(5)).0,
        r#"SELECT * FROM "AUTHOR" LIMIT null OFFSET 5"#
    );
    assert_eq!(
        query(&Query::new("author").limit(5).offset(0)).0,
        r#"SELECT * FROM "AUTHOR" LIMIT 5"#
    );
}

#[test]
fn in_subquery() {
    let (sql, _) = query(&Query::new("book").filter(Expr::in_subquery(
        Expr::column("author_id"),
        Query::new("author")
            .select([Expr::column("id")])
            .filter(Expr::eq(Expr::column("active"), true)),
    )));

    assert_eq!(
        sql,
        r#"SELECT * FROM "BOOK" WHERE "AUTHOR_ID" IN (SELECT "ID" FROM "AUTHOR" WHERE "ACTIVE" = %s)"#
    );
}

#[test]
fn row_locks_are_unsupported() {
    let dialect = Dialect::snowflake();
    let mut params = Vec::<Value>::new();

    let err = assert_err!(Serializer::new(&dialect)
        .serialize_query(&Query::new("author").lock(Lock::Update), &mut params));
    assert!(err.is_unsupported_feature());

    let dialect = Dialect::snowflake().with_capability(Capability {
        select_for_update: true,
        ..Capability::SNOWFLAKE
    });
    let sql = assert_ok!(Serializer::new(&dialect)
        .serialize_query(&Query::new("author").lock(Lock::Share), &mut params));
    assert_eq!(sql, r#"SELECT * FROM "AUTHOR" FOR SHARE"#);
}

#[test]
fn serialize_query_statement() {
    let dialect = Dialect::snowflake();
    let stmt = Statement::from(Query::new("author").filter(Expr::eq(Expr::column("id"), 1i64)));

    let compiled = assert_ok!(Serializer::new(&dialect).serialize(&stmt));
    assert_eq!(compiled.len(), 1);
    assert_eq!(compiled[0].sql, r#"SELECT * FROM "AUTHOR" WHERE "ID" = %s"#);
    assert_eq!(compiled[0].params, vec![Value::I64(1)]);
}

#[test]
fn explain() {
    let dialect = Dialect::snowflake();
    let serializer = Serializer::new(&dialect);
    let mut params = Vec::<Value>::new();

    assert_eq!(
        assert_ok!(serializer.serialize_explain(
            &Query::new("author"),
            ExplainFormat::default(),
            &mut params
        )),
        r#"EXPLAIN USING TABULAR SELECT * FROM "AUTHOR""#
    );
    assert_eq!(
        assert_ok!(serializer.serialize_explain(
            &Query::new("author"),
            ExplainFormat::Json,
            &mut params
        )),
        r#"EXPLAIN USING JSON SELECT * FROM "AUTHOR""#
    );
}

#[test]
fn transactions() {
    let dialect = Dialect::snowflake();
    let serializer = Serializer::new(&dialect);

    assert_eq!(assert_ok!(serializer.serialize_transaction(&Transaction::Begin)), "BEGIN");
    assert_eq!(assert_ok!(serializer.serialize_transaction(&Transaction::Commit)), "COMMIT");
    assert_eq!(
        assert_ok!(serializer.serialize_transaction(&Transaction::Rollback)),
        "ROLLBACK"
    );

    let err = assert_err!(serializer.serialize_transaction(&Transaction::Savepoint(1)));
    assert!(err.is_unsupported_feature());
}

#[test]
fn savepoints_with_support() {
    let dialect = Dialect::snowflake().with_capability(Capability {
        supports_savepoints: true,
        ..Capability::SNOWFLAKE
    });
    let serializer = Serializer::new(&dialect);

    assert_eq!(
        assert_ok!(serializer.serialize_transaction(&Transaction::Savepoint(2))),
        "SAVEPOINT sp_2"
    );
    assert_eq!(
        assert_ok!(serializer.serialize_transaction(&Transaction::RollbackToSavepoint(2))),
        "ROLLBACK TO SAVEPOINT sp_2"
    );
}

#[test]
fn flush() {
    let dialect = Dialect::snowflake();
    let serializer = Serializer::new(&dialect);

    assert_eq!(
        assert_ok!(serializer.serialize_flush(&["author", "book"], true)),
        [r#"TRUNCATE "AUTHOR";"#, r#"TRUNCATE "BOOK";"#]
    );
    assert_eq!(
        assert_ok!(serializer.serialize_flush(&["author"], false)),
        [r#"DELETE FROM "AUTHOR";"#]
    );
}

#[test]
fn introspection() {
    let dialect = Dialect::snowflake();
    let serializer = Serializer::new(&dialect);

    assert_eq!(
        assert_ok!(serializer.serialize_last_insert_id("author", "id")),
        r#"SELECT MAX("ID") FROM "AUTHOR""#
    );
    assert_eq!(
        assert_ok!(serializer.serialize_describe_database("analytics")),
        r#"DESCRIBE DATABASE "ANALYTICS""#
    );
}

#[test]
fn json_path_round_trip() {
    for text in [r#":"a""#, r#":"a"."b"[3]"#, r#":"with \"quote\""[0]"#] {
        let path = assert_ok!(parse_json_path(text));
        assert_eq!(render_json_path(&path), text);
    }
}
