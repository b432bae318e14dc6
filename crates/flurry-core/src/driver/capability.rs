/// Describes what the warehouse's SQL dialect can and cannot do.
///
/// SQL generation consults these flags instead of branching on the database
/// vendor.
#[derive(Debug, Clone)]
pub struct Capability {
    /// When true, the database uses a SQL-based query language.
    pub sql: bool,

    /// Column storage types supported by the database
    pub storage_types: StorageTypes,

    /// SQL: Supports row-level locking (`SELECT ... FOR UPDATE`).
    pub select_for_update: bool,

    /// A single INSERT statement may carry many rows.
    pub has_bulk_insert: bool,

    /// The `DEFAULT` keyword may appear inside a multi-row `VALUES` list.
    pub supports_default_keyword_in_bulk_insert: bool,

    /// INSERT statements may return columns (`RETURNING`).
    pub can_return_columns_from_insert: bool,

    /// A bulk INSERT may return one row per inserted row.
    pub can_return_rows_from_bulk_insert: bool,

    /// `ON CONFLICT DO NOTHING` style inserts.
    pub supports_ignore_conflicts: bool,

    /// `ON CONFLICT ... DO UPDATE` style inserts.
    pub supports_update_conflicts: bool,

    /// Nested transactions through savepoints.
    pub supports_savepoints: bool,

    /// How bind markers are written in SQL text.
    pub param_style: ParamStyle,

    /// Escape character used in `LIKE ... ESCAPE` clauses.
    pub like_escape: char,

    /// Regular expressions match the whole string, as if wrapped in `^...$`.
    pub regex_implicitly_anchored: bool,
}

/// How positional bind markers are written in SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// `%s`. The client interpolates parameters, so literal `%` characters
    /// in the SQL text must be written as `%%`.
    Format,

    /// `?`
    Qmark,

    /// `:1`, `:2`, ...
    Numeric,
}

#[derive(Debug, Clone)]
pub struct StorageTypes {
    /// When `Some` the database supports varchar types with the specified upper
    /// limit.
    pub varchar: Option<u64>,
}

impl Capability {
    /// Snowflake capabilities.
    pub const SNOWFLAKE: Self = Self {
        sql: true,
        storage_types: StorageTypes::SNOWFLAKE,
        select_for_update: false,
        has_bulk_insert: true,
        // Bulk inserts go through `SELECT ... FROM VALUES` when a VARIANT
        // column is involved, and the DEFAULT keyword is not valid there.
        supports_default_keyword_in_bulk_insert: false,
        can_return_columns_from_insert: false,
        can_return_rows_from_bulk_insert: false,
        supports_ignore_conflicts: false,
        supports_update_conflicts: false,
        // A single level of transaction; nested BEGINs join the current one.
        supports_savepoints: false,
        param_style: ParamStyle::Format,
        like_escape: '\\',
        regex_implicitly_anchored: true,
    };

    /// Returns `true` if literal `%` characters must be doubled in SQL text.
    pub fn escapes_percent(&self) -> bool {
        self.param_style == ParamStyle::Format
    }
}

impl StorageTypes {
    pub const SNOWFLAKE: StorageTypes = StorageTypes {
        // VARCHAR without a length is VARCHAR(16777216), which is also the
        // largest length that can be declared.
        varchar: Some(16_777_216),
    };
}
