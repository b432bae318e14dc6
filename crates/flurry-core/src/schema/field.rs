use crate::stmt::Expr;

/// Describes a column as resolved from the application schema.
///
/// Descriptors are read-only to SQL generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Column name
    pub name: String,

    pub kind: FieldKind,

    pub nullable: bool,

    /// Maximum length for character kinds.
    pub max_length: Option<u64>,

    /// Total number of digits for decimal kinds.
    pub max_digits: Option<u32>,

    /// Digits after the decimal point for decimal kinds.
    pub decimal_places: Option<u32>,

    /// Expression the database evaluates when a row asks for the column's
    /// default.
    pub db_default: Option<Expr>,

    pub primary_key: bool,
}

/// Canonical field kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Auto,
    BigAuto,
    SmallAuto,
    BigInteger,
    Binary,
    Boolean,
    Char,
    Date,
    DateTime,
    Decimal,
    Duration,
    File,
    FilePath,
    Float,
    GenericIpAddress,
    Integer,
    Json,
    PositiveBigInteger,
    PositiveInteger,
    PositiveSmallInteger,
    Slug,
    SmallInteger,
    Text,
    Time,
    Uuid,

    /// A kind provided by the application that has no canonical mapping.
    Other(String),
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Field {
        Field {
            name: name.into(),
            kind,
            nullable: false,
            max_length: None,
            max_digits: None,
            decimal_places: None,
            db_default: None,
            primary_key: false,
        }
    }

    pub fn nullable(mut self) -> Field {
        self.nullable = true;
        self
    }

    pub fn max_length(mut self, max_length: u64) -> Field {
        self.max_length = Some(max_length);
        self
    }

    pub fn decimal(mut self, max_digits: u32, decimal_places: u32) -> Field {
        self.max_digits = Some(max_digits);
        self.decimal_places = Some(decimal_places);
        self
    }

    pub fn db_default(mut self, expr: impl Into<Expr>) -> Field {
        self.db_default = Some(expr.into());
        self
    }

    pub fn primary_key(mut self) -> Field {
        self.primary_key = true;
        self
    }

    /// Returns `true` if the database computes a default for this column.
    ///
    /// Auto-incrementing columns always have one.
    pub fn has_db_default(&self) -> bool {
        self.db_default.is_some() || self.is_auto()
    }

    /// Returns `true` if the column is an identity column.
    pub fn is_auto(&self) -> bool {
        self.kind.is_auto()
    }

    pub fn is_json(&self) -> bool {
        matches!(self.kind, FieldKind::Json)
    }
}

impl FieldKind {
    /// Auto-incrementing kinds.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto | Self::BigAuto | Self::SmallAuto)
    }

    /// The canonical name of the kind, as used in diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Self::Auto => "AutoField",
            Self::BigAuto => "BigAutoField",
            Self::SmallAuto => "SmallAutoField",
            Self::BigInteger => "BigIntegerField",
            Self::Binary => "BinaryField",
            Self::Boolean => "BooleanField",
            Self::Char => "CharField",
            Self::Date => "DateField",
            Self::DateTime => "DateTimeField",
            Self::Decimal => "DecimalField",
            Self::Duration => "DurationField",
            Self::File => "FileField",
            Self::FilePath => "FilePathField",
            Self::Float => "FloatField",
            Self::GenericIpAddress => "GenericIPAddressField",
            Self::Integer => "IntegerField",
            Self::Json => "JSONField",
            Self::PositiveBigInteger => "PositiveBigIntegerField",
            Self::PositiveInteger => "PositiveIntegerField",
            Self::PositiveSmallInteger => "PositiveSmallIntegerField",
            Self::Slug => "SlugField",
            Self::SmallInteger => "SmallIntegerField",
            Self::Text => "TextField",
            Self::Time => "TimeField",
            Self::Uuid => "UUIDField",
            Self::Other(name) => name,
        }
    }
}
