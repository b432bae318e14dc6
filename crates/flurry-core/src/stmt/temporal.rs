/// The temporal type an expression evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    Date,
    Time,
    DateTime,
}

/// A component of a date or timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePart {
    Year,

    /// Year of the ISO-8601 week-numbering calendar.
    IsoYear,
    Quarter,
    Month,
    Week,
    Day,

    /// Day of the week, Sunday = 1 through Saturday = 7.
    WeekDay,

    /// ISO-8601 day of the week, Monday = 1 through Sunday = 7.
    IsoWeekDay,
    Hour,
    Minute,
    Second,
}

impl DatePart {
    /// The portable lookup name, e.g. `week_day`.
    pub fn lookup_name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::IsoYear => "iso_year",
            Self::Quarter => "quarter",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::WeekDay => "week_day",
            Self::IsoWeekDay => "iso_week_day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}

/// Precision a date or timestamp is truncated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruncKind {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl TruncKind {
    pub fn lookup_name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Quarter => "quarter",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}
