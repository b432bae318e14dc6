use super::{func, Formatter};

use flurry_core::{
    driver::Capability,
    stmt::{AggregateKind, Connector, Expr, FuncKind, Lookup},
    Result,
};

use std::collections::HashMap;

/// SQL rendering rules for the warehouse.
///
/// A dialect pairs the driver [`Capability`] with dispatch tables mapping
/// portable node kinds (functions, aggregates, connectors and pattern lookups)
/// to their rendering. Node kinds missing from a table are reported as
/// unsupported instead of being rendered partially.
#[derive(Debug, Clone)]
pub struct Dialect {
    capability: Capability,

    /// Convert timestamps to the requested time zone before extracting or
    /// truncating.
    use_tz: bool,

    funcs: HashMap<FuncKind, FuncRender>,
    aggregates: HashMap<AggregateKind, &'static str>,
    connectors: HashMap<Connector, ConnectorRender>,
    lookups: HashMap<Lookup, &'static str>,
}

pub(super) type RenderFn = fn(&mut Formatter<'_>, &[Expr]) -> Result<()>;

#[derive(Clone, Copy)]
pub(super) enum FuncRender {
    /// `NAME(arg, ...)`
    Call(&'static str),

    Custom(RenderFn),
}

#[derive(Debug, Clone, Copy)]
pub(super) enum ConnectorRender {
    /// `(lhs OP rhs)`
    Infix(&'static str),

    /// `NAME(lhs, rhs)`
    Func(&'static str),
}

impl Dialect {
    /// Builds the Snowflake dialect.
    pub fn snowflake() -> Dialect {
        use AggregateKind::*;

        let funcs = HashMap::from([
            (FuncKind::Ceil, FuncRender::Call("CEIL")),
            (FuncKind::Coalesce, FuncRender::Call("COALESCE")),
            (FuncKind::Concat, FuncRender::Custom(func::concat)),
            (FuncKind::CurrentTimestamp, FuncRender::Call("CURRENT_TIMESTAMP")),
            (FuncKind::Length, FuncRender::Call("LENGTH")),
            (FuncKind::Lower, FuncRender::Call("LOWER")),
            (FuncKind::Random, FuncRender::Custom(func::random)),
            (FuncKind::Sha224, FuncRender::Custom(func::sha224)),
            (FuncKind::Sha256, FuncRender::Custom(func::sha256)),
            (FuncKind::Sha384, FuncRender::Custom(func::sha384)),
            (FuncKind::Sha512, FuncRender::Custom(func::sha512)),
            (FuncKind::StrIndex, FuncRender::Custom(func::str_index)),
            (FuncKind::Upper, FuncRender::Call("UPPER")),
        ]);

        let aggregates = HashMap::from([
            (Count, "COUNT"),
            (Sum, "SUM"),
            (Avg, "AVG"),
            (Min, "MIN"),
            (Max, "MAX"),
            (StdDevPop, "STDDEV_POP"),
            (StdDevSamp, "STDDEV_SAMP"),
            (VarPop, "VAR_POP"),
            (VarSamp, "VAR_SAMP"),
            (StringAgg, "LISTAGG"),
        ]);

        let connectors = HashMap::from([
            (Connector::Add, ConnectorRender::Infix("+")),
            (Connector::Sub, ConnectorRender::Infix("-")),
            (Connector::Mul, ConnectorRender::Infix("*")),
            (Connector::Div, ConnectorRender::Infix("/")),
            (Connector::Mod, ConnectorRender::Infix("%")),
            (Connector::Pow, ConnectorRender::Func("POWER")),
            (Connector::BitAnd, ConnectorRender::Func("BITAND")),
            (Connector::BitOr, ConnectorRender::Func("BITOR")),
            (Connector::BitXor, ConnectorRender::Func("BITXOR")),
            (Connector::BitLeftShift, ConnectorRender::Func("BITSHIFTLEFT")),
            (Connector::BitRightShift, ConnectorRender::Func("BITSHIFTRIGHT")),
        ]);

        let lookups = HashMap::from([
            (Lookup::IExact, "ILIKE"),
            (Lookup::Contains, "LIKE"),
            (Lookup::IContains, "ILIKE"),
            (Lookup::StartsWith, "LIKE"),
            (Lookup::IStartsWith, "ILIKE"),
            (Lookup::EndsWith, "LIKE"),
            (Lookup::IEndsWith, "ILIKE"),
        ]);

        Dialect {
            capability: Capability::SNOWFLAKE,
            use_tz: true,
            funcs,
            aggregates,
            connectors,
            lookups,
        }
    }

    /// Replace the capability, e.g. to render for a different parameter
    /// style.
    pub fn with_capability(mut self, capability: Capability) -> Dialect {
        self.capability = capability;
        self
    }

    pub fn use_tz(mut self, use_tz: bool) -> Dialect {
        self.use_tz = use_tz;
        self
    }

    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    pub fn is_tz_aware(&self) -> bool {
        self.use_tz
    }

    pub(super) fn func(&self, kind: FuncKind) -> Option<FuncRender> {
        self.funcs.get(&kind).copied()
    }

    pub(super) fn aggregate(&self, kind: AggregateKind) -> Option<&'static str> {
        self.aggregates.get(&kind).copied()
    }

    pub(super) fn connector(&self, connector: Connector) -> Option<ConnectorRender> {
        self.connectors.get(&connector).copied()
    }

    pub(super) fn lookup(&self, lookup: Lookup) -> Option<&'static str> {
        self.lookups.get(&lookup).copied()
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::snowflake()
    }
}

impl std::fmt::Debug for FuncRender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FuncRender::Call(name) => f.debug_tuple("Call").field(name).finish(),
            FuncRender::Custom(_) => f.write_str("Custom"),
        }
    }
}
