use crate::{Error, Result};

use indexmap::IndexMap;

use std::fmt;

/// Parameters used to open a warehouse session.
///
/// `account`, `user`, `password`, `warehouse` and `schema` are required;
/// [`ConnectParams::validate`] reports the first one that is missing before any
/// connection is attempted.
#[derive(Clone, Default, PartialEq)]
pub struct ConnectParams {
    pub account: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub warehouse: Option<String>,
    pub schema: Option<String>,
    pub database: Option<String>,
    pub role: Option<String>,

    /// Session parameters passed through to the driver verbatim.
    pub session: IndexMap<String, String>,
}

macro_rules! builder_fn {
    ($name:ident) => {
        pub fn $name(mut self, $name: impl Into<String>) -> Self {
            self.$name = Some($name.into());
            self
        }
    };
}

impl ConnectParams {
    pub fn new() -> ConnectParams {
        ConnectParams::default()
    }

    builder_fn!(account);
    builder_fn!(user);
    builder_fn!(password);
    builder_fn!(warehouse);
    builder_fn!(schema);
    builder_fn!(database);
    builder_fn!(role);

    /// Set a session parameter.
    pub fn session_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.session.insert(name.into(), value.into());
        self
    }

    /// Check that every required parameter is present and non-empty.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("account", &self.account),
            ("user", &self.user),
            ("password", &self.password),
            ("warehouse", &self.warehouse),
            ("schema", &self.schema),
        ];

        for (name, value) in required {
            match value.as_deref() {
                Some(value) if !value.is_empty() => {}
                _ => {
                    return Err(Error::invalid_configuration(format!(
                        "missing required connection parameter `{name}`"
                    )))
                }
            }
        }

        Ok(())
    }
}

impl fmt::Debug for ConnectParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectParams")
            .field("account", &self.account)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("warehouse", &self.warehouse)
            .field("schema", &self.schema)
            .field("database", &self.database)
            .field("role", &self.role)
            .field("session", &self.session)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std_util::prelude::*;

    fn complete() -> ConnectParams {
        ConnectParams::new()
            .account("xy12345.us-east-1")
            .user("loader")
            .password("hunter2")
            .warehouse("COMPUTE_WH")
            .schema("PUBLIC")
    }

    #[test]
    fn complete_params_validate() {
        assert_ok!(complete().validate());
        assert_ok!(complete().database("ANALYTICS").role("SYSADMIN").validate());
    }

    #[test]
    fn missing_parameter_is_named() {
        let mut params = complete();
        params.warehouse = None;

        let err = assert_err!(params.validate());
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("`warehouse`"));
    }

    #[test]
    fn empty_parameter_counts_as_missing() {
        let err = assert_err!(complete().password("").validate());
        assert!(err.to_string().contains("`password`"));
    }

    #[test]
    fn debug_redacts_password() {
        let debug = format!("{:?}", complete());
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
