//! Tracing options for instrumented database drivers.

use crate::capability::Capability;

/// Tracing options consumed by an instrumented database driver.
///
/// Every option is `false` by default. With nothing enabled the driver creates
/// no spans and records no data, which is the sensible default with both
/// performance and security in mind. Opt in per behavior with the `with_*`
/// methods, compose [`TraceOption`](crate::TraceOption)s, or start from
/// [`TRACE_ALL`].
///
/// # Example
///
/// ```rust
/// use sqltrace_options::TraceOptions;
///
/// let options = TraceOptions::default()
///     .with_transaction(true)
///     .with_query(true);
///
/// assert!(options.transaction);
/// assert!(!options.query_params);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraceOptions {
    /// Allow creating root spans in absence of an existing parent span.
    /// Default: `false` (calls without a parent span are not traced)
    pub allow_root: bool,

    /// Create spans for the duration of transactions. Spans of the queries
    /// scoped to a transaction become children of the transaction span.
    /// Default: `false`
    pub transaction: bool,

    /// Create spans on ping requests.
    /// Default: `false`
    pub ping: bool,

    /// Create spans on every row iteration step. This can result in many spans.
    /// Default: `false`
    pub rows_next: bool,

    /// Create spans when a row set is closed.
    /// Default: `false`
    pub rows_close: bool,

    /// Create spans on rows-affected lookups.
    /// Default: `false`
    pub rows_affected: bool,

    /// Create spans on last-insert-id lookups.
    /// Default: `false`
    pub last_insert_id: bool,

    /// Record the SQL query text in spans.
    /// Default: `false` (queries may embed sensitive literals)
    pub query: bool,

    /// Record the parameters of parametrized queries in spans.
    /// Has no effect unless `query` is also enabled.
    /// Default: `false` (parameters often contain user input)
    pub query_params: bool,
}

/// Tracing options with every behavior enabled.
///
/// **Warning**: records all SQL and parameters. Meant for development builds.
pub const TRACE_ALL: TraceOptions = TraceOptions {
    allow_root: true,
    transaction: true,
    ping: true,
    rows_next: true,
    rows_close: true,
    rows_affected: true,
    last_insert_id: true,
    query: true,
    query_params: true,
};

impl TraceOptions {
    /// Options with every behavior disabled, same as `TraceOptions::default()`.
    pub const NONE: TraceOptions = TraceOptions {
        allow_root: false,
        transaction: false,
        ping: false,
        rows_next: false,
        rows_close: false,
        rows_affected: false,
        last_insert_id: false,
        query: false,
        query_params: false,
    };

    /// Options with every behavior enabled, same as [`TRACE_ALL`].
    pub const ALL: TraceOptions = TRACE_ALL;

    /// Create options with default values (nothing enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options with every behavior enabled.
    ///
    /// **Warning**: Do not use in production as it records all SQL and parameters.
    pub fn all() -> Self {
        TRACE_ALL
    }

    /// Returns whether the given capability is enabled.
    pub fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::AllowRoot => self.allow_root,
            Capability::Transaction => self.transaction,
            Capability::Ping => self.ping,
            Capability::RowsNext => self.rows_next,
            Capability::RowsClose => self.rows_close,
            Capability::RowsAffected => self.rows_affected,
            Capability::LastInsertId => self.last_insert_id,
            Capability::Query => self.query,
            Capability::QueryParams => self.query_params,
        }
    }

    /// Sets a single capability, leaving all others untouched.
    pub fn set(&mut self, capability: Capability, enabled: bool) {
        let field = match capability {
            Capability::AllowRoot => &mut self.allow_root,
            Capability::Transaction => &mut self.transaction,
            Capability::Ping => &mut self.ping,
            Capability::RowsNext => &mut self.rows_next,
            Capability::RowsClose => &mut self.rows_close,
            Capability::RowsAffected => &mut self.rows_affected,
            Capability::LastInsertId => &mut self.last_insert_id,
            Capability::Query => &mut self.query,
            Capability::QueryParams => &mut self.query_params,
        };
        *field = enabled;
    }

    /// Enable or disable a single capability.
    #[must_use]
    pub fn with(mut self, capability: Capability, enabled: bool) -> Self {
        self.set(capability, enabled);
        self
    }

    /// Iterate over the enabled capabilities in field order.
    pub fn enabled(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|cap| self.get(*cap))
    }

    /// Enable or disable root span creation.
    #[must_use]
    pub fn with_allow_root(mut self, enabled: bool) -> Self {
        self.allow_root = enabled;
        self
    }

    /// Enable or disable transaction spans.
    #[must_use]
    pub fn with_transaction(mut self, enabled: bool) -> Self {
        self.transaction = enabled;
        self
    }

    /// Enable or disable ping spans.
    #[must_use]
    pub fn with_ping(mut self, enabled: bool) -> Self {
        self.ping = enabled;
        self
    }

    /// Enable or disable row iteration spans.
    #[must_use]
    pub fn with_rows_next(mut self, enabled: bool) -> Self {
        self.rows_next = enabled;
        self
    }

    /// Enable or disable row set close spans.
    #[must_use]
    pub fn with_rows_close(mut self, enabled: bool) -> Self {
        self.rows_close = enabled;
        self
    }

    /// Enable or disable rows-affected spans.
    #[must_use]
    pub fn with_rows_affected(mut self, enabled: bool) -> Self {
        self.rows_affected = enabled;
        self
    }

    /// Enable or disable last-insert-id spans.
    #[must_use]
    pub fn with_last_insert_id(mut self, enabled: bool) -> Self {
        self.last_insert_id = enabled;
        self
    }

    /// Enable or disable SQL query recording in spans.
    ///
    /// **Security Warning**: Enabling this may expose sensitive data in your traces
    /// if your queries contain credentials or PII in the SQL text itself.
    #[must_use]
    pub fn with_query(mut self, enabled: bool) -> Self {
        self.query = enabled;
        self
    }

    /// Enable or disable query parameter recording in spans.
    ///
    /// **Security Warning**: Query parameters often contain user input and
    /// potentially sensitive data. Only enable in development or controlled environments.
    /// Has no effect unless query recording is enabled as well.
    #[must_use]
    pub fn with_query_params(mut self, enabled: bool) -> Self {
        self.query_params = enabled;
        self
    }
}

impl std::fmt::Display for TraceOptions {
    /// Writes the enabled capabilities as a comma separated list, or `none`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut enabled = self.enabled().peekable();
        if enabled.peek().is_none() {
            return f.write_str("none");
        }
        for (i, cap) in enabled.enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(cap.as_str())?;
        }
        Ok(())
    }
}
