//! Functional options for building [`TraceOptions`].
//!
//! A [`TraceOption`] is a single adjustment. Drivers accept any number of them
//! at construction time and fold them over the default options, so callers
//! only mention the behaviors they care about:
//!
//! ```rust
//! use sqltrace_options::{TraceOption, TraceOptions, TRACE_ALL};
//!
//! let options = TraceOptions::from_options([
//!     TraceOption::options(TRACE_ALL),
//!     TraceOption::allow_root(false),
//! ]);
//!
//! assert!(!options.allow_root);
//! assert!(options.rows_next);
//! ```

use crate::capability::Capability;
use crate::options::TraceOptions;

/// A single adjustment applied while composing [`TraceOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceOption {
    /// Set one capability, leaving the others untouched.
    Set(Capability, bool),
    /// Replace the options being built wholesale.
    Replace(TraceOptions),
}

impl TraceOption {
    /// Set a single capability.
    pub fn set(capability: Capability, enabled: bool) -> Self {
        TraceOption::Set(capability, enabled)
    }

    /// Replace all options with the given set.
    pub fn options(options: TraceOptions) -> Self {
        TraceOption::Replace(options)
    }

    /// Allow root spans in absence of an existing parent span.
    pub fn allow_root(enabled: bool) -> Self {
        Self::set(Capability::AllowRoot, enabled)
    }

    /// Create spans for the duration of transactions.
    pub fn transaction(enabled: bool) -> Self {
        Self::set(Capability::Transaction, enabled)
    }

    /// Create spans on ping requests.
    pub fn ping(enabled: bool) -> Self {
        Self::set(Capability::Ping, enabled)
    }

    /// Create spans on row iteration. This can result in many spans.
    pub fn rows_next(enabled: bool) -> Self {
        Self::set(Capability::RowsNext, enabled)
    }

    /// Create spans when a row set is closed.
    pub fn rows_close(enabled: bool) -> Self {
        Self::set(Capability::RowsClose, enabled)
    }

    /// Create spans on rows-affected lookups.
    pub fn rows_affected(enabled: bool) -> Self {
        Self::set(Capability::RowsAffected, enabled)
    }

    /// Create spans on last-insert-id lookups.
    pub fn last_insert_id(enabled: bool) -> Self {
        Self::set(Capability::LastInsertId, enabled)
    }

    /// Record SQL query text in spans.
    ///
    /// Only enable this if it is safe to have queries recorded.
    pub fn query(enabled: bool) -> Self {
        Self::set(Capability::Query, enabled)
    }

    /// Record parameters of parametrized queries in spans.
    ///
    /// Only enable this if it is safe to have parameters recorded.
    /// No effect unless query recording is enabled too.
    pub fn query_params(enabled: bool) -> Self {
        Self::set(Capability::QueryParams, enabled)
    }

    /// Apply this adjustment to `options`.
    pub fn apply(&self, options: &mut TraceOptions) {
        match *self {
            TraceOption::Set(capability, enabled) => options.set(capability, enabled),
            TraceOption::Replace(replacement) => *options = replacement,
        }
    }
}

impl From<TraceOptions> for TraceOption {
    fn from(options: TraceOptions) -> Self {
        TraceOption::Replace(options)
    }
}

impl TraceOptions {
    /// Apply `adjustments` in order on top of `base`.
    ///
    /// Later adjustments win over earlier ones touching the same capability.
    /// Combinations are not validated.
    pub fn compose<I>(base: TraceOptions, adjustments: I) -> TraceOptions
    where
        I: IntoIterator<Item = TraceOption>,
    {
        let mut options = base;
        let mut applied = 0usize;
        for adjustment in adjustments {
            adjustment.apply(&mut options);
            applied += 1;
        }

        tracing::trace!(
            target: "sqltrace_options",
            applied,
            options = %options,
            "Composed trace options"
        );

        options
    }

    /// Apply `adjustments` in order on top of the default options.
    pub fn from_options<I>(adjustments: I) -> TraceOptions
    where
        I: IntoIterator<Item = TraceOption>,
    {
        Self::compose(TraceOptions::default(), adjustments)
    }
}

impl FromIterator<TraceOption> for TraceOptions {
    fn from_iter<I: IntoIterator<Item = TraceOption>>(iter: I) -> Self {
        TraceOptions::from_options(iter)
    }
}

impl Extend<TraceOption> for TraceOptions {
    fn extend<I: IntoIterator<Item = TraceOption>>(&mut self, iter: I) {
        *self = TraceOptions::compose(*self, iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TRACE_ALL;
    use tracing_test::traced_test;

    fn constructors() -> [(Capability, fn(bool) -> TraceOption); 9] {
        [
            (Capability::AllowRoot, TraceOption::allow_root),
            (Capability::Transaction, TraceOption::transaction),
            (Capability::Ping, TraceOption::ping),
            (Capability::RowsNext, TraceOption::rows_next),
            (Capability::RowsClose, TraceOption::rows_close),
            (Capability::RowsAffected, TraceOption::rows_affected),
            (Capability::LastInsertId, TraceOption::last_insert_id),
            (Capability::Query, TraceOption::query),
            (Capability::QueryParams, TraceOption::query_params),
        ]
    }

    #[test]
    fn test_constructors_select_their_field() {
        let constructors = constructors();
        assert_eq!(constructors.len(), Capability::ALL.len());

        for (cap, constructor) in constructors {
            assert_eq!(constructor(true), TraceOption::Set(cap, true));

            let options = TraceOptions::from_options([constructor(true)]);
            assert_eq!(options, TraceOptions::default().with(cap, true));
        }
    }

    #[test]
    fn test_empty_composition_is_identity() {
        let base = TraceOptions::default().with_ping(true);
        assert_eq!(TraceOptions::compose(base, Vec::<TraceOption>::new()), base);
        assert_eq!(
            TraceOptions::from_options(Vec::<TraceOption>::new()),
            TraceOptions::default()
        );
    }

    #[test]
    fn test_last_write_wins() {
        let options = TraceOptions::from_options([
            TraceOption::ping(true),
            TraceOption::ping(false),
        ]);
        assert!(!options.ping);

        let options = TraceOptions::from_options([
            TraceOption::ping(true),
            TraceOption::options(TraceOptions::default()),
        ]);
        assert_eq!(options, TraceOptions::default());
    }

    #[test]
    fn test_replace_ignores_base() {
        let custom = TraceOptions::default().with_rows_close(true);
        assert_eq!(
            TraceOptions::compose(TRACE_ALL, [TraceOption::options(custom)]),
            custom
        );
        assert_eq!(
            TraceOptions::compose(TraceOptions::default(), [TraceOption::from(custom)]),
            custom
        );
    }

    #[traced_test]
    #[test]
    fn test_compose_logs_result() {
        TraceOptions::from_options([TraceOption::transaction(true), TraceOption::query(true)]);
        assert!(logs_contain("Composed trace options"));
        assert!(logs_contain("transaction,query"));
    }

    #[test]
    fn test_collect_and_extend() {
        let options: TraceOptions = vec![TraceOption::query(true), TraceOption::query_params(true)]
            .into_iter()
            .collect();
        assert!(options.query && options.query_params);

        let mut options = TRACE_ALL;
        options.extend([TraceOption::rows_next(false)]);
        assert_eq!(options, TRACE_ALL.with_rows_next(false));
    }
}
