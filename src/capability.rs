//! Named tracing capabilities.

/// A single tracing behavior that can be switched on or off.
///
/// Each variant corresponds to one field of [`TraceOptions`](crate::TraceOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capability {
    /// Create root spans when no parent span exists.
    AllowRoot,
    /// Span the lifetime of each transaction.
    Transaction,
    /// Span ping requests.
    Ping,
    /// Span each row iteration step. This can result in many spans.
    RowsNext,
    /// Span closing of row sets.
    RowsClose,
    /// Span rows-affected lookups.
    RowsAffected,
    /// Span last-insert-id lookups.
    LastInsertId,
    /// Record SQL query text on spans.
    Query,
    /// Record bound query parameters on spans.
    QueryParams,
}

impl Capability {
    /// Every capability, in field order.
    pub const ALL: [Capability; 9] = [
        Capability::AllowRoot,
        Capability::Transaction,
        Capability::Ping,
        Capability::RowsNext,
        Capability::RowsClose,
        Capability::RowsAffected,
        Capability::LastInsertId,
        Capability::Query,
        Capability::QueryParams,
    ];

    /// Returns the canonical snake_case name of the capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::AllowRoot => "allow_root",
            Capability::Transaction => "transaction",
            Capability::Ping => "ping",
            Capability::RowsNext => "rows_next",
            Capability::RowsClose => "rows_close",
            Capability::RowsAffected => "rows_affected",
            Capability::LastInsertId => "last_insert_id",
            Capability::Query => "query",
            Capability::QueryParams => "query_params",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_follow_field_order() {
        let names: Vec<_> = Capability::ALL.iter().map(Capability::as_str).collect();
        assert_eq!(
            names,
            vec![
                "allow_root",
                "transaction",
                "ping",
                "rows_next",
                "rows_close",
                "rows_affected",
                "last_insert_id",
                "query",
                "query_params",
            ]
        );
    }

    #[test]
    fn test_display_matches_as_str() {
        for cap in Capability::ALL {
            assert_eq!(cap.to_string(), cap.as_str());
        }
    }
}
