//! # sqltrace-options
//!
//! Composable tracing options for instrumented SQL database drivers.
//!
//! A traced driver wrapper decides per operation whether to create a span and
//! what to record in it. This crate holds those decisions: a flat set of
//! boolean capabilities, off by default, that callers switch on selectively
//! without touching the driver wrapper itself.
//!
//! ## Features
//!
//! - **Safe Defaults**: Nothing is traced and nothing is recorded until enabled
//! - **Functional Options**: Pass any number of [`TraceOption`]s; later ones win
//! - **Presets**: [`TRACE_ALL`] enables everything for development builds
//!
//! ## Quick Start
//!
//! ```rust
//! use sqltrace_options::{TraceOption, TraceOptions};
//!
//! // What a driver wrapper does with the options it is handed
//! let options = TraceOptions::from_options([
//!     TraceOption::transaction(true),
//!     TraceOption::query(true),
//! ]);
//!
//! assert!(options.transaction);
//! assert!(!options.allow_root);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use sqltrace_options::{TraceOption, TraceOptions, TRACE_ALL};
//!
//! // A custom base, adjusted further by the caller
//! let base = TraceOptions::default().with_transaction(true);
//! let options = TraceOptions::compose(base, [TraceOption::ping(true)]);
//! assert!(options.transaction && options.ping);
//!
//! // Everything, e.g. for debug builds
//! let debug = TraceOptions::from_options([TraceOption::options(TRACE_ALL)]);
//! assert_eq!(debug, TRACE_ALL);
//! ```
//!
//! ## Capabilities
//!
//! | Capability | Description |
//! |------------|-------------|
//! | `allow_root` | Create root spans when no parent span exists |
//! | `transaction` | Span transactions; their queries become child spans |
//! | `ping` | Span ping requests |
//! | `rows_next` | Span each row iteration step |
//! | `rows_close` | Span closing of row sets |
//! | `rows_affected` | Span rows-affected lookups |
//! | `last_insert_id` | Span last-insert-id lookups |
//! | `query` | Record SQL text on spans |
//! | `query_params` | Record query parameters on spans (requires `query`) |
//!
//! The options carry flags only. Whether `query_params` takes effect without
//! `query` is decided by the driver wrapper reading them, not here.

mod builder;
mod capability;
mod options;

pub use builder::TraceOption;
pub use capability::Capability;
pub use options::{TraceOptions, TRACE_ALL};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Capability, TraceOption, TraceOptions, TRACE_ALL};
}
