//! EIA API domain: the query builder and request executor.
//!
//! - `query`: pure translation from a tool name plus an argument bag
//!   into a normalized request descriptor
//! - `client`: the HTTP executor that turns a descriptor into a single
//!   GET against the EIA v2 API
//! - `error`: the shared error taxonomy, always returned as values

pub mod client;
pub mod error;
pub mod query;

pub use client::{EIA_API_BASE, EiaClient};
pub use error::EiaError;
pub use query::{
    DEFAULT_LENGTH, QuerySpec, SortDirective, ToolArguments, ToolName, build_query,
    validate_rules,
};
