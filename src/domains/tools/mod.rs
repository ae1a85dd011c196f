//! Tools domain.
//!
//! The MCP-facing tool catalog:
//!
//! - `definitions/` - one file per tool (schema, name, description, route)
//! - `router.rs` - assembles the rmcp ToolRouter over the catalog
//!
//! Tools carry no logic of their own; they pass their argument bag to
//! the query builder in `domains::eia` and render the outcome.

pub mod definitions;
pub mod router;

pub use router::build_tool_router;
