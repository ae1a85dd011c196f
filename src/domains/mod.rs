//! Domain modules.
//!
//! - `eia`: the query builder and request executor for the EIA v2 API
//! - `tools`: the MCP tool catalog wired on top of it

pub mod eia;
pub mod tools;
