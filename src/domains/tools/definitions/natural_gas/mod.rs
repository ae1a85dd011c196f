//! Natural gas tools.
//!
//! One file per tool, each mapping onto one family of routes under the
//! upstream `natural-gas/` category.

pub mod consumption;
pub mod exploration_reserves;
pub mod imports_exports;
pub mod prices;
pub mod production;
pub mod storage;
pub mod summary;

pub use consumption::ConsumptionTool;
pub use exploration_reserves::ExplorationReservesTool;
pub use imports_exports::ImportsExportsTool;
pub use prices::PricesTool;
pub use production::ProductionTool;
pub use storage::StorageTool;
pub use summary::SummaryTool;
