// Receipt Points - Core Library
// Exposes the scoring engine and receipt store for the CLI, the API server, and tests

pub mod receipt;
pub mod scoring;
pub mod store;
pub mod config;
pub mod logging;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use receipt::{Item, Receipt};
pub use scoring::{breakdown, calculate, Points, PointsBreakdown};
pub use store::{is_well_formed_id, ReceiptStore};
pub use config::{LogFormat, ServerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
