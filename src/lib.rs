// recolor - Replace CSS color variable references with literal hex colors
//
// This is the library crate containing the scanning, substitution and rewrite logic.
// The binary crate (main.rs) provides the command line entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod report;
pub mod runner;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{RecolorConfig, RecolorSettings, ReplacementRule};
pub use report::{Reporter, RunSummary};
pub use runner::{run, run_with_store};
pub use services::RecolorError;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
