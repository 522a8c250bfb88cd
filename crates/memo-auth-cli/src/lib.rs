/*
[INPUT]:  Public API exports for memo-auth-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod config;
pub mod report;

// Re-export main types for convenience
pub use cli::{Cli, Mode, normalize_single_dash_flags, run};
pub use config::EndpointsConfig;
