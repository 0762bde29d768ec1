//! Macrodeck - macro button engine: configuration, reports, and dry runs
//! shared by the `macrodeck` binary and its tests.

pub mod config;
pub mod dry_run;
pub mod report;

pub use config::AppConfig;
