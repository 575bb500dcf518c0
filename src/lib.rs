// ABOUTME: Library root for dockview - exposes the report and runtime layers for testing.
// ABOUTME: The main binary is in main.rs.

pub mod error;
pub mod output;
pub mod report;
pub mod runtime;
pub mod types;
