//! taskscout: heuristic commit-to-task matcher (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod git;
pub mod matcher;
pub mod models;
pub mod monitor;
pub mod output;
pub mod tasks;
