// Rust guideline compliant 2026-10-19

//! Command implementations for the Strata CLI.

pub mod generate;
pub mod init;
pub mod levels;
pub mod show;
