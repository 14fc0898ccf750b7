//! vsms-core
//!
//! Pure domain types and display formatting for the VSMS assessment
//! system. No I/O — this is the shared vocabulary of the workspace.

pub mod error;
pub mod format;
pub mod models;
