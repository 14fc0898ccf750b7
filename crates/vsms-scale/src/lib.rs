//! vsms-scale
//!
//! The Vineland Social Maturity Scale as pure data — the fixed 89-item
//! catalog (Indian adaptation, 13 age blocks, 8 domains) — plus the
//! per-assessment response set and the scoring engine. No I/O.

pub mod catalog;
pub mod error;
pub mod responses;
pub mod scoring;

pub use catalog::{Catalog, ScaleItem, Weighting};
pub use responses::ResponseSet;
pub use scoring::{ScoreSummary, score};
