//! vsms-archive
//!
//! Read-only views over previously stored records: the history search
//! and the reconstruction of a full assessment record for report
//! regeneration. The caller owns fetching and replaces the collection
//! wholesale; nothing here mutates it.

pub mod error;
pub mod query;
pub mod restore;

pub use query::{SearchMode, search};
pub use restore::{decode_responses, restore_record, try_decode_responses};
