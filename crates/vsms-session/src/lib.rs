//! vsms-session
//!
//! The active assessment workflow: sequential patient-id allocation,
//! validation-gated record assembly, and the submit/reset lifecycle
//! around a record store.

pub mod allocator;
pub mod assemble;
pub mod error;
pub mod session;

pub use allocator::next_patient_id;
pub use assemble::assemble;
pub use error::{SessionError, ValidationError};
pub use session::Session;
