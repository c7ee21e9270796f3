//! Repository Implementations
//!
//! Concrete implementations of repository ports.

mod record;

pub use record::{YamlRecordRepository, RECORD_FILE};
