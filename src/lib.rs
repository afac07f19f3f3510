// Student Roster - Core Library
// Filter and in-place map helpers over student records, used by the CLI and tests

pub mod student;
pub mod selection;
pub mod generics;
pub mod registry;
pub mod import;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use student::{Student, format_roster, sample_students};
pub use selection::{Shared, apply_each, select, share};
pub use generics::{first_word, largest, longest};
pub use registry::StudentRegistry;
pub use import::load_csv;
pub use config::DriverConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
