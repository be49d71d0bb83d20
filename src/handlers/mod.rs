// Handler modules
pub mod rename;

// Re-export the handler surface
pub use rename::{RenameOptions, RenameOutcome, handle_rename};
