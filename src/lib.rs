//! # Kube Manifest Namer
//!
//! A Rust-based command-line tool that normalizes the filename of a single
//! Kubernetes manifest to `<name>-<shortkind>.yaml`, derived from the
//! manifest's `kind` and `metadata.name` fields.
//!
//! ## Modes
//!
//! - **Report** (default): print the canonical path, change nothing
//! - **Write** (`--write`): rename the file to its canonical path
//! - **Validate** (`--validate`): exit non-zero when the current filename
//!   is not canonical
//!
//! ## Example
//!
//! ```rust
//! use kube_manifest_namer::namer::{derive_target_name, parse_manifest};
//!
//! # fn main() -> Result<(), kube_manifest_namer::NamerError> {
//! let manifest = "kind: Deployment\nmetadata:\n  name: hello\n";
//! let descriptor = parse_manifest(manifest)?;
//! assert_eq!(
//!     derive_target_name(&descriptor.kind, &descriptor.name),
//!     "hello-deploy.yaml"
//! );
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod handlers;
pub mod namer;

// Re-export commonly used types and functions
pub use error::{NamerError, Result};
pub use handlers::{RenameOptions, RenameOutcome, handle_rename};
pub use namer::{ManifestDescriptor, derive_target_name, parse_manifest};

use cli::Cli;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the tool for already-parsed CLI arguments and return the outcome.
///
/// The caller turns the outcome (or error) into a process exit code.
pub fn run(cli: &Cli) -> Result<RenameOutcome> {
    let options = RenameOptions::from_cli(cli)?;
    handlers::handle_rename(&options)
}
