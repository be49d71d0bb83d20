//! Manifest naming core.
//!
//! Derives the canonical `<name>-<shortkind>.yaml` filename for a
//! Kubernetes manifest from its `kind` and `metadata.name` fields.
//! Everything in here is pure; file I/O and mode selection live in
//! `crate::handlers`.

pub mod kinds;
pub mod parser;
pub mod target;

pub use kinds::{KIND_ABBREVIATIONS, kind_abbreviation};
pub use parser::{ManifestDescriptor, parse_manifest};
pub use target::{derive_target_name, target_path};
