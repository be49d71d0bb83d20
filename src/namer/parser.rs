//! Descriptor extraction from manifest content.

use serde_yaml::Value;

use crate::error::{NamerError, Result};

/// The subset of a manifest that determines its canonical filename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDescriptor {
    /// Top-level `kind`, e.g. `Deployment`. Empty when absent.
    pub kind: String,
    /// `metadata.name`. Empty when absent.
    pub name: String,
}

/// Extract `kind` and `metadata.name` from manifest content.
///
/// Parsing is deliberately permissive: missing or non-string fields come
/// back as empty strings and everything else in the document is ignored.
/// Only malformed YAML, or a document whose root is not a mapping, is an
/// error.
pub fn parse_manifest(content: &str) -> Result<ManifestDescriptor> {
    if content.trim().is_empty() {
        return Ok(ManifestDescriptor::default());
    }

    let value: Value = serde_yaml::from_str(content)?;
    if value.is_null() {
        // Comment-only documents parse to null; treat them like empty input.
        return Ok(ManifestDescriptor::default());
    }
    if !value.is_mapping() {
        return Err(NamerError::InvalidManifest(
            "document root is not a mapping".to_string(),
        ));
    }

    let kind = get_string(&value, "kind").unwrap_or_default();
    let name = value
        .get("metadata")
        .and_then(|m| get_string(m, "name"))
        .unwrap_or_default();

    Ok(ManifestDescriptor { kind, name })
}

fn get_string(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(|s| s.to_string())
}
