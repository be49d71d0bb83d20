//! Canonical filename derivation.

use std::path::{Path, PathBuf};

use crate::namer::kinds::kind_abbreviation;
use crate::namer::parser::ManifestDescriptor;

/// Compose the canonical filename for a manifest: `<name>-<shortkind>.yaml`.
///
/// Total over any pair of strings. Name and kind are opaque; an empty name
/// yields `-<shortkind>.yaml`, which is deliberate, not an error.
pub fn derive_target_name(kind: &str, name: &str) -> String {
    format!("{}-{}.yaml", name, kind_abbreviation(kind))
}

/// The canonical path for a manifest file: the derived filename placed in
/// the same directory as `source`.
pub fn target_path(source: &Path, descriptor: &ManifestDescriptor) -> PathBuf {
    let file_name = derive_target_name(&descriptor.kind, &descriptor.name);
    match source.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namer::kinds::KIND_ABBREVIATIONS;
    use proptest::prelude::*;

    #[test]
    fn test_every_known_kind_composes_with_its_table_entry() {
        for (kind, short) in KIND_ABBREVIATIONS {
            let expected = format!("app-{}.yaml", short);
            assert_eq!(derive_target_name(kind, "app"), expected);
        }
    }

    #[test]
    fn test_derive_target_name_for_known_kinds() {
        let cases = [
            ("Ingress", "hello", "hello-ing.yaml"),
            ("Deployment", "webapp", "webapp-deploy.yaml"),
            ("Service", "api", "api-svc.yaml"),
            ("ConfigMap", "app-config", "app-config-cm.yaml"),
            ("PersistentVolumeClaim", "data", "data-pvc.yaml"),
            ("ServiceAccount", "builder", "builder-sa.yaml"),
        ];
        for (kind, name, expected) in cases {
            assert_eq!(derive_target_name(kind, name), expected);
        }
    }

    #[test]
    fn test_derive_target_name_for_unknown_kinds() {
        assert_eq!(derive_target_name("CronJob", "nightly"), "nightly-cronjob.yaml");
        assert_eq!(derive_target_name("Certificate", "tls"), "tls-certificate.yaml");
    }

    #[test]
    fn test_empty_fields_still_produce_a_name() {
        assert_eq!(derive_target_name("", ""), "-.yaml");
        assert_eq!(derive_target_name("Deployment", ""), "-deploy.yaml");
        assert_eq!(derive_target_name("", "hello"), "hello-.yaml");
    }

    #[test]
    fn test_target_path_stays_in_source_directory() {
        let descriptor = ManifestDescriptor {
            kind: "Ingress".to_string(),
            name: "hello".to_string(),
        };
        let target = target_path(Path::new("/srv/app/hello-ingress.yaml"), &descriptor);
        assert_eq!(target, PathBuf::from("/srv/app/hello-ing.yaml"));
    }

    proptest! {
        #[test]
        fn derived_name_has_canonical_shape(
            kind in "[A-Za-z]{0,24}",
            name in "[a-z0-9-]{0,40}",
        ) {
            let derived = derive_target_name(&kind, &name);
            prop_assert!(derived.starts_with(&name));
            prop_assert!(derived.ends_with(".yaml"));
            prop_assert_eq!(&derived, &derive_target_name(&kind, &name));
        }
    }
}
