//! Kind abbreviation table.

/// Abbreviations for common Kubernetes kinds, keyed by lowercased kind
/// name. These are the short names `kubectl get` accepts, so filenames
/// stay consistent with what engineers type at the command line.
pub const KIND_ABBREVIATIONS: &[(&str, &str)] = &[
    ("configmap", "cm"),
    ("daemonset", "ds"),
    ("deployment", "deploy"),
    ("endpoint", "ep"),
    ("ingress", "ing"),
    ("namespace", "ns"),
    ("persistentvolume", "pv"),
    ("persistentvolumeclaim", "pvc"),
    ("pod", "po"),
    ("replicaset", "rs"),
    ("replicationcontroller", "rc"),
    ("service", "svc"),
    ("serviceaccount", "sa"),
];

/// Abbreviate a Kubernetes kind for use in a filename.
///
/// Lookup is case-insensitive. Kinds without a table entry come back
/// lowercased rather than rejected, so CRDs and newer API kinds still
/// produce a usable suffix.
pub fn kind_abbreviation(kind: &str) -> String {
    let lowered = kind.to_lowercase();
    KIND_ABBREVIATIONS
        .iter()
        .find(|(full, _)| *full == lowered)
        .map(|(_, short)| (*short).to_string())
        .unwrap_or(lowered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_every_table_entry_abbreviates() {
        for (kind, short) in KIND_ABBREVIATIONS {
            assert_eq!(kind_abbreviation(kind), *short);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(kind_abbreviation("Deployment"), "deploy");
        assert_eq!(kind_abbreviation("DEPLOYMENT"), "deploy");
        assert_eq!(kind_abbreviation("dEpLoYmEnT"), "deploy");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_lowercase() {
        assert_eq!(kind_abbreviation("CronJob"), "cronjob");
        assert_eq!(kind_abbreviation("StatefulSet"), "statefulset");
        assert_eq!(kind_abbreviation("Certificate"), "certificate");
    }

    #[test]
    fn test_empty_kind_stays_empty() {
        assert_eq!(kind_abbreviation(""), "");
    }

    proptest! {
        #[test]
        fn abbreviation_ignores_input_case(kind in "[A-Za-z]{1,24}") {
            let lowered = kind_abbreviation(&kind.to_lowercase());
            prop_assert_eq!(kind_abbreviation(&kind), lowered.clone());
            prop_assert_eq!(kind_abbreviation(&kind.to_uppercase()), lowered);
        }

        #[test]
        fn abbreviation_is_total(kind in "\\PC{0,32}") {
            // Any string maps to some abbreviation, never a panic.
            let short = kind_abbreviation(&kind);
            prop_assert_eq!(short, kind_abbreviation(&kind));
        }
    }
}
