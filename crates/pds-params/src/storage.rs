//! Storage reuse detection
//!
//! Pure reads over [`ResolvedParameters`]; storage reuse is opt-in.

use pds_keys::builtin::{SCRIPT_TRUSTALL_CERTIFICATES_ENABLED, USE_SECHUB_STORAGE};
use pds_keys::{parse_flag, KeyRegistry};

use crate::resolved::{RawConfiguration, ResolvedParameters};
use crate::resolver::resolve;

const STORAGE_ROOT: &str = "jobstorage";

/// Whether the parameters ask the PDS to reuse the shared storage
///
/// Absent or unparseable values are `false`.
#[inline]
#[must_use]
pub fn is_reusing_storage(params: &ResolvedParameters) -> bool {
    parse_flag(params.value_of(&USE_SECHUB_STORAGE))
}

/// Storage reuse check resolving only the narrow registry
///
/// Gives the same answer as [`is_reusing_storage`] over a full resolution.
#[must_use]
pub fn is_reusing_storage_for(raw: &RawConfiguration) -> bool {
    is_reusing_storage(&resolve(raw, KeyRegistry::storage_detection()))
}

/// Whether the launcher script may accept untrusted certificates
#[inline]
#[must_use]
pub fn is_script_trusting_all_certificates(params: &ResolvedParameters) -> bool {
    parse_flag(params.value_of(&SCRIPT_TRUSTALL_CERTIFICATES_ENABLED))
}

/// Shared storage path for a project
#[inline]
#[must_use]
pub fn storage_path_for(project_id: &str) -> String {
    format!("{STORAGE_ROOT}/{project_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pds_keys::ids;

    fn raw(entries: &[(&str, &str)]) -> RawConfiguration {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn absent_flag_is_not_reusing() {
        let params = resolve(&raw(&[]), KeyRegistry::remote_parameters());
        assert!(!is_reusing_storage(&params));
    }

    #[test]
    fn unparseable_flag_is_not_reusing() {
        let params = resolve(
            &raw(&[(ids::USE_SECHUB_STORAGE, "yes")]),
            KeyRegistry::remote_parameters(),
        );
        assert!(!is_reusing_storage(&params));
    }

    #[test]
    fn true_flag_in_any_case_is_reusing() {
        let config = raw(&[(ids::USE_SECHUB_STORAGE, "TRUE")]);
        assert!(is_reusing_storage(&resolve(&config, KeyRegistry::remote_parameters())));
        assert!(is_reusing_storage_for(&config));
    }

    #[test]
    fn flag_key_matched_in_any_case() {
        let config = raw(&[("PDS.CONFIG.USE.SECHUB.STORAGE", "true")]);
        assert!(is_reusing_storage(&resolve(&config, KeyRegistry::remote_parameters())));
        assert!(is_reusing_storage_for(&config));
    }

    #[test]
    fn narrow_resolution_ignores_other_keys() {
        let config = raw(&[
            (ids::USE_SECHUB_STORAGE, "true"),
            (ids::TIMEOUT_MINUTES, "10"),
        ]);
        let narrow = resolve(&config, KeyRegistry::storage_detection());
        // timeout is unknown to the narrow view and therefore forwarded
        assert_eq!(narrow.len(), 2);
        assert!(is_reusing_storage(&narrow));
    }

    #[test]
    fn script_trust_flag() {
        let config = raw(&[(ids::SCRIPT_TRUSTALL_CERTIFICATES_ENABLED, "true")]);
        let params = resolve(&config, KeyRegistry::remote_parameters());
        assert!(is_script_trusting_all_certificates(&params));

        let params = resolve(&raw(&[]), KeyRegistry::remote_parameters());
        assert!(!is_script_trusting_all_certificates(&params));
    }

    #[test]
    fn storage_path_contains_project() {
        assert_eq!(storage_path_for("alpha"), "jobstorage/alpha");
    }
}
