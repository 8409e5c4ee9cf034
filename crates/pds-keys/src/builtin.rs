//! Built-in key table
//!
//! Two groups exist: executor keys, evaluated on the orchestrating side and
//! never forwarded, and PDS config data keys, which are part of the job
//! parameters sent to the PDS.

use crate::key::{ConfigKey, NetworkTargetType};

/// Key identifiers
pub mod ids {
    /// Deny scans of internet targets
    pub const FORBIDDEN_TARGET_TYPE_INTERNET: &str =
        "pds.productexecutor.forbidden.targettype.internet";
    /// Deny scans of intranet targets
    pub const FORBIDDEN_TARGET_TYPE_INTRANET: &str =
        "pds.productexecutor.forbidden.targettype.intranet";
    /// Milliseconds between two job state checks
    pub const TIME_TO_WAIT_NEXT_CHECK_MILLIS: &str =
        "pds.productexecutor.timetowait.nextcheck.milliseconds";
    /// Minutes until a PDS job is considered timed out
    pub const TIMEOUT_MINUTES: &str = "pds.productexecutor.timeout.minutes";
    /// Accept untrusted (e.g. self signed) PDS server certificates
    pub const TRUST_ALL_CERTIFICATES: &str = "pds.productexecutor.trustall.certificates";

    /// Product identifier on PDS side
    pub const PRODUCT_IDENTIFIER: &str = "pds.config.productidentifier";
    /// Reuse the shared job storage instead of uploading again
    pub const USE_SECHUB_STORAGE: &str = "pds.config.use.sechub.storage";
    /// Storage path injected when storage is reused
    pub const SECHUB_STORAGE_PATH: &str = "pds.config.sechub.storage.path";
    /// Comma separated list of mapping identifiers
    pub const USE_SECHUB_MAPPINGS: &str = "pds.config.use.sechub.mappings";
    /// Launcher script may trust all certificates
    pub const SCRIPT_TRUSTALL_CERTIFICATES_ENABLED: &str =
        "pds.config.script.trustall.certificates.enabled";
    /// Data types the product can handle
    pub const SUPPORTED_DATATYPES: &str = "pds.config.supported.datatypes";
    /// File include patterns
    pub const FILEFILTER_INCLUDES: &str = "pds.config.filefilter.includes";
    /// File exclude patterns
    pub const FILEFILTER_EXCLUDES: &str = "pds.config.filefilter.excludes";
}

/// Deny switch for internet targets
pub static FORBIDDEN_TARGET_TYPE_INTERNET: ConfigKey = ConfigKey::new(
    ids::FORBIDDEN_TARGET_TYPE_INTERNET,
    "When true, this PDS instance does not scan INTERNET targets",
)
.internal()
.with_default("false")
.forbids(NetworkTargetType::Internet);

/// Deny switch for intranet targets
pub static FORBIDDEN_TARGET_TYPE_INTRANET: ConfigKey = ConfigKey::new(
    ids::FORBIDDEN_TARGET_TYPE_INTRANET,
    "When true, this PDS instance does not scan INTRANET targets",
)
.internal()
.with_default("false")
.forbids(NetworkTargetType::Intranet);

/// Poll interval for job state checks
pub static TIME_TO_WAIT_NEXT_CHECK_MILLIS: ConfigKey = ConfigKey::new(
    ids::TIME_TO_WAIT_NEXT_CHECK_MILLIS,
    "Time to wait until next job state check, in milliseconds. -1 uses the install default",
)
.internal()
.with_default("-1");

/// Job timeout
pub static TIMEOUT_MINUTES: ConfigKey = ConfigKey::new(
    ids::TIMEOUT_MINUTES,
    "Time to wait before the job is treated as timed out, in minutes. -1 uses the install default",
)
.internal()
.with_default("-1");

/// Trust untrusted server certificates
pub static TRUST_ALL_CERTIFICATES: ConfigKey = ConfigKey::new(
    ids::TRUST_ALL_CERTIFICATES,
    "When true, a PDS server with an untrusted certificate is accepted",
)
.internal()
.with_default("false");

/// Product identifier
pub static PRODUCT_IDENTIFIER: ConfigKey = ConfigKey::new(
    ids::PRODUCT_IDENTIFIER,
    "Product identifier used on PDS side",
);

/// Storage reuse flag
pub static USE_SECHUB_STORAGE: ConfigKey = ConfigKey::new(
    ids::USE_SECHUB_STORAGE,
    "When true, the PDS reads job data from the shared storage",
)
.with_default("false");

/// Shared storage path
pub static SECHUB_STORAGE_PATH: ConfigKey = ConfigKey::new(
    ids::SECHUB_STORAGE_PATH,
    "Storage path of the shared job storage, computed per project",
);

/// Mapping identifiers to inject
pub static USE_SECHUB_MAPPINGS: ConfigKey = ConfigKey::new(
    ids::USE_SECHUB_MAPPINGS,
    "Comma separated mapping identifiers whose JSON is sent as job parameter",
);

/// Script certificate trust
pub static SCRIPT_TRUSTALL_CERTIFICATES_ENABLED: ConfigKey = ConfigKey::new(
    ids::SCRIPT_TRUSTALL_CERTIFICATES_ENABLED,
    "When true, the launcher script accepts untrusted certificates",
)
.with_default("false");

/// Supported data types
pub static SUPPORTED_DATATYPES: ConfigKey = ConfigKey::new(
    ids::SUPPORTED_DATATYPES,
    "Comma separated list of supported data types",
);

/// File include patterns
pub static FILEFILTER_INCLUDES: ConfigKey =
    ConfigKey::new(ids::FILEFILTER_INCLUDES, "Comma separated include patterns");

/// File exclude patterns
pub static FILEFILTER_EXCLUDES: ConfigKey =
    ConfigKey::new(ids::FILEFILTER_EXCLUDES, "Comma separated exclude patterns");

/// Keys evaluated by the executor itself
pub static EXECUTOR_KEYS: &[&ConfigKey] = &[
    &FORBIDDEN_TARGET_TYPE_INTERNET,
    &FORBIDDEN_TARGET_TYPE_INTRANET,
    &TIME_TO_WAIT_NEXT_CHECK_MILLIS,
    &TIMEOUT_MINUTES,
    &TRUST_ALL_CERTIFICATES,
];

/// Keys describing the PDS job configuration
pub static CONFIG_DATA_KEYS: &[&ConfigKey] = &[
    &PRODUCT_IDENTIFIER,
    &USE_SECHUB_STORAGE,
    &SECHUB_STORAGE_PATH,
    &USE_SECHUB_MAPPINGS,
    &SCRIPT_TRUSTALL_CERTIFICATES_ENABLED,
    &SUPPORTED_DATATYPES,
    &FILEFILTER_INCLUDES,
    &FILEFILTER_EXCLUDES,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executor_keys_are_internal() {
        assert!(EXECUTOR_KEYS.iter().all(|k| !k.is_sent_to_remote()));
    }

    #[test]
    fn config_data_keys_are_sent() {
        assert!(CONFIG_DATA_KEYS.iter().all(|k| k.is_sent_to_remote()));
    }

    #[test]
    fn only_forbidden_keys_are_tagged() {
        let tagged: Vec<_> = EXECUTOR_KEYS
            .iter()
            .chain(CONFIG_DATA_KEYS)
            .filter_map(|k| k.forbidden_target())
            .collect();
        assert_eq!(
            tagged,
            vec![NetworkTargetType::Internet, NetworkTargetType::Intranet]
        );
    }
}
