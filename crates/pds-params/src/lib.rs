//! PDS Job Parameters
//!
//! Decides which executor configuration entries are sent to a PDS.
//!
//! # Core Concepts
//!
//! - [`resolve`]: filter raw configuration against a [`pds_keys::KeyRegistry`]
//! - [`JobParameterFactory`]: full job parameter creation (filter, storage
//!   path injection, mapping expansion)
//! - [`is_reusing_storage`]: opt-in shared storage detection
//! - [`MappingStore`]: external repository of [`MappingDocument`]s
//!
//! # Example
//!
//! ```rust,ignore
//! use pds_params::{JobParameterFactory, RawConfiguration};
//!
//! let factory = JobParameterFactory::new(&store);
//! let params = factory.create(&raw, "my-project");
//! for (key, value) in &params {
//!     println!("{key}={value}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod mapping;
mod resolved;
mod resolver;
mod storage;

pub use mapping::{
    MappingData, MappingDocument, MappingEntry, MappingError, MappingStore, EMPTY_MAPPING_JSON,
};
pub use resolved::{RawConfiguration, ResolvedParameters};
pub use resolver::{comma_separated, resolve, JobParameterFactory};
pub use storage::{
    is_reusing_storage, is_reusing_storage_for, is_script_trusting_all_certificates,
    storage_path_for,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
