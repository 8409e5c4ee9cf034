//! PDS Executor
//!
//! Typed configuration facade and per-run invocation context for product
//! executors delegating scans to a PDS.
//!
//! # Core Concepts
//!
//! - [`ExecutorConfig`]: stored executor configuration (JSON)
//! - [`ExecutorConfigSupport`]: validated, read-only facade with install
//!   setup fallbacks
//! - [`PdsInstallSetup`]: install-level defaults (TOML)
//! - [`ExecutorInvocation`]: one run, owning its result continuity
//!
//! # Example
//!
//! ```rust,ignore
//! use pds_executor::prelude::*;
//!
//! let support = ExecutorConfigSupport::create_and_validate(config, services)?;
//! if support.is_target_type_forbidden(NetworkTargetType::Intranet) {
//!     return Ok(());
//! }
//! let params = support.create_job_parameters("my-project");
//! let poll = support.poll_interval_millis(&setup);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod env;
pub mod error;
pub mod invocation;
pub mod setup;
pub mod support;
pub mod telemetry;
pub mod validation;

pub use config::{ConfigurationSource, Credentials, ExecutorConfig, ExecutorSetup, JobParameter};
pub use env::{EnvironmentVariableSupport, SystemEnvironment};
pub use error::{ExecutorError, InstallSetupError};
pub use invocation::ExecutorInvocation;
pub use setup::{InstallSetup, PdsInstallSetup};
pub use support::{ExecutorConfigSupport, NetworkTargetDataProvider, ServiceCollection, UNSET};
pub use validation::MinimumConfigValidation;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with PDS executors
    pub use crate::{
        ConfigurationSource, ExecutorConfig, ExecutorConfigSupport, ExecutorError,
        ExecutorInvocation, InstallSetup, NetworkTargetDataProvider, PdsInstallSetup,
        ServiceCollection,
    };
    pub use pds_continuity::{ResultContinuity, ScanResult};
    pub use pds_keys::NetworkTargetType;
    pub use pds_params::ResolvedParameters;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
