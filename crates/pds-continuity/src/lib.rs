//! PDS Result Continuity
//!
//! Chooses which former scan result a new executor run continues from.
//!
//! # Core Concepts
//!
//! - [`ScanResult`]: immutable outcome of one former run
//! - [`MetaData`]: decoded key/value metadata of a result
//! - [`ContinuityState`]: explicit no-current / has-current slot
//! - [`ResultContinuity`]: per-invocation manager (first-former-result
//!   default, first-match-wins metadata selection)
//!
//! # Example
//!
//! ```rust,ignore
//! use pds_continuity::ResultContinuity;
//!
//! let mut continuity = ResultContinuity::new(former_results, sink);
//! if continuity.select_by_metadata("pds.job.uuid", &job_uuid).is_some() {
//!     // continue the remote job instead of starting a new one
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod context;
mod error;
mod metadata;
mod result;
mod state;

pub use context::ResultContinuity;
pub use error::{PersistError, SinkError};
pub use metadata::{JsonMetaDataDecoder, MetaData, MetaDataDecoder};
pub use result::{ResultHistory, ResultSink, ScanResult};
pub use state::ContinuityState;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
