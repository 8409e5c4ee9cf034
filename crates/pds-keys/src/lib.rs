//! PDS Key Registry
//!
//! Declarative table of the configuration keys a PDS product executor
//! understands.
//!
//! # Core Concepts
//!
//! - [`ConfigKey`]: tagged key record (default, forwarding flag, forbidden zone)
//! - [`KeyRegistry`]: case-insensitive lookup over `'static` key definitions
//! - [`NetworkTargetType`]: network zone used by the forbidden-target tags
//!
//! # Example
//!
//! ```rust
//! use pds_keys::{ids, KeyRegistry};
//!
//! let registry = KeyRegistry::remote_parameters();
//! let key = registry.lookup(ids::TIMEOUT_MINUTES).unwrap();
//! assert!(!key.is_sent_to_remote());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod builtin;
mod key;
mod registry;

pub use builtin::ids;
pub use key::{ConfigKey, NetworkTargetType, ParseTargetTypeError};
pub use registry::KeyRegistry;

/// Parse a flag the way the PDS does: only `true` (any case) is true
#[inline]
#[must_use]
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
