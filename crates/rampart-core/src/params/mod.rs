//! Request parameter structs for management operations.
//!
//! Each operation has a statically-defined parameter struct that validates
//! its fields when constructed, so a malformed request is rejected before
//! any network call. The structs serialize directly into the JSON bodies
//! the management API expects (kebab-case wire keys).

mod access_rule;
mod logs;
mod objects;
mod policy;
mod threat;

pub use access_rule::AccessRuleParams;
pub use logs::LogQueryParams;
pub use objects::{GroupParams, HostParams, NetworkParams, ServiceParams};
pub use policy::InstallPolicyParams;
pub use threat::ThreatExceptionParams;
