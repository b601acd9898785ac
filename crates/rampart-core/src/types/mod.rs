//! Validated domain types.

mod object_name;
mod protocol;
mod rule;
mod server_url;

pub use object_name::ObjectName;
pub use protocol::Protocol;
pub use rule::{RuleAction, TrackType};
pub use server_url::ServerUrl;
