// Turbonomic REST API (target)
//
// Group lookup by display name, then a criteria replacement on the
// group's UUID.

pub mod client;
pub mod models;
pub mod parse;

pub use client::TurboClient;
pub use models::{Criterion, Group, GroupTemplate, GroupUpdate, Link, Policy};
pub use parse::{group_uuid, parse_group_search};

pub const SEARCH_PATH: &str = "/vmturbo/rest/search";
pub const GROUP_PATH: &str = "/vmturbo/rest/group";
