// Pure decoders for Turbonomic JSON bodies.

use super::models::{Group, SearchResponse};
use crate::error::Error;

/// Decode a search response into its groups.
pub fn parse_group_search(json: &[u8]) -> Result<Vec<Group>, Error> {
    let resp: SearchResponse =
        serde_json::from_slice(json).map_err(|e| Error::deserialization(e, json))?;
    Ok(resp.into_groups())
}

/// Find the group whose display name is exactly `name` and return its UUID.
///
/// Search is a substring match on the server, so the first hit is not
/// necessarily ours.
pub fn group_uuid(json: &[u8], name: &str) -> Result<String, Error> {
    parse_group_search(json)?
        .into_iter()
        .find(|g| g.display_name == name && !g.uuid.is_empty())
        .map(|g| g.uuid)
        .ok_or_else(|| Error::GroupNotFound { name: name.into() })
}
