// Interface DN -> leaf-switch token transform.
//
// An ACI interface DN looks like `topology/pod-1/node-101/sys/phys-[eth1/5]`.
// The third `/`-separated segment names the switch node; rewriting `node`
// to `leaf` in that segment yields the token Turbonomic's `pmsBySwitch`
// filter matches on (`leaf-101`).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Index of the switch-node segment within a DN.
const NODE_SEGMENT: usize = 2;

/// Separator between tokens in a member filter expression (logical OR).
pub const FILTER_SEPARATOR: &str = "|";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeafError {
    #[error("interface DN '{dn}' has {segments} segment(s), need at least 3")]
    TooFewSegments { dn: String, segments: usize },
}

/// A leaf-switch identifier derived from an interface DN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LeafToken(String);

impl LeafToken {
    /// Derive the token from the DN's third path segment.
    ///
    /// Every occurrence of `node` in that segment is rewritten, not just a
    /// leading one: `node-101` and `nodenode-1` become `leaf-101` and
    /// `leafleaf-1` respectively.
    pub fn from_dn(dn: &str) -> Result<Self, LeafError> {
        match dn.split('/').nth(NODE_SEGMENT) {
            Some(segment) => Ok(Self(segment.replace("node", "leaf"))),
            None => Err(LeafError::TooFewSegments {
                dn: dn.to_owned(),
                segments: dn.split('/').count(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeafToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LeafToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive a token for every DN, in order. Fails on the first malformed DN.
pub fn leaf_tokens<S: AsRef<str>>(dns: &[S]) -> Result<Vec<LeafToken>, LeafError> {
    dns.iter().map(|dn| LeafToken::from_dn(dn.as_ref())).collect()
}

/// Join tokens into the `a|b|c` filter value. No tokens yields `""`.
pub fn member_filter(tokens: &[LeafToken]) -> String {
    tokens
        .iter()
        .map(LeafToken::as_str)
        .collect::<Vec<_>>()
        .join(FILTER_SEPARATOR)
}
