// Run results, serializable for the binary's JSON output.

use linkdown_api::LeafToken;
use linkdown_api::turbo::GroupUpdate;
use serde::Serialize;

/// One link-down interface found during the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    /// Path of the smart event that reported it.
    pub event: String,
    pub dn: String,
    pub leaf: LeafToken,
}

/// A fabric or event left out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedItem {
    pub path: String,
    pub reason: String,
}

/// Outcome of walking fabrics -> smart events -> event details.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WalkReport {
    /// In fabric order, then event order within each fabric.
    pub interfaces: Vec<Interface>,
    pub fabrics: usize,
    pub events: usize,
    /// Events whose detail carried no interface DN.
    pub empty_dns: usize,
    pub skipped: Vec<SkippedItem>,
    /// Some list response said more pages exist; only the first was read.
    pub truncated: bool,
}

impl WalkReport {
    pub fn interface_dns(&self) -> Vec<String> {
        self.interfaces.iter().map(|i| i.dn.clone()).collect()
    }

    pub fn leaf_tokens(&self) -> Vec<LeafToken> {
        self.interfaces.iter().map(|i| i.leaf.clone()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && !self.truncated
    }
}

/// Outcome of a full sync.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub walk: WalkReport,
    pub group_uuid: String,
    /// The body sent (or, on a dry run, that would have been sent).
    pub update: GroupUpdate,
    /// `false` on a dry run.
    pub applied: bool,
}

impl SyncReport {
    pub fn filter(&self) -> &str {
        self.update.filter()
    }
}
