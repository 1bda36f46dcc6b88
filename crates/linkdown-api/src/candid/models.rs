// Candid response types
//
// Every Candid response is an XML document whose root wraps a
// `<ResponseBean><value>…</value></ResponseBean>` pair. List endpoints put
// one `<data>` element per entry inside `value`, followed by a
// `<data_summary>`; the event-detail endpoint puts a single `<data>` there.
// Only the fields the walk needs are required; the rest are optional and
// kept for logging.

use serde::Deserialize;

use super::{ASSURED_NETWORKS_PATH, SMART_EVENTS_PATH};

// ── Envelope ─────────────────────────────────────────────────────────

/// Outer document. The root element's own name is not checked.
#[derive(Debug, Deserialize)]
pub struct Envelope<V> {
    #[serde(rename = "ResponseBean")]
    pub response_bean: Option<ResponseBean<V>>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseBean<V> {
    pub value: Option<V>,
}

impl<V> Envelope<V> {
    pub(crate) fn into_value(self) -> Option<V> {
        self.response_bean.and_then(|bean| bean.value)
    }
}

/// Paging metadata attached to list responses.
///
/// Only the first page is ever requested; `has_more_data` is surfaced so the
/// caller can report truncation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSummary {
    pub total_count: Option<u64>,
    pub has_more_data: Option<bool>,
    pub page_size: Option<u64>,
    pub current_page_number: Option<u64>,
    pub total_page_count: Option<u64>,
}

impl DataSummary {
    pub fn has_more(&self) -> bool {
        self.has_more_data.unwrap_or(false)
    }
}

// ── Fabrics ──────────────────────────────────────────────────────────

/// `GET /api/v1/assured-networks/aci-fabric`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FabricList {
    #[serde(rename = "data", default)]
    pub fabrics: Vec<Fabric>,
    pub data_summary: Option<DataSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fabric {
    #[serde(default)]
    pub uuid: String,
    pub unique_name: Option<String>,
    pub status: Option<String>,
    pub assured_network_type: Option<String>,
    pub operational_mode: Option<String>,
    pub active: Option<String>,
}

impl Fabric {
    /// Base path for this fabric's sub-resources.
    pub fn path(&self) -> String {
        format!("{ASSURED_NETWORKS_PATH}/{}", self.uuid)
    }
}

impl FabricList {
    /// Request paths for every fabric with a usable UUID, in document order.
    pub fn paths(&self) -> Vec<String> {
        self.fabrics
            .iter()
            .filter(|f| !f.uuid.is_empty())
            .map(Fabric::path)
            .collect()
    }

    pub fn has_more(&self) -> bool {
        self.data_summary.as_ref().is_some_and(DataSummary::has_more)
    }
}

// ── Smart events ─────────────────────────────────────────────────────

/// `GET {fabric}/smart-events`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SmartEventList {
    #[serde(rename = "data", default)]
    pub events: Vec<SmartEvent>,
    pub data_summary: Option<DataSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmartEvent {
    #[serde(default)]
    pub uuid: String,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub mnemonic: Option<String>,
    #[serde(rename = "eventCode")]
    pub event_code: Option<String>,
    pub severity: Option<String>,
}

impl SmartEventList {
    /// Detail paths for every event with a usable UUID, scoped under `fabric_path`.
    pub fn paths(&self, fabric_path: &str) -> Vec<String> {
        self.events
            .iter()
            .filter(|e| !e.uuid.is_empty())
            .map(|e| format!("{fabric_path}{SMART_EVENTS_PATH}/{}", e.uuid))
            .collect()
    }

    pub fn has_more(&self) -> bool {
        self.data_summary.as_ref().is_some_and(DataSummary::has_more)
    }
}

// ── Event detail ─────────────────────────────────────────────────────

/// `GET {fabric}/smart-events/{uuid}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDetailValue {
    pub data: Option<EventDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventDetail {
    pub category: Option<String>,
    pub mnemonic: Option<String>,
    pub severity: Option<String>,
    pub pod: Option<String>,
    #[serde(rename = "nodeName")]
    pub node_name: Option<String>,
    #[serde(rename = "interfaceSummary")]
    pub interface_summary: Option<InterfaceSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceSummary {
    #[serde(default)]
    pub dn: String,
    pub name: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}
