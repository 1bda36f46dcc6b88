// Candid assurance API (read-only source)
//
// Three-level hierarchy: fabrics -> smart events -> event detail. The
// client returns raw XML bodies; `parse` turns them into the paths for
// the next level down.

pub mod client;
pub mod models;
pub mod parse;

pub use client::CandidClient;
pub use models::{DataSummary, EventDetail, Fabric, FabricList, SmartEvent, SmartEventList};
pub use parse::{
    event_paths, fabric_paths, interface_dn, parse_event_list, parse_fabric_list,
};

/// Root of every assured-network resource.
pub const ASSURED_NETWORKS_PATH: &str = "/api/v1/assured-networks";
/// Fabric collection, relative to [`ASSURED_NETWORKS_PATH`].
pub const ACI_FABRIC_PATH: &str = "/aci-fabric";
/// Smart-event collection, relative to a fabric path.
pub const SMART_EVENTS_PATH: &str = "/smart-events";
