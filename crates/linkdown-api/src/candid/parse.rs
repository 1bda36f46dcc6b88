// Pure decoders for Candid XML bodies.
//
// Nothing here touches the network; each function takes a raw body and
// returns the identifiers needed for the next request.

use serde::de::DeserializeOwned;

use super::models::{Envelope, EventDetailValue, FabricList, SmartEventList};
use crate::error::Error;

fn decode<V: DeserializeOwned>(xml: &[u8]) -> Result<Option<V>, Error> {
    let envelope: Envelope<V> =
        quick_xml::de::from_reader(xml).map_err(|e| Error::deserialization(e, xml))?;
    Ok(envelope.into_value())
}

/// Decode the fabric list. A missing `value` or `data` yields an empty list.
pub fn parse_fabric_list(xml: &[u8]) -> Result<FabricList, Error> {
    Ok(decode(xml)?.unwrap_or_default())
}

/// Fabric base paths (`/api/v1/assured-networks/{uuid}`), in document order.
pub fn fabric_paths(xml: &[u8]) -> Result<Vec<String>, Error> {
    Ok(parse_fabric_list(xml)?.paths())
}

/// Decode a fabric's smart-event list.
pub fn parse_event_list(xml: &[u8]) -> Result<SmartEventList, Error> {
    Ok(decode(xml)?.unwrap_or_default())
}

/// Event detail paths (`{fabric_path}/smart-events/{uuid}`), in document order.
pub fn event_paths(xml: &[u8], fabric_path: &str) -> Result<Vec<String>, Error> {
    Ok(parse_event_list(xml)?.paths(fabric_path))
}

/// Extract `interfaceSummary.dn` from an event detail.
///
/// An absent summary or empty `dn` is not an error and yields `""`.
pub fn interface_dn(xml: &[u8]) -> Result<String, Error> {
    let value: Option<EventDetailValue> = decode(xml)?;
    Ok(value
        .and_then(|v| v.data)
        .and_then(|d| d.interface_summary)
        .map(|s| s.dn)
        .unwrap_or_default())
}
