// Candid HTTP client
//
// Wraps `reqwest::Client` with basic auth, XML content negotiation and
// host-relative path construction. Every method returns the raw body;
// decoding lives in `candid::parse`.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;
use url::Url;

use super::{ACI_FABRIC_PATH, ASSURED_NETWORKS_PATH, SMART_EVENTS_PATH};
use crate::error::Error;
use crate::transport::{self, BasicAuth, TransportConfig};

const XML: &str = "application/xml";

/// Client for the Candid assurance API.
pub struct CandidClient {
    http: reqwest::Client,
    base_url: Url,
    auth: BasicAuth,
    timeout: Duration,
}

impl CandidClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the appliance root, e.g. `https://candid.example`.
    pub fn new(base_url: Url, auth: BasicAuth, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url, auth, transport.timeout))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        auth: BasicAuth,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            base_url,
            auth,
            timeout,
        }
    }

    /// `GET /api/v1/assured-networks/aci-fabric`
    pub async fn fetch_fabric_list(&self) -> Result<Bytes, Error> {
        debug!("listing fabrics");
        self.get(&format!("{ASSURED_NETWORKS_PATH}{ACI_FABRIC_PATH}"))
            .await
    }

    /// `GET {fabric_path}/smart-events`
    pub async fn fetch_event_list(&self, fabric_path: &str) -> Result<Bytes, Error> {
        debug!(fabric = fabric_path, "listing smart events");
        self.get(&format!("{fabric_path}{SMART_EVENTS_PATH}")).await
    }

    /// `GET {event_path}`
    pub async fn fetch_event_detail(&self, event_path: &str) -> Result<Bytes, Error> {
        debug!(event = event_path, "fetching event detail");
        self.get(event_path).await
    }

    async fn get(&self, path: &str) -> Result<Bytes, Error> {
        let url = transport::join_path(&self.base_url, path)?;
        debug!("GET {}", url);

        let req = self
            .auth
            .apply(self.http.get(url.clone()))
            .header(CONTENT_TYPE, XML)
            .header(ACCEPT, XML);

        transport::execute(req, &url, self.timeout).await
    }
}
