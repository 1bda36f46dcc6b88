// Turbonomic HTTP client
//
// Same transport mechanics as the Candid client, but JSON in both
// directions. Methods return raw bodies; decoding lives in `turbo::parse`.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, info};
use url::Url;

use super::models::{GroupTemplate, GroupUpdate};
use super::{GROUP_PATH, SEARCH_PATH};
use crate::error::Error;
use crate::transport::{self, BasicAuth, TransportConfig};

const JSON: &str = "application/json";

/// Client for the Turbonomic REST API.
pub struct TurboClient {
    http: reqwest::Client,
    base_url: Url,
    auth: BasicAuth,
    timeout: Duration,
}

impl TurboClient {
    /// Create a new client from a `TransportConfig`.
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

    /// `GET /vmturbo/rest/search?types=Group&q={name}`
    pub async fn search_group(&self, name: &str) -> Result<Bytes, Error> {
        let url = transport::join_path(&self.base_url, SEARCH_PATH)?;
        debug!(group = name, "GET {}", url);

        let req = self
            .auth
            .apply(self.http.get(url.clone()))
            .query(&[("types", "Group"), ("q", name)])
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON);

        transport::execute(req, &url, self.timeout).await
    }

    /// Replace the group's criteria with a `pmsBySwitch`-style filter built
    /// from the leaf tokens of `member_dns`.
    ///
    /// `PUT /vmturbo/rest/group/{uuid}`
    pub async fn update_group<S: AsRef<str>>(
        &self,
        group_uuid: &str,
        member_dns: &[S],
        template: &GroupTemplate,
    ) -> Result<Bytes, Error> {
        let body = GroupUpdate::from_dns(template, member_dns)?;
        self.put_group(group_uuid, &body).await
    }

    /// PUT a pre-built update body.
    pub async fn put_group(&self, group_uuid: &str, body: &GroupUpdate) -> Result<Bytes, Error> {
        let url = transport::join_path(&self.base_url, &format!("{GROUP_PATH}/{group_uuid}"))?;
        info!(group = %body.display_name, filter = body.filter(), "updating group");
        debug!("PUT {}", url);

        let req = self
            .auth
            .apply(self.http.put(url.clone()))
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .json(body);

        transport::execute(req, &url, self.timeout).await
    }
}
