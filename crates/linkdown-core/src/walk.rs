// ── Walker ──
//
// Single-pass walk: fabrics -> smart events -> event detail -> DN. Fabrics
// are walked one after another; event details within a fabric may be
// fetched with bounded concurrency, but results are consumed in request
// order so the DN list is deterministic.

use futures::stream::{self, StreamExt};
use linkdown_api::{CandidClient, LeafToken, candid};
use tracing::{Instrument, debug, info, info_span, warn};

use crate::config::{FailurePolicy, ServiceConfig, SyncOptions};
use crate::error::CoreError;
use crate::report::{Interface, SkippedItem, WalkReport};

/// Collects link-down interfaces from Candid.
pub struct Walker {
    candid: CandidClient,
    options: SyncOptions,
}

impl Walker {
    /// Build the Candid client from `candid`.
    pub fn new(candid: &ServiceConfig, options: SyncOptions) -> Result<Self, CoreError> {
        let client = CandidClient::new(candid.url.clone(), candid.auth(), &candid.transport())?;
        Ok(Self::with_client(client, options))
    }

    /// Use a pre-built client.
    pub fn with_client(candid: CandidClient, options: SyncOptions) -> Self {
        Self { candid, options }
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Collect every link-down interface DN reported by Candid.
    ///
    /// The fabric list itself must be readable; anything below it is
    /// subject to the configured [`FailurePolicy`].
    pub async fn collect_interfaces(&self) -> Result<WalkReport, CoreError> {
        let body = self.candid.fetch_fabric_list().await?;
        let fabrics = candid::parse_fabric_list(&body)?;

        let mut report = WalkReport::default();
        if fabrics.has_more() {
            warn!("fabric list has more pages; only the first is processed");
            report.truncated = true;
        }

        let paths = fabrics.paths();
        info!(count = paths.len(), "fabrics discovered");

        for fabric in paths {
            report.fabrics += 1;
            self.walk_fabric(&fabric, &mut report)
                .instrument(info_span!("fabric", path = %fabric))
                .await?;
        }

        info!(
            interfaces = report.interfaces.len(),
            events = report.events,
            empty = report.empty_dns,
            skipped = report.skipped.len(),
            "walk complete"
        );
        Ok(report)
    }

    async fn walk_fabric(&self, fabric: &str, report: &mut WalkReport) -> Result<(), CoreError> {
        let events = match self.list_events(fabric).await {
            Ok(list) => {
                if list.has_more() {
                    warn!("smart-event list has more pages; only the first is processed");
                    report.truncated = true;
                }
                list.paths(fabric)
            }
            Err(err) => return self.skip_or_abort(report, fabric, err),
        };
        debug!(count = events.len(), "smart events discovered");

        let mut details = stream::iter(events)
            .map(|event| async move {
                let dn = self.event_dn(&event).await;
                (event, dn)
            })
            .buffered(self.options.concurrency.max(1));

        while let Some((event, result)) = details.next().await {
            report.events += 1;
            match result {
                Ok(dn) if dn.is_empty() => {
                    debug!(event = %event, "event has no interface DN");
                    report.empty_dns += 1;
                }
                Ok(dn) => match LeafToken::from_dn(&dn) {
                    Ok(leaf) => {
                        debug!(event = %event, dn = %dn, leaf = %leaf, "interface collected");
                        report.interfaces.push(Interface { event, dn, leaf });
                    }
                    Err(err) => self.skip_or_abort(report, &event, err.into())?,
                },
                Err(err) => self.skip_or_abort(report, &event, err)?,
            }
        }
        Ok(())
    }

    async fn list_events(&self, fabric: &str) -> Result<candid::SmartEventList, CoreError> {
        let body = self.candid.fetch_event_list(fabric).await?;
        Ok(candid::parse_event_list(&body)?)
    }

    async fn event_dn(&self, event: &str) -> Result<String, CoreError> {
        let body = self.candid.fetch_event_detail(event).await?;
        Ok(candid::interface_dn(&body)?)
    }

    fn skip_or_abort(
        &self,
        report: &mut WalkReport,
        path: &str,
        err: CoreError,
    ) -> Result<(), CoreError> {
        match self.options.policy {
            FailurePolicy::Abort => Err(err),
            FailurePolicy::Skip => {
                warn!(path, error = %err, "skipping");
                report.skipped.push(SkippedItem {
                    path: path.to_owned(),
                    reason: err.to_string(),
                });
                Ok(())
            }
        }
    }
}
