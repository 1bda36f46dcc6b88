// ── Syncer ──
//
// Walk Candid, then search Turbonomic for the target group and replace its
// criteria with the leaf filter derived from the walk.

use linkdown_api::TurboClient;
use linkdown_api::turbo::{self, GroupUpdate};
use tracing::{debug, info};

use crate::config::{SyncConfig, SyncOptions};
use crate::error::CoreError;
use crate::report::{SyncReport, WalkReport};
use crate::walk::Walker;

/// Drives one Candid -> Turbonomic sync.
pub struct Syncer {
    walker: Walker,
    turbo: TurboClient,
}

impl Syncer {
    /// Build both HTTP clients from `config`.
    pub fn new(config: &SyncConfig) -> Result<Self, CoreError> {
        let walker = Walker::new(&config.candid, config.options.clone())?;
        let turbo = TurboClient::new(
            config.turbo.url.clone(),
            config.turbo.auth(),
            &config.turbo.transport(),
        )?;
        Ok(Self::with_parts(walker, turbo))
    }

    /// Use a pre-built walker and Turbonomic client.
    pub fn with_parts(walker: Walker, turbo: TurboClient) -> Self {
        Self { walker, turbo }
    }

    pub fn options(&self) -> &SyncOptions {
        self.walker.options()
    }

    /// Walk only; see [`Walker::collect_interfaces`].
    pub async fn collect_interfaces(&self) -> Result<WalkReport, CoreError> {
        self.walker.collect_interfaces().await
    }

    /// Walk Candid, then replace the Turbonomic group's criteria with the
    /// resulting leaf filter. With `dry_run` the group is still resolved but
    /// nothing is written.
    ///
    /// A walk that found no interfaces but skipped something is refused
    /// with [`CoreError::IncompleteWalk`]; it would clear the group.
    pub async fn sync(&self, dry_run: bool) -> Result<SyncReport, CoreError> {
        let walk = self.walker.collect_interfaces().await?;
        if walk.interfaces.is_empty() && !walk.skipped.is_empty() {
            return Err(CoreError::IncompleteWalk {
                skipped: walk.skipped.len(),
            });
        }
        let template = &self.options().group;

        let search = self.turbo.search_group(&template.name).await?;
        let group_uuid = turbo::group_uuid(&search, &template.name)?;
        info!(group = %template.name, uuid = %group_uuid, "group resolved");

        let dns = walk.interface_dns();
        let update = GroupUpdate::from_dns(template, &dns)?;

        if dry_run {
            info!(filter = update.filter(), "dry run; group not updated");
        } else {
            let resp = self.turbo.put_group(&group_uuid, &update).await?;
            match turbo::parse_group_search(&resp) {
                Ok(groups) => {
                    for g in groups {
                        info!(uuid = %g.uuid, members = g.members_count, "group updated");
                    }
                }
                Err(_) => debug!(
                    response = %String::from_utf8_lossy(&resp),
                    "group updated; response not decoded"
                ),
            }
        }

        Ok(SyncReport {
            walk,
            group_uuid,
            update,
            applied: !dry_run,
        })
    }
}
