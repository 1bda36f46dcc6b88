//! `interfaces` handler: walk Candid only.

use linkdown_core::{Interface, Walker};
use tabled::Tabled;
use tracing::warn;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Leaf")]
    leaf: String,
    #[tabled(rename = "DN")]
    dn: String,
    #[tabled(rename = "Event")]
    event: String,
}

impl From<&Interface> for InterfaceRow {
    fn from(i: &Interface) -> Self {
        Self {
            leaf: i.leaf.to_string(),
            dn: i.dn.clone(),
            event: i.event.clone(),
        }
    }
}

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = super::load(global)?;
    let (candid, options) = linkdown_config::resolve_walk(&cfg, &super::overrides(global))?;
    let walker = Walker::new(&candid, options)?;

    let report = walker.collect_interfaces().await?;
    if !report.is_complete() {
        warn!(
            skipped = report.skipped.len(),
            truncated = report.truncated,
            "interface list is incomplete"
        );
    }

    let out = output::render_list(
        &global.output,
        &report.interfaces,
        |i| InterfaceRow::from(i),
        |i| i.dn.clone(),
    )?;
    output::print_output(&out, global.quiet)
}
