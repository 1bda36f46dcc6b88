//! `sync` handler.

use std::fmt::Write as _;

use linkdown_core::{SkippedItem, SyncReport, Syncer};
use tabled::Tabled;

use crate::cli::{GlobalOpts, SyncArgs};
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct SkippedRow {
    #[tabled(rename = "Skipped")]
    path: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

impl From<&SkippedItem> for SkippedRow {
    fn from(s: &SkippedItem) -> Self {
        Self {
            path: s.path.clone(),
            reason: s.reason.clone(),
        }
    }
}

fn detail(r: &SyncReport) -> String {
    let walk = &r.walk;
    let mut out = String::new();
    let _ = writeln!(out, "Group:       {} ({})", r.update.display_name, r.group_uuid);
    let _ = writeln!(out, "Filter:      {}", r.filter());
    let _ = writeln!(out, "Fabrics:     {}", walk.fabrics);
    let _ = writeln!(
        out,
        "Events:      {} ({} interfaces, {} without DN)",
        walk.events,
        walk.interfaces.len(),
        walk.empty_dns
    );
    let _ = writeln!(out, "Skipped:     {}", walk.skipped.len());
    if walk.truncated {
        let _ = writeln!(out, "Truncated:   yes (only first page of a list was read)");
    }
    let applied = if r.applied { "yes" } else { "no (dry run)" };
    let _ = write!(out, "Applied:     {applied}");

    if !walk.skipped.is_empty() {
        let rows: Vec<SkippedRow> = walk.skipped.iter().map(SkippedRow::from).collect();
        let _ = write!(out, "\n\n{}", output::render_table(&rows));
    }
    out
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: &SyncArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = super::load(global)?;
    let config = linkdown_config::resolve(&cfg, &super::overrides(global))?;
    let syncer = Syncer::new(&config)?;

    let report = syncer.sync(args.dry_run).await?;

    let out = output::render_single(&global.output, &report, detail, |r| r.filter().to_owned())?;
    output::print_output(&out, global.quiet)
}
