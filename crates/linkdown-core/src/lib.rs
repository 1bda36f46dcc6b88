// linkdown-core: Orchestrates the Candid -> Turbonomic link-down sync.

pub mod config;
pub mod error;
pub mod report;
pub mod sync;
pub mod walk;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{FailurePolicy, ServiceConfig, SyncConfig, SyncOptions, TlsVerification};
pub use error::CoreError;
pub use report::{Interface, SkippedItem, SyncReport, WalkReport};
pub use sync::Syncer;
pub use walk::Walker;

pub use linkdown_api::turbo::GroupUpdate;
pub use linkdown_api::{GroupTemplate, LeafToken};
