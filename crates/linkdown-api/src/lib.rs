// linkdown-api: Async clients for the Candid assurance API (source) and
// the Turbonomic REST API (target), plus the pure response parsers and
// the interface-DN -> leaf-switch transform that sits between them.

pub mod candid;
pub mod error;
pub mod leaf;
pub mod transport;
pub mod turbo;

pub use candid::CandidClient;
pub use error::Error;
pub use leaf::{LeafError, LeafToken, leaf_tokens, member_filter};
pub use transport::{BasicAuth, TlsMode, TransportConfig};
pub use turbo::{GroupTemplate, TurboClient};
