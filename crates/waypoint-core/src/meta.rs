//! Metadata collaborator contract

use crate::routes::Route;
use crate::state::StateAccess;

/// External collaborator that merges route metadata and writes it into the
/// document head. Called exactly once per resolved navigation with the
/// resolved route chain, root to leaf.
pub trait MetadataRefresher: Send + Sync {
    fn refresh_metadata(&self, route_chain: &[&Route], state: &dyn StateAccess);
}

/// For hosts without document metadata (tests, headless embeddings).
pub struct NoopMetadata;

impl MetadataRefresher for NoopMetadata {
    fn refresh_metadata(&self, _route_chain: &[&Route], _state: &dyn StateAccess) {}
}
