use crate::domain::model::{BusinessOverride, SeedPage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only catalogue lookup. One seed record and at most one override record
/// per slug; the engine never writes through this port.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get_seed(&self, slug: &str) -> Result<Option<SeedPage>>;
    async fn get_override(&self, slug: &str) -> Result<Option<BusinessOverride>>;
}
