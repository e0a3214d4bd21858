use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::model::{BusinessOverride, SeedPage};
use crate::domain::ports::ContentStore;
use crate::utils::error::{ResolveError, Result};
use crate::utils::validation::validate_non_empty_string;

/// In-memory content store backed by a JSON seed catalogue.
///
/// Doubles as the file-based store variant and the test harness. Lookups are
/// infallible clones; the async port signature exists for parity with
/// database/CMS backed stores.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    seeds: HashMap<String, SeedPage>,
    overrides: HashMap<String, BusinessOverride>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalogue from a JSON array of seed records.
    pub fn from_json_str(catalogue: &str) -> Result<Self> {
        let seeds: Vec<SeedPage> =
            serde_json::from_str(catalogue).map_err(ResolveError::SerializationError)?;
        let mut store = Self::new();
        for seed in seeds {
            store.insert_seed(seed);
        }
        Ok(store)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ResolveError::IoError)?;
        Self::from_json_str(&content)
    }

    /// Insert a seed record. The raw catalogue contains duplicate slugs, so
    /// this is last-wins: a later record replaces an earlier one for the same
    /// slug, with a warning naming the shadowed record. Records without a
    /// usable slug are unaddressable and get skipped.
    pub fn insert_seed(&mut self, seed: SeedPage) {
        if validate_non_empty_string("seed.slug", &seed.slug).is_err() {
            tracing::warn!("Skipping seed record '{}' with empty slug", seed.title);
            return;
        }
        if let Some(previous) = self.seeds.insert(seed.slug.clone(), seed) {
            tracing::warn!(
                "Duplicate slug '{}' in catalogue, earlier record shadowed",
                previous.slug
            );
        }
    }

    /// Attach an override for a claimed page. At most one per slug.
    pub fn insert_override(&mut self, claim: BusinessOverride) {
        self.overrides.insert(claim.slug.clone(), claim);
    }

    /// Clear a lapsed claim; the page reverts to pure seed output on the next
    /// resolution.
    pub fn remove_override(&mut self, slug: &str) -> Option<BusinessOverride> {
        self.overrides.remove(slug)
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn get_seed(&self, slug: &str) -> Result<Option<SeedPage>> {
        Ok(self.seeds.get(slug).cloned())
    }

    async fn get_override(&self, slug: &str) -> Result<Option<BusinessOverride>> {
        Ok(self.overrides.get(slug).cloned())
    }
}
