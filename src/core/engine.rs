use crate::config::ResolverConfig;
use crate::core::{layout, relations, resolver, seo};
use crate::domain::model::ResolvedPage;
use crate::domain::ports::ContentStore;
use crate::utils::error::{ResolveError, Result};

/// Orchestrates the full resolution pipeline for one slug:
/// store lookup → merge → layout selection → relation expansion → SEO
/// projection. Stateless per call; safe to share across request handlers.
pub struct PageEngine<S: ContentStore> {
    store: S,
    config: ResolverConfig,
}

impl<S: ContentStore> PageEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(store: S, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn resolve_page(&self, slug: &str) -> Result<ResolvedPage> {
        tracing::debug!("Resolving page '{}'", slug);

        let seed = self
            .store
            .get_seed(slug)
            .await?
            .ok_or_else(|| ResolveError::NotFound {
                slug: slug.to_string(),
            })?;
        let claim = self.store.get_override(slug).await?;

        let merged = resolver::resolve(&seed, claim.as_ref())?;

        let layout = layout::select_layout(
            &merged.slug,
            merged.layout_hint,
            self.config.layout.variants,
        );
        let related_services = relations::expand(&merged.related_services, &self.store).await?;
        let external_resources = relations::expand_external(merged.external_resources.clone());
        let seo = seo::project(&merged, &self.config.seo);

        tracing::debug!(
            "Resolved '{}' with layout {} and {} related services",
            slug,
            layout,
            related_services.len()
        );

        Ok(ResolvedPage::assemble(
            merged,
            layout,
            related_services,
            external_resources,
            seo,
        ))
    }
}
