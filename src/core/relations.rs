use std::collections::HashSet;

use crate::domain::model::{ExternalResource, PageStatus, RelatedService};
use crate::domain::ports::ContentStore;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;

/// Expand related-service slugs into `{slug, title}` references.
///
/// Authored cross-links cannot be held to referential integrity, so dangling
/// slugs and links to draft pages are dropped, not errored. Duplicate slugs
/// collapse to the first occurrence, preserving input order. Store failures
/// (as opposed to missing records) still propagate.
pub async fn expand<S: ContentStore + ?Sized>(
    related_slugs: &[String],
    store: &S,
) -> Result<Vec<RelatedService>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut expanded = Vec::new();

    for slug in related_slugs {
        if !seen.insert(slug.as_str()) {
            continue;
        }
        match store.get_seed(slug).await? {
            Some(seed) if seed.status == PageStatus::Active => {
                expanded.push(RelatedService {
                    slug: seed.slug,
                    title: seed.title,
                });
            }
            Some(_) => {
                tracing::debug!("Related service '{}' is a draft, dropping", slug);
            }
            None => {
                tracing::debug!("Related service '{}' has no seed page, dropping", slug);
            }
        }
    }

    Ok(expanded)
}

/// Validate authored external resources, dropping malformed entries.
///
/// One bad link must never break page resolution: anything that is not an
/// absolute http(s) URL is dropped with a warning and the rest proceed.
pub fn expand_external(resources: Vec<ExternalResource>) -> Vec<ExternalResource> {
    resources
        .into_iter()
        .filter(
            |resource| match validate_url("externalResources.url", &resource.url) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Dropping external resource '{}': {}", resource.name, e);
                    false
                }
            },
        )
        .collect()
}
