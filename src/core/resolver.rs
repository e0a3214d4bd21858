use crate::domain::model::{BusinessOverride, MergedPage, PageStatus, SeedPage};
use crate::utils::error::{ResolveError, Result};

/// Merge a seed page with an optional claiming business's override.
///
/// Field-by-field shallow merge: an override field supersedes the seed value
/// only when it is `Some`; absent fields inherit. A partial override can never
/// blank unrelated seed content. Draft seeds fail with `NotFound` — a draft
/// page does not exist as far as consumers are concerned, it is not "resolved
/// but unpublished".
///
/// Pure function of its two inputs: no clock, no globals, so output for a
/// fixed `(seed, claim)` pair is byte-identical across calls.
pub fn resolve(seed: &SeedPage, claim: Option<&BusinessOverride>) -> Result<MergedPage> {
    if seed.status == PageStatus::Draft {
        return Err(ResolveError::NotFound {
            slug: seed.slug.clone(),
        });
    }

    let mut merged = MergedPage {
        slug: seed.slug.clone(),
        title: seed.title.clone(),
        category: seed.category.clone(),
        subcategory: seed.subcategory.clone(),
        layout_hint: seed.layout_hint,
        icon: seed.icon.clone(),
        icon_color: seed.icon_color.clone(),
        meta_title: seed.meta_title.clone(),
        meta_description: seed.meta_description.clone(),
        meta_keywords: seed.meta_keywords.clone(),
        hero_content: seed.hero_content.clone(),
        local_context: seed.local_context.clone(),
        sections: seed.sections.clone(),
        faqs: seed.faqs.clone(),
        related_services: seed.related_services.clone(),
        external_resources: seed.external_resources.clone(),
        claimed_business_id: None,
        business_name: None,
        phone: None,
    };

    if let Some(claim) = claim {
        merged.claimed_business_id = Some(claim.claimed_business_id.clone());
        merged.business_name = claim.business_name.clone();
        merged.phone = claim.phone.clone();

        if let Some(hero) = &claim.hero_content {
            merged.hero_content = hero.clone();
        }
        if let Some(meta_title) = &claim.meta_title {
            merged.meta_title = meta_title.clone();
        }
        if let Some(meta_description) = &claim.meta_description {
            merged.meta_description = Some(meta_description.clone());
        }
        if let Some(resources) = &claim.external_resources {
            merged.external_resources = resources.clone();
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ExternalResource, Faq};

    fn seed() -> SeedPage {
        SeedPage {
            slug: "roofing".to_string(),
            title: "Roofing Services".to_string(),
            category: "home-services".to_string(),
            subcategory: "exterior".to_string(),
            layout_hint: Some(2),
            icon: "roof".to_string(),
            icon_color: "#b45309".to_string(),
            meta_title: "Roofing Services Near You".to_string(),
            meta_description: Some("Find trusted local roofers.".to_string()),
            meta_keywords: "roofing, roof repair".to_string(),
            hero_content: "Your roof protects everything under it.".to_string(),
            local_context: "Storm season drives most local demand.".to_string(),
            sections: vec![],
            faqs: vec![Faq {
                question: "How long does a roof last?".to_string(),
                answer: "20 to 50 years depending on material.".to_string(),
            }],
            related_services: vec!["gutter-cleaning".to_string()],
            external_resources: vec![ExternalResource {
                name: "NRCA".to_string(),
                url: "https://www.nrca.net".to_string(),
            }],
            status: PageStatus::Active,
        }
    }

    #[test]
    fn test_unclaimed_page_passes_seed_through() {
        let merged = resolve(&seed(), None).unwrap();

        assert_eq!(merged.title, "Roofing Services");
        assert_eq!(
            merged.meta_description.as_deref(),
            Some("Find trusted local roofers.")
        );
        assert_eq!(merged.claimed_business_id, None);
        assert_eq!(merged.business_name, None);
    }

    #[test]
    fn test_override_field_wins_unset_fields_inherit() {
        let claim = BusinessOverride {
            slug: "roofing".to_string(),
            claimed_business_id: "biz-42".to_string(),
            meta_title: Some("Acme Roofing | Roofing Services".to_string()),
            ..Default::default()
        };

        let merged = resolve(&seed(), Some(&claim)).unwrap();

        assert_eq!(merged.meta_title, "Acme Roofing | Roofing Services");
        // unset override fields inherit the seed values
        assert_eq!(
            merged.meta_description.as_deref(),
            Some("Find trusted local roofers.")
        );
        assert_eq!(merged.hero_content, "Your roof protects everything under it.");
        assert_eq!(merged.external_resources.len(), 1);
    }

    #[test]
    fn test_claimed_business_id_surfaces() {
        let claim = BusinessOverride {
            slug: "roofing".to_string(),
            claimed_business_id: "biz-42".to_string(),
            business_name: Some("Acme Roofing".to_string()),
            phone: Some("+1-555-0134".to_string()),
            ..Default::default()
        };

        let merged = resolve(&seed(), Some(&claim)).unwrap();

        assert_eq!(merged.claimed_business_id.as_deref(), Some("biz-42"));
        assert_eq!(merged.business_name.as_deref(), Some("Acme Roofing"));
        assert_eq!(merged.phone.as_deref(), Some("+1-555-0134"));
    }

    #[test]
    fn test_override_replaces_external_resources_wholesale() {
        let claim = BusinessOverride {
            slug: "roofing".to_string(),
            claimed_business_id: "biz-42".to_string(),
            external_resources: Some(vec![ExternalResource {
                name: "Acme Roofing".to_string(),
                url: "https://acmeroofing.example.com".to_string(),
            }]),
            ..Default::default()
        };

        let merged = resolve(&seed(), Some(&claim)).unwrap();

        assert_eq!(merged.external_resources.len(), 1);
        assert_eq!(merged.external_resources[0].name, "Acme Roofing");
    }

    #[test]
    fn test_draft_seed_is_not_found() {
        let mut draft = seed();
        draft.status = PageStatus::Draft;

        let err = resolve(&draft, None).unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { ref slug } if slug == "roofing"));

        // an override does not make a draft visible
        let claim = BusinessOverride {
            slug: "roofing".to_string(),
            claimed_business_id: "biz-42".to_string(),
            ..Default::default()
        };
        assert!(resolve(&draft, Some(&claim)).is_err());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let claim = BusinessOverride {
            slug: "roofing".to_string(),
            claimed_business_id: "biz-42".to_string(),
            hero_content: Some("Acme has fixed roofs here since 1987.".to_string()),
            ..Default::default()
        };

        let a = resolve(&seed(), Some(&claim)).unwrap();
        let b = resolve(&seed(), Some(&claim)).unwrap();
        assert_eq!(a, b);

        let a_json = serde_json::to_string(&a).unwrap();
        let b_json = serde_json::to_string(&b).unwrap();
        assert_eq!(a_json, b_json);
    }
}
