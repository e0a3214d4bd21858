use serde::{Deserialize, Serialize};

use crate::core::seo::SeoPayload;

/// Publication state of a seed page. Draft pages are invisible to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Active,
    Draft,
}

/// Typed content block. The `type` discriminator in the catalogue data maps
/// onto this enum so renderers can exhaustively switch over block kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    Guide { heading: String, content: String },
    Comparison { heading: String, content: String },
    LocalInfo { heading: String, content: String },
    Checklist { heading: String, items: Vec<String> },
    Prevention { heading: String, items: Vec<String> },
    Services { heading: String, items: Vec<String> },
}

impl Section {
    pub fn heading(&self) -> &str {
        match self {
            Section::Guide { heading, .. }
            | Section::Comparison { heading, .. }
            | Section::LocalInfo { heading, .. }
            | Section::Checklist { heading, .. }
            | Section::Prevention { heading, .. }
            | Section::Services { heading, .. } => heading,
        }
    }
}

/// Question/answer pair. Authored order is meaningful and flows through to the
/// FAQ structured data unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalResource {
    pub name: String,
    pub url: String,
}

/// Immutable authored content record, one per slug. Read-only to this engine.
/// Field names follow the catalogue's camelCase JSON shape on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedPage {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    /// Preferred layout variant (1..=N). A hint, not binding: out-of-range
    /// values are clamped, absent values fall back to the slug hash.
    #[serde(default)]
    pub layout_hint: Option<u8>,
    pub icon: String,
    pub icon_color: String,
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: Option<String>,
    pub meta_keywords: String,
    pub hero_content: String,
    pub local_context: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub related_services: Vec<String>,
    #[serde(default)]
    pub external_resources: Vec<ExternalResource>,
    pub status: PageStatus,
}

/// Override record created when a business claims a page. Every field except
/// `slug` and `claimed_business_id` is optional: `None` means "inherit the
/// seed value", never "delete it".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOverride {
    pub slug: String,
    pub claimed_business_id: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub hero_content: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub external_resources: Option<Vec<ExternalResource>>,
}

/// Output of the merge resolver: seed content with override fields applied,
/// before layout selection, relation expansion and SEO projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPage {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub layout_hint: Option<u8>,
    pub icon: String,
    pub icon_color: String,
    pub meta_title: String,
    pub meta_description: Option<String>,
    pub meta_keywords: String,
    pub hero_content: String,
    pub local_context: String,
    pub sections: Vec<Section>,
    pub faqs: Vec<Faq>,
    pub related_services: Vec<String>,
    pub external_resources: Vec<ExternalResource>,
    pub claimed_business_id: Option<String>,
    pub business_name: Option<String>,
    pub phone: Option<String>,
}

/// Expanded cross-reference to another active page in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedService {
    pub slug: String,
    pub title: String,
}

/// Final render-ready representation of a page for a single request. Derived,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub layout: u8,
    pub icon: String,
    pub icon_color: String,
    pub hero_content: String,
    pub local_context: String,
    pub sections: Vec<Section>,
    pub faqs: Vec<Faq>,
    pub related_services: Vec<RelatedService>,
    pub external_resources: Vec<ExternalResource>,
    pub claimed_business_id: Option<String>,
    pub seo: SeoPayload,
}

impl ResolvedPage {
    /// 將合併結果與各元件的輸出組合成最終頁面
    pub fn assemble(
        merged: MergedPage,
        layout: u8,
        related_services: Vec<RelatedService>,
        external_resources: Vec<ExternalResource>,
        seo: SeoPayload,
    ) -> Self {
        Self {
            slug: merged.slug,
            title: merged.title,
            category: merged.category,
            subcategory: merged.subcategory,
            layout,
            icon: merged.icon,
            icon_color: merged.icon_color,
            hero_content: merged.hero_content,
            local_context: merged.local_context,
            sections: merged.sections,
            faqs: merged.faqs,
            related_services,
            external_resources,
            claimed_business_id: merged.claimed_business_id,
            seo,
        }
    }
}
