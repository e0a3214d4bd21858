use serde::{Deserialize, Serialize};

use crate::config::SeoConfig;
use crate::domain::model::MergedPage;

/// Derived head-tag and structured-data payload for one resolved page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoPayload {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub faq_schema: FaqPageSchema,
    /// `Some` only for claimed pages. Unclaimed pages carry directory-level
    /// identity, which is a site-wide constant owned by the renderer, so no
    /// business identity is fabricated here.
    pub business_schema: Option<LocalBusinessSchema>,
}

/// schema.org FAQPage structured data. Serializes directly to JSON-LD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqPageSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<FaqQuestionSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqQuestionSchema {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: FaqAnswerSchema,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqAnswerSchema {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub text: String,
}

/// schema.org LocalBusiness block for a claimed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalBusinessSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
}

/// Project the SEO payload from a merged page.
///
/// The FAQ schema mirrors the authored `faqs` order exactly. That ordering is
/// a contract with search engines: no resorting, no deduplication.
pub fn project(page: &MergedPage, config: &SeoConfig) -> SeoPayload {
    let description = derive_description(page, config);

    let faq_schema = FaqPageSchema {
        context: "https://schema.org".to_string(),
        schema_type: "FAQPage".to_string(),
        main_entity: page
            .faqs
            .iter()
            .map(|faq| FaqQuestionSchema {
                schema_type: "Question".to_string(),
                name: faq.question.clone(),
                accepted_answer: FaqAnswerSchema {
                    schema_type: "Answer".to_string(),
                    text: faq.answer.clone(),
                },
            })
            .collect(),
    };

    let business_schema = page.claimed_business_id.as_ref().map(|_| LocalBusinessSchema {
        context: "https://schema.org".to_string(),
        schema_type: "LocalBusiness".to_string(),
        name: page
            .business_name
            .clone()
            .unwrap_or_else(|| page.title.clone()),
        telephone: page.phone.clone(),
    });

    SeoPayload {
        title: page.meta_title.clone(),
        description,
        keywords: page.meta_keywords.clone(),
        faq_schema,
        business_schema,
    }
}

/// Meta description with fallback chain: authored description, then the first
/// sentence(s) of the hero content, then the page title. Never empty.
fn derive_description(page: &MergedPage, config: &SeoConfig) -> String {
    if let Some(description) = &page.meta_description {
        if !description.trim().is_empty() {
            return truncate_on_word_boundary(description, config.description_max_chars);
        }
    }

    if !page.hero_content.trim().is_empty() {
        let lead = leading_sentences(
            &page.hero_content,
            config.description_min_chars,
            config.description_max_chars,
        );
        return truncate_on_word_boundary(&lead, config.description_max_chars);
    }

    truncate_on_word_boundary(&page.title, config.description_max_chars)
}

/// Accumulate whole sentences until the minimum budget is met or the next
/// sentence would exceed the maximum.
fn leading_sentences(text: &str, min_chars: usize, max_chars: usize) -> String {
    let mut out = String::new();
    let mut count = 0usize;

    for sentence in text.split_inclusive(['.', '!', '?']) {
        let len = sentence.chars().count();
        if count > 0 && (count >= min_chars || count + len > max_chars) {
            break;
        }
        out.push_str(sentence);
        count += len;
    }

    if out.is_empty() {
        // no sentence terminator anywhere: take the whole block
        return text.trim().to_string();
    }
    out.trim().to_string()
}

/// Truncate to at most `max_chars` characters, cutting only at whitespace.
/// Counted in chars, not bytes, so multi-byte text never exceeds the cap and
/// never gets sliced mid-character.
fn truncate_on_word_boundary(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }

    let mut out = String::new();
    let mut count = 0usize;

    for word in trimmed.split_whitespace() {
        let word_len = word.chars().count();
        let separator = usize::from(!out.is_empty());
        if count + separator + word_len > max_chars {
            break;
        }
        if separator == 1 {
            out.push(' ');
        }
        out.push_str(word);
        count += separator + word_len;
    }

    if out.is_empty() {
        // first word alone exceeds the budget; hard-cut at a char boundary
        return trimmed.chars().take(max_chars).collect();
    }
    out
}
