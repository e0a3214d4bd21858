pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::memory::InMemoryStore;
pub use crate::config::ResolverConfig;
pub use crate::core::engine::PageEngine;
pub use crate::core::layout::select_layout;
pub use crate::core::seo::SeoPayload;
pub use crate::domain::model::{
    BusinessOverride, ExternalResource, Faq, PageStatus, RelatedService, ResolvedPage, Section,
    SeedPage,
};
pub use crate::domain::ports::ContentStore;
pub use crate::utils::error::{ResolveError, Result};
