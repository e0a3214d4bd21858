pub mod engine;
pub mod layout;
pub mod relations;
pub mod resolver;
pub mod seo;

pub use crate::domain::model::{
    BusinessOverride, MergedPage, ResolvedPage, SeedPage,
};
pub use crate::domain::ports::ContentStore;
pub use crate::utils::error::Result;
