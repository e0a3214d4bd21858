pub mod resolver_config;

pub use resolver_config::{LayoutConfig, ResolverConfig, SeoConfig};
