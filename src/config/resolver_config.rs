use crate::utils::error::{ResolveError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine tuning knobs. Everything defaults to the catalogue's production
/// values; a TOML file only needs to name what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub seo: SeoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of presentation variants pages are spread across.
    #[serde(default = "default_variants")]
    pub variants: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoConfig {
    /// Hard cap on meta description length, in characters.
    #[serde(default = "default_description_max")]
    pub description_max_chars: usize,
    /// Target floor when deriving a description from hero content.
    #[serde(default = "default_description_min")]
    pub description_min_chars: usize,
}

fn default_variants() -> u8 {
    5
}

fn default_description_max() -> usize {
    160
}

fn default_description_min() -> usize {
    155
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            variants: default_variants(),
        }
    }
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            description_max_chars: default_description_max(),
            description_min_chars: default_description_min(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            seo: SeoConfig::default(),
        }
    }
}

impl ResolverConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ResolveError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| ResolveError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate_config()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${LAYOUT_VARIANTS})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_positive_number(
            "layout.variants",
            usize::from(self.layout.variants),
            1,
        )?;

        crate::utils::validation::validate_range(
            "seo.description_max_chars",
            self.seo.description_max_chars,
            80,
            300,
        )?;

        if self.seo.description_min_chars > self.seo.description_max_chars {
            return Err(ResolveError::InvalidConfigValueError {
                field: "seo.description_min_chars".to_string(),
                value: self.seo.description_min_chars.to_string(),
                reason: "Minimum cannot exceed description_max_chars".to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
