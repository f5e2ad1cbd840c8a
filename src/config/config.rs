use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "Settings.toml";

pub const DEFAULT_BASE_URL: &str = "https://automationexercise.com";
pub const DEFAULT_LISTING_PATH: &str = "/products";
pub const DEFAULT_CURRENCY_PREFIX: &str = "Rs.";
pub const DEFAULT_DELAY_MS: u64 = 500;
pub const DEFAULT_OUTPUT_PATH: &str = "automationexercise_products.csv";
pub const DEFAULT_MISSING_VALUE: &str = "N/A";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
    pub pacing: PacingConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    pub listing_path: String,
    pub currency_prefix: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfig {
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PacingConfig {
    pub delay_ms: u64,
    pub jitter_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub output_path: String,
    pub missing_value: String,
    pub preview_rows: usize,
}

impl SiteConfig {
    /// URL of the products index page.
    pub fn listing_url(&self) -> String {
        format!("{}{}", self.base_url, self.listing_path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            delay_ms: DEFAULT_DELAY_MS,
            jitter_ms: 0,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            missing_value: DEFAULT_MISSING_VALUE.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(SETTINGS_FILE)
}

/// Layers built-in defaults, the optional settings file and `APP_*` environment
/// variables (e.g. `APP_PACING__DELAY_MS=750`).
pub fn load_config_from(settings_path: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .set_default("site.base_url", DEFAULT_BASE_URL)?
        .set_default("site.listing_path", DEFAULT_LISTING_PATH)?
        .set_default("site.currency_prefix", DEFAULT_CURRENCY_PREFIX)?
        .set_default("pacing.delay_ms", DEFAULT_DELAY_MS as i64)?
        .set_default("pacing.jitter_ms", 0_i64)?
        .set_default("export.output_path", DEFAULT_OUTPUT_PATH)?
        .set_default("export.missing_value", DEFAULT_MISSING_VALUE)?
        .set_default("export.preview_rows", DEFAULT_PREVIEW_ROWS as i64)?
        .add_source(File::new(settings_path, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
