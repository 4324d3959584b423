use crate::adapters::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::config::toml_config::{TomlConfig, DEFAULT_TIMEOUT_SECONDS};
use crate::core::classifier::DEFAULT_RELEVANCE_THRESHOLD;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// 後端與分類器參數未指定時為 None，才能疊加在 TOML 設定之上
#[derive(Debug, Clone, Parser)]
#[command(name = "petlove-assistant")]
#[command(about = "RoshanGPT: a pet care chat assistant")]
#[command(version)]
pub struct CliConfig {
    #[arg(short, long, help = "Message to answer; reads stdin line by line when omitted")]
    pub message: Option<String>,

    #[arg(
        short,
        long,
        help = "Load settings from a TOML file; flags given on the command line take precedence"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", help = "Gemini model [default: gemini-pro]")]
    pub model: Option<String>,

    #[arg(long, help = "Gemini API base URL")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Backend request timeout [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Minimum relevance score for pet advice [default: 0.3]")]
    pub threshold: Option<f64>,

    #[arg(long, help = "Seed for canned response selection")]
    pub seed: Option<u64>,

    #[arg(long, help = "Print the service status and exit")]
    pub health: bool,

    #[arg(long, help = "Print full JSON envelopes instead of plain text")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 讀取 --config 指定的 TOML 檔，並以命令列的值覆蓋
    pub fn layered_toml(&self) -> Result<Option<TomlConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };

        let mut file_config = TomlConfig::from_file(path)?;
        self.merge_into(&mut file_config);
        Ok(Some(file_config))
    }

    pub fn merge_into(&self, file_config: &mut TomlConfig) {
        let backend = &mut file_config.backend;

        // 空白的 GOOGLE_API_KEY 不覆蓋檔案中的金鑰
        if let Some(key) = self.google_api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            tracing::debug!("google_api_key taken from command line or environment");
            backend.google_api_key = Some(key.to_string());
        }
        if let Some(model) = &self.model {
            backend.model = Some(model.clone());
        }
        if let Some(url) = &self.api_base_url {
            backend.api_base_url = Some(url.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            backend.timeout_seconds = Some(timeout);
        }

        let classifier = &mut file_config.classifier;
        if let Some(threshold) = self.threshold {
            classifier.threshold = Some(threshold);
        }
        if let Some(seed) = self.seed {
            classifier.seed = Some(seed);
        }
    }
}

impl ConfigProvider for CliConfig {
    fn google_api_key(&self) -> Option<&str> {
        self.google_api_key.as_deref()
    }

    fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_GEMINI_BASE_URL)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn relevance_threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_RELEVANCE_THRESHOLD)
    }

    fn rng_seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("model", self.model())?;
        validate_url("api_base_url", self.api_base_url())?;
        validate_positive_number("timeout_seconds", self.request_timeout().as_secs(), 1)?;
        validate_range("threshold", self.relevance_threshold(), 0.0, 1.0)?;
        Ok(())
    }
}
