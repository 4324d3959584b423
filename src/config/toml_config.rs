use crate::adapters::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::core::classifier::DEFAULT_RELEVANCE_THRESHOLD;
use crate::core::ConfigProvider;
use crate::utils::error::{AssistantError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_ASSISTANT_NAME: &str = "RoshanGPT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub assistant: AssistantSection,
    #[serde(default)]
    pub backend: BackendSection,
    #[serde(default)]
    pub classifier: ClassifierSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSection {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendSection {
    pub google_api_key: Option<String>,
    pub model: Option<String>,
    pub api_base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierSection {
    pub threshold: Option<f64>,
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AssistantError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GOOGLE_API_KEY})，未設定者保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn assistant_name(&self) -> &str {
        self.assistant
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_ASSISTANT_NAME)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("backend.model", self.model())?;
        validate_url("backend.api_base_url", self.api_base_url())?;
        if let Some(timeout) = self.backend.timeout_seconds {
            validate_positive_number("backend.timeout_seconds", timeout, 1)?;
        }
        validate_range("classifier.threshold", self.relevance_threshold(), 0.0, 1.0)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn google_api_key(&self) -> Option<&str> {
        // 未替換的 ${VAR} 視為未設定
        self.backend
            .google_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty() && !key.starts_with("${"))
    }

    fn model(&self) -> &str {
        self.backend.model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    fn api_base_url(&self) -> &str {
        self.backend
            .api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_BASE_URL)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn relevance_threshold(&self) -> f64 {
        self.classifier
            .threshold
            .unwrap_or(DEFAULT_RELEVANCE_THRESHOLD)
    }

    fn rng_seed(&self) -> Option<u64> {
        self.classifier.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
