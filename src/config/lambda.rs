#[cfg(feature = "lambda")]
use crate::adapters::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
#[cfg(feature = "lambda")]
use crate::core::classifier::DEFAULT_RELEVANCE_THRESHOLD;
#[cfg(feature = "lambda")]
use crate::core::ConfigProvider;
#[cfg(feature = "lambda")]
use crate::utils::error::{AssistantError, Result};
#[cfg(feature = "lambda")]
use std::env;
#[cfg(feature = "lambda")]
use std::str::FromStr;
#[cfg(feature = "lambda")]
use std::time::Duration;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub google_api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub timeout_seconds: u64,
    pub threshold: f64,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            google_api_key: env::var("GOOGLE_API_KEY").ok(),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            api_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            // Lambda 本身也有逾時，這裡保持較短
            timeout_seconds: parse_env_or("BACKEND_TIMEOUT_SECONDS", 10)?,
            threshold: parse_env_or("RELEVANCE_THRESHOLD", DEFAULT_RELEVANCE_THRESHOLD)?,
        })
    }
}

/// 未設定時使用預設值，格式錯誤則回報
#[cfg(feature = "lambda")]
fn parse_env_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| AssistantError::InvalidConfigValueError {
                field: name.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

#[cfg(feature = "lambda")]
impl ConfigProvider for LambdaConfig {
    fn google_api_key(&self) -> Option<&str> {
        self.google_api_key.as_deref()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn relevance_threshold(&self) -> f64 {
        self.threshold
    }

    fn rng_seed(&self) -> Option<u64> {
        None
    }
}

#[cfg(feature = "lambda")]
impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_non_empty_string("GEMINI_MODEL", &self.model)?;
        validate_url("GEMINI_BASE_URL", &self.api_base_url)?;
        validate_positive_number("BACKEND_TIMEOUT_SECONDS", self.timeout_seconds, 1)?;
        validate_range("RELEVANCE_THRESHOLD", self.threshold, 0.0, 1.0)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
