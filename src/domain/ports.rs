use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 生成式文字後端，例如 Gemini
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 是否已設定可用的後端
    fn is_available(&self) -> bool;

    fn model_name(&self) -> &str;

    /// 空白或缺少文字的結果以 `BackendUnavailable` 表示
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn google_api_key(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn relevance_threshold(&self) -> f64;
    fn rng_seed(&self) -> Option<u64>;
}
