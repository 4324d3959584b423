// Adapters layer: concrete implementations of the domain ports.

pub mod gemini;
pub mod unconfigured;

use crate::domain::ports::{ConfigProvider, TextGenerator};
use crate::utils::error::Result;

pub use gemini::GeminiGenerator;
pub use unconfigured::UnconfiguredGenerator;

/// 啟動時依 API key 選擇一次後端實作
pub fn select_generator<C: ConfigProvider + ?Sized>(config: &C) -> Result<Box<dyn TextGenerator>> {
    match config.google_api_key().filter(|key| !key.trim().is_empty()) {
        Some(api_key) => {
            let generator = GeminiGenerator::new(
                api_key,
                config.model(),
                config.api_base_url(),
                config.request_timeout(),
            )?;
            tracing::info!("🤖 Google Gemini API initialized ({})", config.model());
            Ok(Box::new(generator))
        }
        None => {
            tracing::warn!("⚠️ Google API key not found. Using fallback responses.");
            Ok(Box::new(UnconfiguredGenerator))
        }
    }
}
