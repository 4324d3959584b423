use crate::domain::ports::TextGenerator;
use crate::utils::error::{AssistantError, Result};
use async_trait::async_trait;

/// Stand-in used when no API key is configured; every call reports the
/// backend as unavailable so the assistant answers from its canned pools.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredGenerator;

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    fn is_available(&self) -> bool {
        false
    }

    fn model_name(&self) -> &str {
        "none"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(AssistantError::unavailable("Google API key not configured"))
    }
}
