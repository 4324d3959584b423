use crate::adapters::select_generator;
use crate::core::classifier::RelevanceClassifier;
use crate::core::prompts::{pet_advice_prompt, redirect_prompt};
use crate::core::vocabulary::{
    CAPABILITIES, NON_PET_RESPONSES, PET_RESPONSES, TECHNICAL_DIFFICULTIES,
};
use crate::domain::model::{MessageType, ResponseEnvelope, ResponseSource, ServiceStatus};
use crate::domain::ports::{ConfigProvider, TextGenerator};
use crate::utils::error::{AssistantError, ErrorCategory, Result};
use crate::utils::logger::preview;
use crate::utils::validation::validate_message;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::sync::Mutex;

pub const AI_CONFIDENCE: f64 = 0.95;
pub const PET_FALLBACK_CONFIDENCE: f64 = 0.9;
pub const REDIRECT_FALLBACK_CONFIDENCE: f64 = 0.95;

const SERVICE_NAME: &str = "RoshanGPT Pet Care Assistant";
const LOG_PREVIEW_CHARS: usize = 50;

impl ResponseEnvelope {
    /// 最外層錯誤處理使用的固定回覆
    pub fn technical_difficulties() -> Self {
        Self {
            response: TECHNICAL_DIFFICULTIES.to_string(),
            is_pet_related: false,
            confidence: 0.0,
            message_type: MessageType::Error,
            source: None,
            category: None,
        }
    }
}

/// Classifies chat messages and answers them, through the generative
/// backend when it is configured and from the canned pools otherwise.
pub struct PetCareAssistant {
    classifier: RelevanceClassifier,
    generator: Box<dyn TextGenerator>,
    rng: Mutex<StdRng>,
}

impl PetCareAssistant {
    pub fn new(classifier: RelevanceClassifier, generator: Box<dyn TextGenerator>) -> Self {
        Self {
            classifier,
            generator,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// 使用固定種子，讓預設回應的選擇可重現
    pub fn with_seed(
        classifier: RelevanceClassifier,
        generator: Box<dyn TextGenerator>,
        seed: u64,
    ) -> Self {
        Self {
            classifier,
            generator,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let classifier = RelevanceClassifier::with_threshold(config.relevance_threshold())?;
        let generator = select_generator(config)?;

        Ok(match config.rng_seed() {
            Some(seed) => Self::with_seed(classifier, generator, seed),
            None => Self::new(classifier, generator),
        })
    }

    pub fn classifier(&self) -> &RelevanceClassifier {
        &self.classifier
    }

    pub fn backend_available(&self) -> bool {
        self.generator.is_available()
    }

    /// Answers one chat message.
    ///
    /// Only blank input is returned as an error (`InvalidInput`). Backend
    /// problems degrade to canned responses and any other failure becomes the
    /// `error` envelope.
    pub async fn respond(&self, message: &str) -> Result<ResponseEnvelope> {
        let message = validate_message(message)?;

        match self.process_message(message).await {
            Ok(envelope) => Ok(envelope),
            Err(e) => {
                tracing::error!(
                    "❌ Error processing message: {} (Category: {:?})",
                    e,
                    e.category()
                );
                Ok(ResponseEnvelope::technical_difficulties())
            }
        }
    }

    async fn process_message(&self, message: &str) -> Result<ResponseEnvelope> {
        let classification = self.classifier.classify(message);

        tracing::info!(
            "🤖 Processing message: '{}' | Pet-related: {} | Confidence: {:.2}",
            preview(message, LOG_PREVIEW_CHARS),
            classification.is_related,
            classification.confidence_score
        );

        if classification.is_related {
            self.pet_response(message).await
        } else {
            self.redirect_response(message).await
        }
    }

    async fn pet_response(&self, message: &str) -> Result<ResponseEnvelope> {
        if let Some(text) = self.try_generate(&pet_advice_prompt(message)).await {
            return Ok(ResponseEnvelope {
                response: text,
                is_pet_related: true,
                confidence: AI_CONFIDENCE,
                message_type: MessageType::PetAdvice,
                source: Some(ResponseSource::Ai),
                category: None,
            });
        }

        let canned = self.pick(PET_RESPONSES)?;
        Ok(ResponseEnvelope {
            response: canned.text.to_string(),
            is_pet_related: true,
            confidence: PET_FALLBACK_CONFIDENCE,
            message_type: MessageType::PetAdvice,
            source: Some(ResponseSource::Fallback),
            category: Some(canned.category.to_string()),
        })
    }

    async fn redirect_response(&self, message: &str) -> Result<ResponseEnvelope> {
        let (response, source, confidence) =
            match self.try_generate(&redirect_prompt(message)).await {
                Some(text) => (text, ResponseSource::Ai, AI_CONFIDENCE),
                None => (
                    self.pick(NON_PET_RESPONSES)?.to_string(),
                    ResponseSource::Fallback,
                    REDIRECT_FALLBACK_CONFIDENCE,
                ),
            };

        Ok(ResponseEnvelope {
            response,
            is_pet_related: false,
            confidence,
            message_type: MessageType::NonPetRedirect,
            source: Some(source),
            category: None,
        })
    }

    /// 呼叫後端；任何失敗都只記錄並回傳 None，不重試
    async fn try_generate(&self, prompt: &str) -> Option<String> {
        if !self.generator.is_available() {
            return None;
        }

        match self.generator.generate(prompt).await {
            Ok(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            Ok(_) => {
                tracing::warn!("⚠️ Empty response from generative backend, using fallback");
                None
            }
            Err(e) => {
                match e.category() {
                    ErrorCategory::BackendUnavailable => {
                        tracing::warn!("⚠️ Generative backend unavailable, using fallback: {}", e)
                    }
                    _ => tracing::error!("❌ Error calling generative backend, using fallback: {}", e),
                }
                None
            }
        }
    }

    fn pick<'a, T>(&self, pool: &'a [T]) -> Result<&'a T> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AssistantError::unexpected("random source lock poisoned"))?;
        pool.choose(&mut *rng)
            .ok_or_else(|| AssistantError::unexpected("response pool is empty"))
    }

    pub fn health(&self) -> ServiceStatus {
        let (ai_model, api_status) = if self.generator.is_available() {
            (
                format!("Google Gemini ({})", self.generator.model_name()),
                "configured",
            )
        } else {
            ("Fallback Responses".to_string(), "not_configured")
        };

        ServiceStatus {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ai_model,
            api_status: api_status.to_string(),
            capabilities: CAPABILITIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::UnconfiguredGenerator;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// 回傳固定文字並記錄呼叫次數
    struct StaticGenerator {
        text: String,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TextGenerator for StaticGenerator {
        fn is_available(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "static"
        }

        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        fn is_available(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(AssistantError::BackendStatusError {
                status: 503,
                body: "service unavailable".to_string(),
            })
        }
    }

    fn assistant_with(generator: Box<dyn TextGenerator>, seed: u64) -> PetCareAssistant {
        PetCareAssistant::with_seed(RelevanceClassifier::new().unwrap(), generator, seed)
    }

    fn offline_assistant(seed: u64) -> PetCareAssistant {
        assistant_with(Box::new(UnconfiguredGenerator), seed)
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let assistant = offline_assistant(1);
        for message in ["", "   ", "\n\t"] {
            let err = assistant.respond(message).await.unwrap_err();
            assert_eq!(err.category(), ErrorCategory::InvalidInput);
        }
    }

    #[tokio::test]
    async fn test_blank_message_never_reaches_backend() {
        let calls = Arc::new(AtomicUsize::new(0));
        let assistant = assistant_with(
            Box::new(StaticGenerator {
                text: "unused".to_string(),
                calls: Arc::clone(&calls),
            }),
            1,
        );

        assert!(assistant.respond("  ").await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_offline_pet_question_uses_in_domain_pool() {
        let assistant = offline_assistant(7);

        for _ in 0..20 {
            let envelope = assistant
                .respond("How often should I feed my puppy?")
                .await
                .unwrap();
            assert!(envelope.is_pet_related);
            assert_eq!(envelope.message_type, MessageType::PetAdvice);
            assert_eq!(envelope.confidence, PET_FALLBACK_CONFIDENCE);
            assert_eq!(envelope.source, Some(ResponseSource::Fallback));

            let canned = PET_RESPONSES
                .iter()
                .find(|r| r.text == envelope.response)
                .expect("response should come from the in-domain pool");
            assert_eq!(envelope.category.as_deref(), Some(canned.category));
            assert!(!NON_PET_RESPONSES.contains(&envelope.response.as_str()));
        }
    }

    #[tokio::test]
    async fn test_offline_off_topic_question_redirects() {
        let assistant = offline_assistant(7);
        let envelope = assistant
            .respond("What's the capital of France?")
            .await
            .unwrap();

        assert!(!envelope.is_pet_related);
        assert_eq!(envelope.message_type, MessageType::NonPetRedirect);
        assert_eq!(envelope.confidence, REDIRECT_FALLBACK_CONFIDENCE);
        assert_eq!(envelope.source, Some(ResponseSource::Fallback));
        assert!(envelope.category.is_none());
        assert!(NON_PET_RESPONSES.contains(&envelope.response.as_str()));
    }

    #[tokio::test]
    async fn test_ai_response_is_trimmed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let assistant = assistant_with(
            Box::new(StaticGenerator {
                text: "\n  🐶 Feed puppies three small meals a day.  \n".to_string(),
                calls: Arc::clone(&calls),
            }),
            1,
        );

        let envelope = assistant
            .respond("How often should I feed my puppy?")
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(envelope.response, "🐶 Feed puppies three small meals a day.");
        assert_eq!(envelope.confidence, AI_CONFIDENCE);
        assert_eq!(envelope.message_type, MessageType::PetAdvice);
        assert_eq!(envelope.source, Some(ResponseSource::Ai));
        assert!(envelope.category.is_none());

        let envelope = assistant.respond("Explain quantum computing").await.unwrap();
        assert_eq!(envelope.message_type, MessageType::NonPetRedirect);
        assert_eq!(envelope.source, Some(ResponseSource::Ai));
        assert!(!envelope.is_pet_related);
    }

    #[tokio::test]
    async fn test_whitespace_ai_response_falls_back() {
        let assistant = assistant_with(
            Box::new(StaticGenerator {
                text: "   ".to_string(),
                calls: Arc::new(AtomicUsize::new(0)),
            }),
            3,
        );

        let envelope = assistant.respond("my dog has fleas").await.unwrap();
        assert_eq!(envelope.source, Some(ResponseSource::Fallback));
        assert_eq!(envelope.confidence, PET_FALLBACK_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_failing_backend_degrades_to_fallback() {
        let assistant = assistant_with(Box::new(FailingGenerator), 11);

        let envelope = assistant.respond("My cat keeps scratching the sofa").await.unwrap();
        assert_eq!(envelope.message_type, MessageType::PetAdvice);
        assert_eq!(envelope.source, Some(ResponseSource::Fallback));
        assert_eq!(envelope.confidence, PET_FALLBACK_CONFIDENCE);

        let envelope = assistant.respond("Write me a poem about the ocean").await.unwrap();
        assert_eq!(envelope.message_type, MessageType::NonPetRedirect);
        assert_eq!(envelope.source, Some(ResponseSource::Fallback));
        assert_eq!(envelope.confidence, REDIRECT_FALLBACK_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_repeated_calls_keep_classification_stable() {
        let assistant = offline_assistant(42);
        let mut texts = HashSet::new();

        for _ in 0..30 {
            let envelope = assistant.respond("my kitten needs grooming").await.unwrap();
            assert!(envelope.is_pet_related);
            assert_eq!(envelope.message_type, MessageType::PetAdvice);
            assert_eq!(envelope.confidence, PET_FALLBACK_CONFIDENCE);
            texts.insert(envelope.response);
        }

        assert!(texts.len() > 1, "random selection should vary across calls");
    }

    #[tokio::test]
    async fn test_same_seed_reproduces_fallback_sequence() {
        let first = offline_assistant(2024);
        let second = offline_assistant(2024);

        for message in ["my dog", "my cat is sick", "tell me a joke", "pet insurance"] {
            let a = first.respond(message).await.unwrap();
            let b = second.respond(message).await.unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_poisoned_random_source_yields_error_envelope() {
        let assistant = Arc::new(offline_assistant(5));
        let poisoner = Arc::clone(&assistant);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.rng.lock().unwrap();
            panic!("poison the random source");
        })
        .join();

        let envelope = tokio_test::block_on(assistant.respond("my dog")).unwrap();
        assert_eq!(envelope, ResponseEnvelope::technical_difficulties());
        assert_eq!(envelope.message_type, MessageType::Error);
        assert_eq!(envelope.confidence, 0.0);
        assert!(!envelope.is_pet_related);
    }

    #[test]
    fn test_health_reports_backend_status() {
        let offline = offline_assistant(1).health();
        assert_eq!(offline.status, "healthy");
        assert_eq!(offline.api_status, "not_configured");
        assert_eq!(offline.ai_model, "Fallback Responses");
        assert_eq!(offline.capabilities.len(), CAPABILITIES.len());

        let online = assistant_with(Box::new(FailingGenerator), 1).health();
        assert_eq!(online.api_status, "configured");
        assert_eq!(online.ai_model, "Google Gemini (failing)");
        assert_eq!(online.version, env!("CARGO_PKG_VERSION"));
    }
}
