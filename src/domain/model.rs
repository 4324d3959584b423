use serde::{Deserialize, Serialize};

/// 單次分類結果，不會被保存
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationResult {
    pub is_related: bool,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    PetAdvice,
    NonPetRedirect,
    Error,
}

/// 回應來源：AI 生成或預設回應池
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    Ai,
    Fallback,
}

/// 預設的寵物照護回應
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedResponse {
    pub text: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub response: String,
    pub is_pet_related: bool,
    pub confidence: f64,
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ResponseSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_context")]
    pub context: String,
}

fn default_context() -> String {
    "pet_care".to_string()
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: default_context(),
        }
    }
}

/// 對外回應格式，不含來源與分類欄位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub is_pet_related: bool,
    pub confidence: f64,
    pub message_type: MessageType,
}

impl From<ResponseEnvelope> for ChatResponse {
    fn from(envelope: ResponseEnvelope) -> Self {
        Self {
            response: envelope.response,
            is_pet_related: envelope.is_pet_related,
            confidence: envelope.confidence,
            message_type: envelope.message_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub ai_model: String,
    pub api_status: String,
    pub capabilities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serializes_snake_case_and_skips_empty_fields() {
        let envelope = ResponseEnvelope {
            response: "Hello".to_string(),
            is_pet_related: false,
            confidence: 0.0,
            message_type: MessageType::Error,
            source: None,
            category: None,
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["message_type"], "error");
        assert!(json.get("source").is_none());
        assert!(json.get("category").is_none());

        let envelope = ResponseEnvelope {
            message_type: MessageType::PetAdvice,
            source: Some(ResponseSource::Fallback),
            category: Some("nutrition".to_string()),
            ..envelope
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["message_type"], "pet_advice");
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["category"], "nutrition");
    }

    #[test]
    fn test_chat_request_defaults_context() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": "my cat sneezes"}"#).unwrap();
        assert_eq!(request.context, "pet_care");
        assert_eq!(request.message, "my cat sneezes");
        assert_eq!(ChatRequest::new("hi").context, request.context);
    }

    #[test]
    fn test_chat_response_drops_provenance() {
        let envelope = ResponseEnvelope {
            response: "Take your dog for a walk".to_string(),
            is_pet_related: true,
            confidence: 0.95,
            message_type: MessageType::PetAdvice,
            source: Some(ResponseSource::Ai),
            category: None,
        };

        let response = ChatResponse::from(envelope);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["confidence"], 0.95);
        assert!(json.get("source").is_none());
    }
}
