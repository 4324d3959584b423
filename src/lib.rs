pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use crate::core::{assistant::PetCareAssistant, classifier::RelevanceClassifier};
pub use crate::domain::model::{ChatRequest, ChatResponse, MessageType, ResponseEnvelope, ResponseSource};
pub use crate::utils::error::{AssistantError, Result};
