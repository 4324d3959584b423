pub mod assistant;
pub mod classifier;
pub mod prompts;
pub mod vocabulary;

pub use crate::domain::model::{
    CannedResponse, ClassificationResult, MessageType, ResponseEnvelope, ResponseSource,
};
pub use crate::domain::ports::{ConfigProvider, TextGenerator};
pub use crate::utils::error::Result;
