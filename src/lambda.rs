#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use petlove_assistant::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use petlove_assistant::{ChatRequest, ChatResponse, LambdaConfig, PetCareAssistant};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
async fn function_handler(
    assistant: &PetCareAssistant,
    event: LambdaEvent<ChatRequest>,
) -> Result<ChatResponse, Error> {
    let request = event.payload;
    tracing::debug!("Chat request received (context: {})", request.context);

    // 空白訊息以錯誤回報給呼叫端，其他結果一律成功
    let envelope = assistant
        .respond(&request.message)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(ChatResponse::from(envelope))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let assistant = Arc::new(PetCareAssistant::from_config(&config)?);
    tracing::info!("Pet care assistant Lambda ready");

    run(service_fn(move |event: LambdaEvent<ChatRequest>| {
        let assistant = Arc::clone(&assistant);
        async move { function_handler(&assistant, event).await }
    }))
    .await
}
