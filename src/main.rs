use clap::Parser;
use petlove_assistant::config::toml_config::DEFAULT_ASSISTANT_NAME;
use petlove_assistant::utils::error::{AssistantError, ErrorCategory};
use petlove_assistant::utils::{logger, validation::Validate};
use petlove_assistant::{CliConfig, PetCareAssistant, ResponseEnvelope};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 與原服務相同，先讀取 .env
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting petlove-assistant CLI");
    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }

    let (assistant, name) = match build_assistant(&config) {
        Ok(built) => built,
        Err(e) => {
            tracing::error!("❌ Startup failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    };

    if config.health {
        println!("{}", serde_json::to_string_pretty(&assistant.health())?);
        return Ok(());
    }

    match &config.message {
        Some(message) => {
            if let Err(e) = answer(&assistant, message, config.json).await? {
                std::process::exit(exit_code(&e));
            }
        }
        None => chat_loop(&assistant, &name, config.json).await?,
    }

    Ok(())
}

fn build_assistant(config: &CliConfig) -> petlove_assistant::Result<(PetCareAssistant, String)> {
    let (assistant, name) = match config.layered_toml()? {
        Some(file_config) => {
            if let Some(path) = &config.config {
                tracing::info!("📄 Loaded configuration from {}", path.display());
            }
            if let Some(description) = &file_config.assistant.description {
                tracing::debug!("Assistant description: {}", description);
            }
            file_config.validate()?;
            (
                PetCareAssistant::from_config(&file_config)?,
                file_config.assistant_name().to_string(),
            )
        }
        None => {
            config.validate()?;
            (
                PetCareAssistant::from_config(config)?,
                DEFAULT_ASSISTANT_NAME.to_string(),
            )
        }
    };

    tracing::info!(
        "🐾 {} ready (threshold {:.2}, AI backend {})",
        name,
        assistant.classifier().threshold(),
        if assistant.backend_available() { "enabled" } else { "disabled" }
    );

    Ok((assistant, name))
}

/// 外層 Result 為輸出錯誤，內層為使用者輸入錯誤
async fn answer(
    assistant: &PetCareAssistant,
    message: &str,
    json: bool,
) -> anyhow::Result<Result<(), AssistantError>> {
    match assistant.respond(message).await {
        Ok(envelope) => {
            print_envelope(&envelope, json)?;
            Ok(Ok(()))
        }
        Err(e) => {
            tracing::warn!("Rejected message: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            Ok(Err(e))
        }
    }
}

async fn chat_loop(assistant: &PetCareAssistant, name: &str, json: bool) -> anyhow::Result<()> {
    println!("🐾 {} is ready. Ask a pet care question (type 'exit' to quit).", name);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if matches!(line, "exit" | "quit") {
            break;
        }
        // 空白輸入只提示，不中斷對話
        let _ = answer(assistant, line, json).await?;
    }

    tracing::info!("Chat session ended");
    Ok(())
}

fn print_envelope(envelope: &ResponseEnvelope, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(envelope)?);
    } else {
        println!("{}", envelope.response);
    }
    Ok(())
}

fn exit_code(e: &AssistantError) -> i32 {
    match e.category() {
        ErrorCategory::InvalidInput => 2,
        ErrorCategory::Configuration => 1,
        ErrorCategory::BackendUnavailable
        | ErrorCategory::BackendFailure
        | ErrorCategory::UnexpectedFailure => 3,
    }
}
