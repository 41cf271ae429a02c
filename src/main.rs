use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicebank_gen::domain::emitter::AudioFileEmitter;
use voicebank_gen::domain::generation::BankGenerator;
use voicebank_gen::domain::locale::renderer_for;
use voicebank_gen::domain::nameday::NameDayTable;
use voicebank_gen::error::AppResult;
use voicebank_gen::infrastructure::config::{direct_text, Config, LogFormat};
use voicebank_gen::infrastructure::repositories::{GoogleTtsRepository, TtsRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        language = %config.language,
        output_dir = %config.output_dir.display(),
        dry_run = config.dry_run,
        "Starting voice bank generation"
    );

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Voice bank generation aborted");
        return Err(e.into());
    }

    Ok(())
}

async fn run(config: Config) -> AppResult<()> {
    // The name-day table must be available before anything is rendered
    let name_days = if config.needs_name_days() {
        Some(NameDayTable::load(&config.nameday_path)?)
    } else {
        None
    };

    let tts_repo: Arc<dyn TtsRepository> = Arc::new(GoogleTtsRepository::new(
        config.google_api_key.clone().unwrap_or_default(),
        config.google_endpoint.clone(),
    ));

    let emitter = AudioFileEmitter::new(
        tts_repo,
        config.output_dir.clone(),
        config.language,
        config.dry_run,
    );
    let generator = BankGenerator::new(renderer_for(config.language, name_days)?, emitter);

    if let Some(text) = direct_text(std::env::args_os().skip(1)) {
        generator.synthesize_direct(&text).await?;
        return Ok(());
    }

    generator.run(&config.banks).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicebank_gen=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicebank_gen=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
