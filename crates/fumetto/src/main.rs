use clap::Parser;
use fumetto::{
    init_telemetry, Catalog, Cli, FumettoConfig, GeminiClient, PipelineController, ProgressEvent,
    ProgressSink,
};
use tracing::info;

/// Forwards progress events to the log as they happen.
struct TraceSink;

impl ProgressSink for TraceSink {
    fn emit(&self, event: ProgressEvent) {
        info!(stage = %event.stage, status = %event.status, detail = %event.detail, "progress");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.verbose && std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "debug");
    }
    init_telemetry()?;

    let mut config = FumettoConfig::load()?;
    if let Some(model) = &cli.model {
        config.model.planner_model = model.clone();
        config.model.asset_model = model.clone();
    }

    let context = match &cli.context_file {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };

    let catalog = Catalog::builtin();
    let planner_client = GeminiClient::with_model(&config.model.planner_model)?;
    let asset_client = GeminiClient::with_model(&config.model.asset_model)?;
    let progress = TraceSink;

    let controller = PipelineController::new(
        &planner_client,
        &asset_client,
        &catalog,
        &config,
        &progress,
    );
    let document = controller.run(&cli.topic, context.as_deref()).await?;

    std::fs::write(&cli.output, document.to_json_pretty()?)?;
    info!(output = %cli.output.display(), "Comic written");

    Ok(())
}
