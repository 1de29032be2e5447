use clap::Parser;
use keyword_pulse::utils::{logger, validation, validation::Validate};
use keyword_pulse::{
    AnalyzeRequest, CliConfig, ErrorClass, KeywordPipeline, MetricsClient, SuggestClient,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting keyword-pulse");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let keywords = validation::parse_seed_terms(&config.seeds);

    let suggest = SuggestClient::new(
        config.suggest_endpoint.clone(),
        config.lang.clone(),
        config.region.clone(),
    );
    let metrics = MetricsClient::new(config.metrics_endpoint.clone(), config.credentials());
    let pipeline = KeywordPipeline::with_limits(
        suggest,
        metrics,
        Duration::from_millis(config.call_interval_ms),
        config.chunk_size,
    );

    match pipeline.analyze(AnalyzeRequest { keywords }).await {
        Ok(response) => {
            tracing::info!("✅ Analysis finished: {} result(s)", response.result.len());
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Err(e) => {
            tracing::error!("❌ Analysis failed: {} ({:?})", e, e.classification());
            eprintln!("❌ {}", e.user_friendly_message());
            let exit_code = match e.classification() {
                ErrorClass::BadRequest => 2,
                ErrorClass::ServerError => 1,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
