use clap::Parser;
use make_tabulator::utils::{logger, validation::Validate};
use make_tabulator::{CliConfig, LocalStorage, MakesPipeline, TallyEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting make-tabulator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = MakesPipeline::new(storage, config);
    let engine = TallyEngine::new(pipeline);

    match engine.run().await {
        Ok(Some(output_path)) => {
            tracing::info!("Make counts saved to: {}", output_path);
            println!("✅ Make counts saved to: {}", output_path);
        }
        Ok(None) => {
            // Counts were computed and reported but could not be written.
            eprintln!("⚠️ Make counts were collated but not persisted");
        }
        Err(e) => {
            tracing::error!("Tabulation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
