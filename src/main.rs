use dioxus_logger::tracing::{self, Level};
use saratoga::{config::Config, error::Error, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).expect("Failed to initialize logger");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config).await {
        tracing::error!("Data sync failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), Error> {
    // Must complete before anything reads the data directory
    let data_dir = startup::prepare_data_dir(config)?;
    if data_dir.outcome().performed_work() {
        tracing::info!(
            "Prepared data directory {}",
            data_dir.paths().folder().display()
        );
    }

    let client = startup::build_http_client(config)?;
    let mut orchestrator = startup::build_orchestrator(config, data_dir, client);

    tracing::info!("Synchronizing local data");
    orchestrator.update_data_and_cache().await?;

    Ok(())
}
