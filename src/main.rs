use catermatch::utils::{logger, validation::Validate};
use catermatch::{CliConfig, LocalCatalogue, MatchEngine, Order, Result};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting catermatch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(suggestions) => print!("{suggestions}"),
        Err(e) => {
            tracing::error!("Matching failed: {}", e);
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}

fn run(config: &CliConfig) -> Result<String> {
    config.validate()?;

    let source = LocalCatalogue::new(config.data_dir.as_str());
    let mut order = Order::from_args(&config.order, &source)?;

    if let Some(now) = config.simulated_now()? {
        tracing::debug!(%now, "running with a simulated clock");
        order = order.with_simulated_now(now);
    }

    MatchEngine::new(source).run(&order)
}
