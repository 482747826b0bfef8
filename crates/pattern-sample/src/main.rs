use pattern_framework::tracing::setup_tracing;
use pattern_sample::lifecycle::{DemoConfig, DemoError, Showcase};
use tracing::info;

fn main() -> Result<(), DemoError> {
    setup_tracing();

    info!("Starting pattern showcase");

    let config = DemoConfig::global()?;
    info!(demos = ?config.demos(), "Configuration loaded");

    let lines = Showcase::new(config).run(|line| println!("{line}"))?;

    info!(lines, "Showcase completed successfully");
    Ok(())
}
