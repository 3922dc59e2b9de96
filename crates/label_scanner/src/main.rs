use anyhow::Context;
use tracing::info;

use crate::config::Config;

mod config;
mod io;
mod scan;

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	info!("✅ Starting label scanner");

	let config_path = std::env::args().nth(1).unwrap_or_else(|| String::from("config.toml"));
	let config = Config::load(&config_path).context("Failed to load configuration")?;
	info!("✅ Configuration loaded from {config_path}");

	let volume = config.volume.build().context("Invalid detector volume")?;
	info!("✅ Detector volume built from {} footprint points", config.volume.footprint.len());

	let events = io::read_events(&config.input.events_path)?;
	info!("✅ Read {} events from {}", events.len(), config.input.events_path);

	let labeled = scan::label_events(&events, &volume, &config.energy_loss, &config.labels);
	info!("✅ Labeled {} events, skipped {}", labeled.len(), events.len() - labeled.len());

	io::write_labels(&config.output.labels_path, &labeled)?;
	info!("✅ Labels written to {}", config.output.labels_path);

	Ok(())
}
