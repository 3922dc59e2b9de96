use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::Context;
use truth_labels::{Event, EventLabels};

pub fn read_events(path: &str) -> anyhow::Result<Vec<Event>> {
	let file = File::open(path).context(format!("Failed to open events file: {path}"))?;
	let events = serde_json::from_reader(BufReader::new(file)).context(format!("Failed to parse events file: {path}"))?;

	Ok(events)
}

pub fn write_labels(path: &str, labels: &[EventLabels]) -> anyhow::Result<()> {
	let file = File::create(path).context(format!("Failed to create labels file: {path}"))?;
	let mut writer = BufWriter::new(file);

	serde_json::to_writer_pretty(&mut writer, labels).context("Failed to serialize labels")?;
	writer.flush().context(format!("Failed to write labels file: {path}"))?;

	Ok(())
}
