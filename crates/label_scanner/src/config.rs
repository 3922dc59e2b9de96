use anyhow::{Context, bail};
use serde::Deserialize;
use std::fs;
use truth_labels::{ContinuousLoss, ConvexHull, LabelSettings};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub input: InputConfig,
	pub output: OutputConfig,
	#[serde(default)]
	pub labels: LabelSettings,
	pub volume: VolumeConfig,
	#[serde(default)]
	pub energy_loss: ContinuousLoss,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
	pub events_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
	pub labels_path: String,
}

/// Detector volume as a convex footprint extruded along z.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeConfig {
	pub footprint: Vec<[f64; 2]>,
	pub z_min: f64,
	pub z_max: f64,
}

impl VolumeConfig {
	pub fn build(&self) -> anyhow::Result<ConvexHull> {
		if self.footprint.len() < 3 {
			bail!("Volume footprint needs at least 3 points, got {}", self.footprint.len());
		}
		if self.z_min >= self.z_max {
			bail!("Volume z_min ({}) must be below z_max ({})", self.z_min, self.z_max);
		}

		Ok(ConvexHull::extruded_polygon(&self.footprint, self.z_min, self.z_max))
	}
}

impl Config {
	pub fn load(path: &str) -> anyhow::Result<Self> {
		let content = fs::read_to_string(path).context(format!("Failed to read config file: {path}"))?;

		Self::parse(&content)
	}

	fn parse(content: &str) -> anyhow::Result<Self> {
		let config: Self = toml::from_str(content).context("Failed to parse config file")?;

		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const CONFIG: &str = r#"
[input]
events_path = "events.json"

[output]
labels_path = "labels.json"

[labels]
max_time_diff = 80.0

[volume]
footprint = [[-100.0, -100.0], [100.0, -100.0], [100.0, 100.0], [-100.0, 100.0]]
z_min = -500.0
z_max = 500.0
"#;

	#[test]
	fn parses_with_defaults() {
		let config = Config::parse(CONFIG).unwrap();
		assert_eq!(config.input.events_path, "events.json");
		assert_eq!(config.labels.max_time_diff, 80.0);
		assert_eq!(config.labels.pulse_map_name, "InIcePulses");
		assert_eq!(config.energy_loss, ContinuousLoss::default());
	}

	#[test]
	fn builds_volume() {
		let config = Config::parse(CONFIG).unwrap();
		let hull = config.volume.build().unwrap();
		assert!(hull.contains([0.0, 0.0, 0.0]));
		assert!(!hull.contains([0.0, 0.0, 600.0]));
	}

	#[test]
	fn rejects_degenerate_volume() {
		let volume = VolumeConfig { footprint: vec![[0.0, 0.0], [1.0, 0.0]], z_min: 0.0, z_max: 1.0 };
		assert!(volume.build().is_err());

		let volume = VolumeConfig { footprint: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], z_min: 1.0, z_max: 1.0 };
		assert!(volume.build().is_err());
	}
}
