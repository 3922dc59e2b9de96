use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attribution::{DEFAULT_MAX_TIME_DIFF, PulseSource, attribute_pulses};
use crate::labels::interaction_labels;
use crate::topology::find_nutau_interaction;
use crate::{EnergyLoss, LabelError, LabelMap, McTree, PhotoElectronSeriesMap, PulseSeriesMap, Volume};

/// Simulated event with its decay tree and named pulse products.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
	pub id: u64,
	pub tree: McTree,
	#[serde(default)]
	pub pulses: HashMap<String, PulseSeriesMap>,
	#[serde(default)]
	pub photoelectrons: HashMap<String, PhotoElectronSeriesMap>,
}

impl Event {
	#[must_use]
	pub fn pulse_map(&self, name: &str) -> Option<&PulseSeriesMap> {
		self.pulses.get(name)
	}

	#[must_use]
	pub fn photoelectron_map(&self, name: &str) -> Option<&PhotoElectronSeriesMap> {
		self.photoelectrons.get(name)
	}
}

/// Which products to read and how wide the attribution window is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelSettings {
	#[serde(default = "default_pulse_map_name")]
	pub pulse_map_name: String,
	#[serde(default = "default_photoelectron_map_name")]
	pub photoelectron_map_name: String,
	#[serde(default = "default_max_time_diff")]
	pub max_time_diff: f64,
}

fn default_pulse_map_name() -> String {
	String::from("InIcePulses")
}

fn default_photoelectron_map_name() -> String {
	String::from("I3MCPESeriesMap")
}

const fn default_max_time_diff() -> f64 {
	DEFAULT_MAX_TIME_DIFF
}

impl Default for LabelSettings {
	fn default() -> Self {
		Self {
			pulse_map_name: default_pulse_map_name(),
			photoelectron_map_name: default_photoelectron_map_name(),
			max_time_diff: default_max_time_diff(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLabels {
	pub id: u64,
	pub labels: LabelMap,
	pub signal_pulses: PulseSeriesMap,
	pub noise_pulses: PulseSeriesMap,
}

/// Computes every truth label of one event.
///
/// Signal pulses are those attributed to the primary neutrino and all of its
/// descendants. Without the named pulse map both pulse maps are empty.
pub fn label_event<V, M>(
	event: &Event,
	volume: &V,
	model: &M,
	settings: &LabelSettings,
) -> Result<EventLabels, LabelError>
where
	V: Volume + ?Sized,
	M: EnergyLoss + ?Sized,
{
	let interaction = find_nutau_interaction(&event.tree)?;
	let labels = interaction_labels(&event.tree, &interaction, volume, model)?;

	let Some(pulses) = event.pulse_map(&settings.pulse_map_name) else {
		debug!(event = event.id, name = %settings.pulse_map_name, "no pulse map, skipping attribution");
		return Ok(EventLabels {
			id: event.id,
			labels,
			signal_pulses: PulseSeriesMap::new(),
			noise_pulses: PulseSeriesMap::new(),
		});
	};

	let photoelectrons = event
		.photoelectron_map(&settings.photoelectron_map_name)
		.ok_or_else(|| LabelError::MissingProduct { name: settings.photoelectron_map_name.clone() })?;

	let signal_pulses = attribute_pulses(
		&event.tree,
		PulseSource::Particle(interaction.primary_neutrino),
		pulses,
		photoelectrons,
		settings.max_time_diff,
	)?;
	let noise_pulses =
		attribute_pulses(&event.tree, PulseSource::Noise, pulses, photoelectrons, settings.max_time_diff)?;

	Ok(EventLabels { id: event.id, labels, signal_pulses, noise_pulses })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::labels::{IN_DETECTOR_ENERGY_LOSS, PRIMARY_ENERGY};
	use crate::{ChannelKey, ConvexHull, NoLoss};

	const EVENT: &str = r#"{
		"id": 17,
		"tree": [
			{"particle": {"id": [9, 1], "pos": [-100, 0, 0], "dir": [1, 0, 0], "energy": 900.0, "kind": "NuTau"}},
			{"particle": {"id": [9, 2], "pos": [-100, 0, 0], "dir": [1, 0, 0], "energy": 500.0, "length": 150.0, "kind": "TauMinus"}, "parent": [9, 1]},
			{"particle": {"id": [9, 3], "pos": [-100, 0, 0], "dir": [1, 0, 0], "energy": 400.0, "kind": "Hadrons"}, "parent": [9, 1]},
			{"particle": {"id": [9, 4], "pos": [50, 0, 0], "dir": [1, 0, 0], "energy": 300.0, "kind": "Hadrons"}, "parent": [9, 2]}
		],
		"pulses": {
			"InIcePulses": {
				"1-1": [{"time": 100.0, "charge": 1.0}, {"time": 250.0, "charge": 0.4}, {"time": 400.0, "charge": 2.0}],
				"2-7": [{"time": 5000.0, "charge": 0.3}]
			}
		},
		"photoelectrons": {
			"I3MCPESeriesMap": {
				"1-1": [{"time": 105.0, "id": [9, 4]}, {"time": 260.0, "id": [0, 0]}, {"time": 402.0, "id": [9, 2]}],
				"2-7": [{"time": 4990.0, "id": [0, 0]}]
			}
		}
	}"#;

	fn detector() -> ConvexHull {
		ConvexHull::cuboid([0.0, -10.0, -10.0], [100.0, 10.0, 10.0])
	}

	#[test]
	fn labels_event_read_from_json() {
		let event: Event = serde_json::from_str(EVENT).unwrap();
		let labeled = label_event(&event, &detector(), &NoLoss, &LabelSettings::default()).unwrap();

		assert_eq!(labeled.id, 17);
		assert_eq!(labeled.labels.get(IN_DETECTOR_ENERGY_LOSS), Some(300.0));
		assert_eq!(labeled.labels.get(PRIMARY_ENERGY), Some(900.0));

		let signal: Vec<f64> = labeled.signal_pulses[&ChannelKey::new(1, 1)].iter().map(|p| p.time).collect();
		assert_eq!(signal, vec![100.0, 400.0]);
		assert!(!labeled.signal_pulses.contains_key(&ChannelKey::new(2, 7)));

		let noise: Vec<f64> = labeled.noise_pulses[&ChannelKey::new(1, 1)].iter().map(|p| p.time).collect();
		assert_eq!(noise, vec![250.0]);
		assert_eq!(labeled.noise_pulses[&ChannelKey::new(2, 7)].len(), 1);
	}

	#[test]
	fn missing_pulse_map_skips_attribution() {
		let event: Event = serde_json::from_str(EVENT).unwrap();
		let settings = LabelSettings { pulse_map_name: String::from("SplitPulses"), ..LabelSettings::default() };

		let labeled = label_event(&event, &detector(), &NoLoss, &settings).unwrap();
		assert!(labeled.signal_pulses.is_empty());
		assert!(labeled.noise_pulses.is_empty());
		assert_eq!(labeled.labels.len(), 3);
	}

	#[test]
	fn missing_photoelectrons_is_an_error() {
		let event: Event = serde_json::from_str(EVENT).unwrap();
		let settings = LabelSettings { photoelectron_map_name: String::from("Nope"), ..LabelSettings::default() };

		let result = label_event(&event, &detector(), &NoLoss, &settings);
		assert_eq!(result.unwrap_err(), LabelError::MissingProduct { name: String::from("Nope") });
	}

	#[test]
	fn settings_fill_defaults() {
		let settings: LabelSettings = serde_json::from_str(r#"{"max_time_diff": 50.0}"#).unwrap();
		assert_eq!(settings.pulse_map_name, "InIcePulses");
		assert_eq!(settings.max_time_diff, 50.0);
	}
}
