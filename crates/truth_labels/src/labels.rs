use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::deposition::deposited_energy;
use crate::topology::{NuTauInteraction, find_nutau_interaction};
use crate::{DecayTree, EnergyLoss, LabelError, Volume};

pub const IN_DETECTOR_ENERGY_LOSS: &str = "MC_PrimaryInDetectorEnergyLoss";
pub const PRIMARY_ENERGY: &str = "MC_PrimaryEnergy";
pub const NUM_COINCIDENT_EVENTS: &str = "MC_NumCoincidentEvents";

/// Named labels in the order they were computed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelMap {
	entries: Vec<(String, f64)>,
}

impl LabelMap {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a label, keeping its original position if it already exists.
	pub fn insert(&mut self, name: impl Into<String>, value: f64) {
		let name = name.into();
		match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((name, value)),
		}
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<f64> {
		self.entries.iter().find(|(existing, _)| existing == name).map(|(_, value)| *value)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.entries.iter().map(|(name, value)| (name.as_str(), *value))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Serialize for LabelMap {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (name, value) in &self.entries {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}

/// Energy labels of a tau-neutrino event.
pub fn tau_labels<T, V, M>(tree: &T, volume: &V, model: &M) -> Result<LabelMap, LabelError>
where
	T: DecayTree + ?Sized,
	V: Volume + ?Sized,
	M: EnergyLoss + ?Sized,
{
	let interaction = find_nutau_interaction(tree)?;
	interaction_labels(tree, &interaction, volume, model)
}

/// Same labels as [`tau_labels`] for an interaction that was already resolved from `tree`.
pub fn interaction_labels<T, V, M>(
	tree: &T,
	interaction: &NuTauInteraction<'_>,
	volume: &V,
	model: &M,
) -> Result<LabelMap, LabelError>
where
	T: DecayTree + ?Sized,
	V: Volume + ?Sized,
	M: EnergyLoss + ?Sized,
{
	let mut labels = LabelMap::new();
	labels.insert(
		IN_DETECTOR_ENERGY_LOSS,
		deposited_energy(interaction.tau, interaction.first_cascade, interaction.second_cascade, volume, model)?,
	);
	labels.insert(PRIMARY_ENERGY, interaction.primary_neutrino.energy);
	labels.insert(NUM_COINCIDENT_EVENTS, tree.primaries().len() as f64);

	Ok(labels)
}
