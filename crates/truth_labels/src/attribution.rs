use std::collections::HashSet;

use tracing::debug;

use crate::collect::collect_ids;
use crate::{DecayTree, LabelError, Origin, Particle, PhotoElectronSeriesMap, Pulse, PulseSeriesMap};

/// Time window used when the caller has no preference, in the unit of the stored timestamps.
pub const DEFAULT_MAX_TIME_DIFF: f64 = 100.0;

/// Whose photoelectrons a pulse has to be close to.
#[derive(Debug, Clone, Copy)]
pub enum PulseSource<'a> {
	/// The particle and everything it decayed into.
	Particle(&'a Particle),
	Noise,
}

/// Guesses which detector pulses were caused by `source`.
///
/// A pulse is kept if a photoelectron of the source arrived on the same channel within
/// `max_time_diff`. Both series must be sorted by time: the search for the next pulse
/// resumes at the last matched photoelectron instead of starting over.
pub fn attribute_pulses<T: DecayTree + ?Sized>(
	tree: &T,
	source: PulseSource<'_>,
	pulses: &PulseSeriesMap,
	photoelectrons: &PhotoElectronSeriesMap,
	max_time_diff: f64,
) -> Result<PulseSeriesMap, LabelError> {
	let origins: HashSet<Origin> = match source {
		PulseSource::Particle(particle) => {
			if particle.id.is_unset() {
				return Err(LabelError::UnsetOrigin);
			}
			collect_ids(tree, Some(particle))?.into_iter().map(Origin::Particle).collect()
		},
		PulseSource::Noise => HashSet::from([Origin::Noise]),
	};

	let mut attributed = PulseSeriesMap::new();
	for (key, channel_pulses) in pulses {
		let Some(channel_photoelectrons) = photoelectrons.get(key) else {
			continue;
		};

		let times: Vec<f64> = channel_photoelectrons
			.iter()
			.filter(|photoelectron| origins.contains(&photoelectron.origin))
			.map(|photoelectron| photoelectron.time)
			.collect();
		if times.is_empty() {
			continue;
		}

		let matched = match_in_window(channel_pulses, &times, max_time_diff);
		if !matched.is_empty() {
			attributed.insert(*key, matched);
		}
	}

	debug!(?source, channels = attributed.len(), "attributed pulses");

	Ok(attributed)
}

fn match_in_window(pulses: &[Pulse], times: &[f64], max_time_diff: f64) -> Vec<Pulse> {
	let mut cursor = 0;

	pulses
		.iter()
		.filter(|pulse| match times[cursor..].iter().position(|t| (pulse.time - t).abs() < max_time_diff) {
			Some(offset) => {
				cursor += offset;
				true
			},
			None => false,
		})
		.copied()
		.collect()
}
