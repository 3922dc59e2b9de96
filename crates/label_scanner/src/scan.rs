use rayon::prelude::*;
use tracing::warn;
use truth_labels::{EnergyLoss, Event, EventLabels, LabelSettings, Volume, label_event};

/// Labels every event on the rayon pool. Events whose labels can not be trusted are
/// logged and left out, the order of the remaining events is kept.
pub fn label_events<V, M>(events: &[Event], volume: &V, model: &M, settings: &LabelSettings) -> Vec<EventLabels>
where
	V: Volume + Sync + ?Sized,
	M: EnergyLoss + Sync + ?Sized,
{
	events
		.par_iter()
		.filter_map(|event| match label_event(event, volume, model, settings) {
			Ok(labels) => Some(labels),
			Err(err) => {
				warn!("Skipping event {}: {err}", event.id);
				None
			},
		})
		.collect()
}
