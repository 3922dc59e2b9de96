use tracing::{debug, warn};

use crate::classify::classify;
use crate::{Containment, EnergyLoss, LabelError, Particle, Volume};

/// Distance before the decay point at which the tau energy is read, so the
/// model is never asked for the energy exactly at the end of the track.
const DECAY_OFFSET: f64 = 1e-6;

/// Energy a tau and its two hadronic cascades deposit inside `volume`.
///
/// The first cascade sits at the tau production vertex, the second at its decay
/// point. Returns `NaN` if any of the three particles is unknown.
pub fn deposited_energy<V, M>(
	tau: Option<&Particle>,
	first_cascade: Option<&Particle>,
	second_cascade: Option<&Particle>,
	volume: &V,
	model: &M,
) -> Result<f64, LabelError>
where
	V: Volume + ?Sized,
	M: EnergyLoss + ?Sized,
{
	let (Some(tau), Some(first_cascade), Some(second_cascade)) = (tau, first_cascade, second_cascade) else {
		return Ok(f64::NAN);
	};

	let classification = classify(tau.pos, tau.dir, tau.length, volume)?;
	debug!(tau = %tau.id, containment = ?classification.containment, "classified tau track");

	let Some(span) = classification.span() else {
		return Ok(0.0);
	};
	let energy_at = |distance: f64| model.energy_at_distance(tau, distance);
	let at_decay = tau.length - DECAY_OFFSET;

	let deposited = match classification.containment {
		Containment::Absent | Containment::StoppedBefore => 0.0,
		Containment::Starting if span.ends_inside(tau.length) => {
			first_cascade.energy + (tau.energy - energy_at(at_decay)) + second_cascade.energy
		},
		Containment::Starting => first_cascade.energy + (tau.energy - energy_at(span.t_max)),
		Containment::Contained => energy_at(span.t_min) - energy_at(at_decay) + second_cascade.energy,
		Containment::ThroughGoing => energy_at(span.t_min) - energy_at(span.t_max),
	};

	if deposited < 0.0 {
		warn!(tau = %tau.id, deposited, "negative deposited energy, energy model is not monotonic");
	}

	Ok(deposited)
}
