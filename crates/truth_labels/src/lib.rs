mod attribution;
mod classify;
mod collect;
mod deposition;
mod energy;
mod error;
mod event;
mod geometry;
mod labels;
mod particle;
mod pulses;
mod topology;
mod tree;

#[cfg(test)]
mod testing;

pub use attribution::{DEFAULT_MAX_TIME_DIFF, PulseSource, attribute_pulses};
pub use classify::{Classification, Containment, Crossing, Span, classify, particle_is_inside};
pub use collect::collect_ids;
pub use deposition::deposited_energy;
pub use energy::{ContinuousLoss, NoLoss};
pub use error::LabelError;
pub use event::{Event, EventLabels, LabelSettings, label_event};
pub use geometry::{ConvexHull, Plane};
pub use labels::{IN_DETECTOR_ENERGY_LOSS, LabelMap, NUM_COINCIDENT_EVENTS, PRIMARY_ENERGY, interaction_labels, tau_labels};
pub use particle::{LocationType, Origin, Particle, ParticleId, ParticleType};
pub use pulses::{ChannelKey, PhotoElectron, PhotoElectronSeriesMap, Pulse, PulseSeriesMap};
pub use topology::{NuTauInteraction, find_nutau_interaction};
pub use tree::{McTree, TreeNode};

/// Parent/daughter relations of the simulated particles in one event.
pub trait DecayTree {
	fn primaries(&self) -> Vec<&Particle>;
	fn daughters(&self, particle: &Particle) -> Vec<&Particle>;
}

/// A closed convex region queried along infinite lines.
pub trait Volume {
	/// Line parameters `t` at which `origin + t * direction` crosses the boundary.
	fn intersections(&self, origin: [f64; 3], direction: [f64; 3]) -> Vec<f64>;
}

/// Residual energy of a particle after travelling along its own track.
pub trait EnergyLoss {
	fn energy_at_distance(&self, particle: &Particle, distance: f64) -> f64;
}

impl<F> EnergyLoss for F
where
	F: Fn(&Particle, f64) -> f64,
{
	fn energy_at_distance(&self, particle: &Particle, distance: f64) -> f64 {
		self(particle, distance)
	}
}
