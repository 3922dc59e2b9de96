use serde::{Deserialize, Serialize};

use crate::{EnergyLoss, Particle};

/// Particles keep their full energy along the whole track.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLoss;

impl EnergyLoss for NoLoss {
	fn energy_at_distance(&self, particle: &Particle, _distance: f64) -> f64 {
		particle.energy
	}
}

/// Continuous average loss `-dE/dx = a + b * E`, integrated analytically.
///
/// `a` is the ionisation term (energy per unit length), `b` the radiative term (per unit length).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousLoss {
	#[serde(default = "default_ionisation")]
	pub a: f64,
	#[serde(default = "default_radiative")]
	pub b: f64,
}

const fn default_ionisation() -> f64 {
	0.259
}

const fn default_radiative() -> f64 {
	3.63e-4
}

impl Default for ContinuousLoss {
	fn default() -> Self {
		Self { a: default_ionisation(), b: default_radiative() }
	}
}

impl EnergyLoss for ContinuousLoss {
	fn energy_at_distance(&self, particle: &Particle, distance: f64) -> f64 {
		let distance = distance.max(0.0);

		let energy = if self.b > 0.0 {
			let critical = self.a / self.b;
			(particle.energy + critical).mul_add((-self.b * distance).exp(), -critical)
		} else {
			self.a.mul_add(-distance, particle.energy)
		};

		energy.max(0.0)
	}
}
