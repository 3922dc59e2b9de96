use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a simulated particle. `(0,0)` is the unset id and never names a real particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "(u64, u64)", into = "(u64, u64)")]
pub struct ParticleId {
	pub major: u64,
	pub minor: u64,
}

impl ParticleId {
	pub const UNSET: Self = Self { major: 0, minor: 0 };

	#[must_use]
	pub const fn new(major: u64, minor: u64) -> Self {
		Self { major, minor }
	}

	#[must_use]
	pub const fn is_unset(&self) -> bool {
		self.major == 0 && self.minor == 0
	}
}

impl From<(u64, u64)> for ParticleId {
	fn from((major, minor): (u64, u64)) -> Self {
		Self { major, minor }
	}
}

impl From<ParticleId> for (u64, u64) {
	fn from(id: ParticleId) -> Self {
		(id.major, id.minor)
	}
}

impl fmt::Display for ParticleId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.major, self.minor)
	}
}

/// True source of a photoelectron. On the wire noise is written as the unset id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ParticleId", into = "ParticleId")]
pub enum Origin {
	Noise,
	Particle(ParticleId),
}

impl From<ParticleId> for Origin {
	fn from(id: ParticleId) -> Self {
		if id.is_unset() { Self::Noise } else { Self::Particle(id) }
	}
}

impl From<Origin> for ParticleId {
	fn from(origin: Origin) -> Self {
		match origin {
			Origin::Noise => Self::UNSET,
			Origin::Particle(id) => id,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleType {
	TauMinus,
	TauPlus,
	Hadrons,
	NuE,
	NuEBar,
	NuMu,
	NuMuBar,
	NuTau,
	NuTauBar,
	MuMinus,
	MuPlus,
	EMinus,
	EPlus,
	Gamma,
	#[serde(other)]
	Other,
}

impl ParticleType {
	#[must_use]
	pub const fn is_tau(self) -> bool {
		matches!(self, Self::TauMinus | Self::TauPlus)
	}

	#[must_use]
	pub const fn is_neutrino(self) -> bool {
		matches!(self, Self::NuE | Self::NuEBar | Self::NuMu | Self::NuMuBar | Self::NuTau | Self::NuTauBar)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocationType {
	#[default]
	InIce,
	IceTop,
	Anywhere,
	#[serde(other)]
	Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
	pub id: ParticleId,
	pub pos: [f64; 3],
	pub dir: [f64; 3],
	pub energy: f64,
	/// Track length, `0.0` for point-like particles.
	#[serde(default)]
	pub length: f64,
	pub kind: ParticleType,
	#[serde(default)]
	pub location: LocationType,
}

impl Particle {
	#[must_use]
	pub const fn is_neutrino(&self) -> bool {
		self.kind.is_neutrino()
	}
}
