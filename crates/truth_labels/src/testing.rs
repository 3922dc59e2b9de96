use crate::{LocationType, Particle, ParticleId, ParticleType, TreeNode, Volume};

pub(crate) fn particle(minor: u64, kind: ParticleType) -> Particle {
	Particle {
		id: ParticleId::new(1, minor),
		pos: [0.0, 0.0, 0.0],
		dir: [1.0, 0.0, 0.0],
		energy: 1.0,
		length: 0.0,
		kind,
		location: LocationType::InIce,
	}
}

pub(crate) fn track(minor: u64, kind: ParticleType, energy: f64, length: f64) -> Particle {
	Particle { energy, length, ..particle(minor, kind) }
}

pub(crate) fn node(particle: Particle, parent: Option<u64>) -> TreeNode {
	TreeNode { particle, parent: parent.map(|minor| ParticleId::new(1, minor)) }
}

/// Volume stub answering every query with the same parameters.
pub(crate) struct FixedVolume(pub Vec<f64>);

impl Volume for FixedVolume {
	fn intersections(&self, _origin: [f64; 3], _direction: [f64; 3]) -> Vec<f64> {
		self.0.clone()
	}
}
