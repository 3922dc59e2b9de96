use thiserror::Error;

use crate::ParticleId;

/// Conditions under which a label cannot be trusted and must not be written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabelError {
	#[error("volume returned a non-finite intersection parameter: {value}")]
	NonFiniteIntersection { value: f64 },
	#[error("daughter of particle {parent} has the unset id (0,0)")]
	UnsetDescendantId { parent: ParticleId },
	/// Raised for a decay cycle and for a daughter shared by two parents alike.
	#[error("particle {id} was reached twice while walking the decay tree")]
	RevisitedParticle { id: ParticleId },
	#[error("can not attribute pulses to a particle with the unset id (0,0)")]
	UnsetOrigin,
	#[error("no in-ice neutrino found in the decay tree")]
	NoPrimaryNeutrino,
	#[error("event has no data product named {name}")]
	MissingProduct { name: String },
	#[error("particle {id} appears more than once in the decay tree")]
	DuplicateParticle { id: ParticleId },
	#[error("particle {id} names parent {parent} which is not in the decay tree")]
	UnknownParent { id: ParticleId, parent: ParticleId },
}
