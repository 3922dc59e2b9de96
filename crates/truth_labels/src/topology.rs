use crate::tree::preorder;
use crate::{DecayTree, LabelError, LocationType, Particle, ParticleType};

/// Tau-neutrino charged-current interaction: the tau, the hadrons at its production
/// vertex and the hadrons from its decay.
#[derive(Debug, Clone, Copy)]
pub struct NuTauInteraction<'a> {
	pub primary_neutrino: &'a Particle,
	pub tau: Option<&'a Particle>,
	pub first_cascade: Option<&'a Particle>,
	pub second_cascade: Option<&'a Particle>,
}

/// Resolves the tau topology starting from the first in-ice neutrino in the tree.
/// Missing pieces stay `None`.
pub fn find_nutau_interaction<T: DecayTree + ?Sized>(tree: &T) -> Result<NuTauInteraction<'_>, LabelError> {
	let primary_neutrino = preorder(tree)
		.into_iter()
		.find(|particle| particle.is_neutrino() && particle.location == LocationType::InIce)
		.ok_or(LabelError::NoPrimaryNeutrino)?;

	let daughters = tree.daughters(primary_neutrino);
	let tau = daughters.iter().rev().find(|daughter| daughter.kind.is_tau()).copied();
	let first_cascade = last_hadrons(&daughters);
	let second_cascade = tau.and_then(|tau| last_hadrons(&tree.daughters(tau)));

	Ok(NuTauInteraction { primary_neutrino, tau, first_cascade, second_cascade })
}

fn last_hadrons<'a>(particles: &[&'a Particle]) -> Option<&'a Particle> {
	particles.iter().rev().find(|particle| particle.kind == ParticleType::Hadrons).copied()
}
