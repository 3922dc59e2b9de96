use std::collections::HashSet;

use crate::{DecayTree, LabelError, Particle, ParticleId};

/// Ids of `particle` and its whole descendant lineage.
///
/// Walks the tree with an explicit stack, so deep decay chains do not grow the call
/// stack. A particle reached twice, through a cycle or through two parents, means the
/// tree is not a tree and is rejected.
pub fn collect_ids<T: DecayTree + ?Sized>(
	tree: &T,
	particle: Option<&Particle>,
) -> Result<HashSet<ParticleId>, LabelError> {
	let mut ids = HashSet::new();
	let Some(particle) = particle else {
		return Ok(ids);
	};

	let mut stack = vec![particle];
	while let Some(current) = stack.pop() {
		if !ids.insert(current.id) {
			return Err(LabelError::RevisitedParticle { id: current.id });
		}

		for daughter in tree.daughters(current) {
			if daughter.id.is_unset() {
				return Err(LabelError::UnsetDescendantId { parent: current.id });
			}
			stack.push(daughter);
		}
	}

	Ok(ids)
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;
	use crate::testing::{node, particle};
	use crate::{McTree, ParticleType};

	/// Adjacency-list tree that can express shapes `McTree` refuses to build.
	struct ListTree {
		particles: HashMap<ParticleId, Particle>,
		children: HashMap<ParticleId, Vec<ParticleId>>,
	}

	impl ListTree {
		fn new(edges: &[(u64, u64)]) -> Self {
			let mut particles = HashMap::new();
			let mut children: HashMap<ParticleId, Vec<ParticleId>> = HashMap::new();
			for &(parent, child) in edges {
				for minor in [parent, child] {
					let p = particle(minor, ParticleType::Hadrons);
					particles.insert(p.id, p);
				}
				children.entry(ParticleId::new(1, parent)).or_default().push(ParticleId::new(1, child));
			}
			Self { particles, children }
		}
	}

	impl DecayTree for ListTree {
		fn primaries(&self) -> Vec<&Particle> {
			Vec::new()
		}

		fn daughters(&self, particle: &Particle) -> Vec<&Particle> {
			self.children.get(&particle.id).map(|ids| ids.iter().map(|id| &self.particles[id]).collect()).unwrap_or_default()
		}
	}

	fn ids(minors: &[u64]) -> HashSet<ParticleId> {
		minors.iter().map(|&minor| ParticleId::new(1, minor)).collect()
	}

	#[test]
	fn absent_particle_yields_empty_set() {
		let tree = McTree::default();
		assert!(collect_ids(&tree, None).unwrap().is_empty());
	}

	#[test]
	fn leaf_primary_yields_itself() {
		let tree = McTree::from_nodes(vec![node(particle(1, ParticleType::NuTau), None)]).unwrap();
		let primary = tree.primaries()[0];
		assert_eq!(collect_ids(&tree, Some(primary)).unwrap(), ids(&[1]));
	}

	#[test]
	fn collects_whole_lineage_only() {
		let tree = McTree::from_nodes(vec![
			node(particle(1, ParticleType::NuTau), None),
			node(particle(2, ParticleType::TauMinus), Some(1)),
			node(particle(3, ParticleType::Hadrons), Some(1)),
			node(particle(4, ParticleType::Hadrons), Some(2)),
			node(particle(5, ParticleType::NuTau), Some(2)),
			node(particle(6, ParticleType::Hadrons), Some(5)),
			node(particle(7, ParticleType::MuMinus), None),
		])
		.unwrap();

		let primary = tree.primaries()[0];
		assert_eq!(collect_ids(&tree, Some(primary)).unwrap(), ids(&[1, 2, 3, 4, 5, 6]));

		let tau = tree.get(&ParticleId::new(1, 2)).unwrap();
		assert_eq!(collect_ids(&tree, Some(tau)).unwrap(), ids(&[2, 4, 5, 6]));
	}

	#[test]
	fn daughter_order_does_not_matter() {
		let forward = ListTree::new(&[(1, 2), (1, 3), (1, 4), (3, 5)]);
		let backward = ListTree::new(&[(3, 5), (1, 4), (1, 3), (1, 2)]);
		let root = particle(1, ParticleType::NuTau);

		assert_eq!(collect_ids(&forward, Some(&root)).unwrap(), collect_ids(&backward, Some(&root)).unwrap());
	}

	#[test]
	fn cycle_is_rejected() {
		let tree = ListTree::new(&[(1, 2), (2, 3), (3, 1)]);
		let root = particle(1, ParticleType::Hadrons);
		assert!(matches!(collect_ids(&tree, Some(&root)), Err(LabelError::RevisitedParticle { .. })));
	}

	#[test]
	fn shared_daughter_is_rejected() {
		let tree = ListTree::new(&[(1, 2), (1, 3), (2, 4), (3, 4)]);
		let root = particle(1, ParticleType::Hadrons);
		assert_eq!(
			collect_ids(&tree, Some(&root)).unwrap_err(),
			LabelError::RevisitedParticle { id: ParticleId::new(1, 4) }
		);
	}

	#[test]
	fn unset_daughter_is_rejected() {
		let mut tree = ListTree::new(&[(1, 2)]);
		let unset = Particle { id: ParticleId::UNSET, ..particle(0, ParticleType::Hadrons) };
		tree.particles.insert(ParticleId::UNSET, unset);
		tree.children.entry(ParticleId::new(1, 2)).or_default().push(ParticleId::UNSET);

		let root = particle(1, ParticleType::NuTau);
		assert_eq!(
			collect_ids(&tree, Some(&root)).unwrap_err(),
			LabelError::UnsetDescendantId { parent: ParticleId::new(1, 2) }
		);
	}
}
