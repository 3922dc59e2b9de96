use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{DecayTree, LabelError, Particle, ParticleId};

/// One entry of a flattened decay tree as it is stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
	pub particle: Particle,
	#[serde(default)]
	pub parent: Option<ParticleId>,
}

/// In-memory decay tree. Daughters keep the order in which they were listed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Vec<TreeNode>")]
pub struct McTree {
	particles: Vec<Particle>,
	index: HashMap<ParticleId, usize>,
	children: HashMap<ParticleId, Vec<usize>>,
	primaries: Vec<usize>,
}

impl McTree {
	pub fn from_nodes(nodes: Vec<TreeNode>) -> Result<Self, LabelError> {
		let mut tree = Self::default();
		let mut parents = Vec::with_capacity(nodes.len());

		for node in nodes {
			let id = node.particle.id;
			if tree.index.insert(id, tree.particles.len()).is_some() {
				return Err(LabelError::DuplicateParticle { id });
			}
			parents.push(node.parent);
			tree.particles.push(node.particle);
		}

		for (position, parent) in parents.into_iter().enumerate() {
			match parent {
				Some(parent) => {
					if !tree.index.contains_key(&parent) {
						return Err(LabelError::UnknownParent { id: tree.particles[position].id, parent });
					}
					tree.children.entry(parent).or_default().push(position);
				},
				None => tree.primaries.push(position),
			}
		}

		Ok(tree)
	}

	#[must_use]
	pub fn get(&self, id: &ParticleId) -> Option<&Particle> {
		self.index.get(id).map(|&position| &self.particles[position])
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

impl TryFrom<Vec<TreeNode>> for McTree {
	type Error = LabelError;

	fn try_from(nodes: Vec<TreeNode>) -> Result<Self, Self::Error> {
		Self::from_nodes(nodes)
	}
}

impl DecayTree for McTree {
	fn primaries(&self) -> Vec<&Particle> {
		self.primaries.iter().map(|&position| &self.particles[position]).collect()
	}

	fn daughters(&self, particle: &Particle) -> Vec<&Particle> {
		self.children
			.get(&particle.id)
			.map(|positions| positions.iter().map(|&position| &self.particles[position]).collect())
			.unwrap_or_default()
	}
}

/// Depth-first pre-order walk over every particle reachable from the primaries.
pub(crate) fn preorder<T: DecayTree + ?Sized>(tree: &T) -> Vec<&Particle> {
	let mut ordered = Vec::new();
	let mut stack: Vec<&Particle> = tree.primaries().into_iter().rev().collect();

	while let Some(particle) = stack.pop() {
		ordered.push(particle);
		stack.extend(tree.daughters(particle).into_iter().rev());
	}

	ordered
}
