use nalgebra::Vector3;

use crate::Volume;

const PARALLEL_EPSILON: f64 = 1e-12;
const TOUCH_EPSILON: f64 = 1e-9;

/// Half-space `normal · x <= offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
	pub normal: Vector3<f64>,
	pub offset: f64,
}

impl Plane {
	#[must_use]
	pub fn through(point: Vector3<f64>, normal: Vector3<f64>) -> Self {
		Self { normal, offset: normal.dot(&point) }
	}

	fn signed_distance(&self, point: &Vector3<f64>) -> f64 {
		self.normal.dot(point) - self.offset
	}
}

/// Bounded convex volume described by its bounding half-spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
	planes: Vec<Plane>,
}

impl ConvexHull {
	#[must_use]
	pub const fn from_planes(planes: Vec<Plane>) -> Self {
		Self { planes }
	}

	#[must_use]
	pub fn cuboid(min: [f64; 3], max: [f64; 3]) -> Self {
		let (min, max) = (Vector3::from(min), Vector3::from(max));
		Self::from_planes(vec![
			Plane::through(min, -Vector3::x()),
			Plane::through(min, -Vector3::y()),
			Plane::through(min, -Vector3::z()),
			Plane::through(max, Vector3::x()),
			Plane::through(max, Vector3::y()),
			Plane::through(max, Vector3::z()),
		])
	}

	/// Prism over a convex footprint in the xy-plane. Either winding is accepted.
	#[must_use]
	pub fn extruded_polygon(footprint: &[[f64; 2]], z_min: f64, z_max: f64) -> Self {
		let winding = signed_area(footprint).signum();
		let mut planes = Vec::with_capacity(footprint.len() + 2);

		for (i, a) in footprint.iter().enumerate() {
			let b = footprint[(i + 1) % footprint.len()];
			let edge = Vector3::new(b[0] - a[0], b[1] - a[1], 0.0);
			let Some(outward) = edge.cross(&Vector3::z()).try_normalize(0.0) else {
				continue;
			};
			planes.push(Plane::through(Vector3::new(a[0], a[1], 0.0), outward * winding));
		}

		planes.push(Plane { normal: -Vector3::z(), offset: -z_min });
		planes.push(Plane { normal: Vector3::z(), offset: z_max });

		Self::from_planes(planes)
	}

	#[must_use]
	pub fn contains(&self, point: [f64; 3]) -> bool {
		let point = Vector3::from(point);
		self.planes.iter().all(|plane| plane.signed_distance(&point) <= TOUCH_EPSILON)
	}
}

impl Volume for ConvexHull {
	/// Clips the line against every half-space. A line touching the hull in a
	/// single point yields one parameter, a miss yields none.
	fn intersections(&self, origin: [f64; 3], direction: [f64; 3]) -> Vec<f64> {
		if self.planes.is_empty() {
			return Vec::new();
		}

		let (origin, direction) = (Vector3::from(origin), Vector3::from(direction));
		let mut t_enter = f64::NEG_INFINITY;
		let mut t_exit = f64::INFINITY;

		for plane in &self.planes {
			let rate = plane.normal.dot(&direction);
			let distance = -plane.signed_distance(&origin);

			if rate.abs() < PARALLEL_EPSILON {
				if distance < 0.0 {
					return Vec::new();
				}
				continue;
			}

			let t = distance / rate;
			if rate > 0.0 {
				t_exit = t_exit.min(t);
			} else {
				t_enter = t_enter.max(t);
			}
		}

		if t_enter > t_exit + TOUCH_EPSILON {
			return Vec::new();
		}
		if (t_exit - t_enter).abs() <= TOUCH_EPSILON {
			return vec![t_enter];
		}

		vec![t_enter, t_exit]
	}
}

fn signed_area(footprint: &[[f64; 2]]) -> f64 {
	let n = footprint.len();
	(0..n)
		.map(|i| {
			let (a, b) = (footprint[i], footprint[(i + 1) % n]);
			a[0].mul_add(b[1], -(b[0] * a[1]))
		})
		.sum::<f64>()
		/ 2.0
}
