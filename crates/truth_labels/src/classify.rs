use crate::{LabelError, Particle, Volume};

/// Absolute slack on the track-length comparison.
const LENGTH_TOLERANCE: f64 = 1e-8;
/// Parameters closer than this are the same boundary point reported twice.
const DUPLICATE_TOLERANCE: f64 = 1e-9;

/// Entry and exit parameters of a line crossing the volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
	pub t_min: f64,
	pub t_max: f64,
}

impl Span {
	#[must_use]
	pub fn new(a: f64, b: f64) -> Self {
		Self { t_min: a.min(b), t_max: a.max(b) }
	}

	/// The track ends (decays or stops) before leaving the volume.
	#[must_use]
	pub fn ends_inside(&self, length: f64) -> bool {
		self.t_max >= length
	}
}

/// Raw outcome of an intersection query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
	Missed,
	/// The line only touches the boundary at a face edge or corner.
	Grazing { t: f64 },
	Crossed(Span),
}

impl Crossing {
	/// Normalizes intersection parameters in any order. Three or more distinct values can only come
	/// from a volume reporting an edge more than once, the covered segment is still `[min, max]`.
	pub fn from_parameters(mut parameters: Vec<f64>) -> Result<Self, LabelError> {
		if let Some(&value) = parameters.iter().find(|t| !t.is_finite()) {
			return Err(LabelError::NonFiniteIntersection { value });
		}

		parameters.sort_by(f64::total_cmp);
		parameters.dedup_by(|later, kept| (*later - *kept).abs() <= DUPLICATE_TOLERANCE);

		Ok(match parameters.as_slice() {
			[] => Self::Missed,
			[t] => Self::Grazing { t: *t },
			[first, .., last] => Self::Crossed(Span::new(*first, *last)),
		})
	}

	#[must_use]
	pub const fn span(&self) -> Option<Span> {
		match self {
			Self::Crossed(span) => Some(*span),
			Self::Missed | Self::Grazing { .. } => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Containment {
	/// Never meets the volume ahead of the production point.
	Absent,
	/// Produced inside the volume.
	Starting,
	/// Enters and leaves the volume before the track ends.
	ThroughGoing,
	/// Track ends before reaching the volume.
	StoppedBefore,
	/// Enters the volume and ends inside it.
	Contained,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
	pub containment: Containment,
	pub crossing: Crossing,
}

impl Classification {
	#[must_use]
	pub const fn span(&self) -> Option<Span> {
		self.crossing.span()
	}

	/// `None` if the line misses the volume, otherwise whether any part of the track lies inside it.
	#[must_use]
	pub const fn is_inside(&self) -> Option<bool> {
		match (self.crossing, self.containment) {
			(Crossing::Missed | Crossing::Grazing { .. }, _) => None,
			(_, Containment::Absent | Containment::StoppedBefore) => Some(false),
			_ => Some(true),
		}
	}
}

pub fn classify<V: Volume + ?Sized>(
	pos: [f64; 3],
	dir: [f64; 3],
	length: f64,
	volume: &V,
) -> Result<Classification, LabelError> {
	let crossing = Crossing::from_parameters(volume.intersections(pos, dir))?;

	let containment = match crossing {
		Crossing::Missed | Crossing::Grazing { .. } => Containment::Absent,
		Crossing::Crossed(span) => containment_of(span, length),
	};

	Ok(Classification { containment, crossing })
}

/// Checks whether any part of the particle's track is inside the volume. Point-like
/// particles count as inside when their vertex is.
pub fn particle_is_inside<V: Volume + ?Sized>(particle: &Particle, volume: &V) -> Result<Option<bool>, LabelError> {
	Ok(classify(particle.pos, particle.dir, particle.length, volume)?.is_inside())
}

fn containment_of(span: Span, length: f64) -> Containment {
	if span.t_min <= 0.0 && span.t_max >= 0.0 {
		Containment::Starting
	} else if span.t_max < 0.0 {
		Containment::Absent
	} else if span.t_min > length + LENGTH_TOLERANCE {
		Containment::StoppedBefore
	} else if span.ends_inside(length) {
		Containment::Contained
	} else {
		Containment::ThroughGoing
	}
}
