use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Origin;

/// Sensor channel, written as `"string-om"` so channel maps stay plain JSON objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ChannelKey {
	pub string: i32,
	pub om: u32,
}

impl ChannelKey {
	#[must_use]
	pub const fn new(string: i32, om: u32) -> Self {
		Self { string, om }
	}
}

impl fmt::Display for ChannelKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.string, self.om)
	}
}

impl FromStr for ChannelKey {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// string numbers can be negative, so split at the last dash
		let (string, om) = s.rsplit_once('-').ok_or_else(|| format!("channel key {s:?} is not <string>-<om>"))?;
		let string = string.parse().map_err(|err| format!("bad string number in {s:?}: {err}"))?;
		let om = om.parse().map_err(|err| format!("bad module number in {s:?}: {err}"))?;
		Ok(Self { string, om })
	}
}

impl From<ChannelKey> for String {
	fn from(key: ChannelKey) -> Self {
		key.to_string()
	}
}

impl TryFrom<String> for ChannelKey {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// Reconstructed detector pulse. Only `time` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
	pub time: f64,
	#[serde(default)]
	pub charge: f64,
	#[serde(default)]
	pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotoElectron {
	pub time: f64,
	#[serde(rename = "id")]
	pub origin: Origin,
}

pub type PulseSeriesMap = BTreeMap<ChannelKey, Vec<Pulse>>;
pub type PhotoElectronSeriesMap = BTreeMap<ChannelKey, Vec<PhotoElectron>>;
