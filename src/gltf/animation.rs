use serde_json::Value;

use crate::gltf::json::{self, JsonMap};
use crate::gltf::{GltfError, Result};

/// Node property animated by a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPath {
	/// Translation along x, y, z.
	Translation,
	/// Rotation quaternion `(x, y, z, w)`.
	Rotation,
	/// Scale factors along x, y, z.
	Scale,
	/// Morph target weights.
	Weights,
}

impl TargetPath {
	/// Validate a raw path string against the closed set.
	pub fn from_raw(raw: &str) -> Option<Self> {
		match raw {
			"translation" => Some(Self::Translation),
			"rotation" => Some(Self::Rotation),
			"scale" => Some(Self::Scale),
			"weights" => Some(Self::Weights),
			_ => None,
		}
	}

	/// Render as the schema's raw label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Translation => "translation",
			Self::Rotation => "rotation",
			Self::Scale => "scale",
			Self::Weights => "weights",
		}
	}
}

/// Keyframe interpolation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
	/// Linear interpolation between keyframes.
	Linear,
	/// Hold the previous keyframe value.
	Step,
	/// Cubic spline with in/out tangents.
	CubicSpline,
}

impl Interpolation {
	/// Validate a raw interpolation string against the closed set.
	pub fn from_raw(raw: &str) -> Option<Self> {
		match raw {
			"LINEAR" => Some(Self::Linear),
			"STEP" => Some(Self::Step),
			"CUBICSPLINE" => Some(Self::CubicSpline),
			_ => None,
		}
	}

	/// Render as the schema's raw label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Linear => "LINEAR",
			Self::Step => "STEP",
			Self::CubicSpline => "CUBICSPLINE",
		}
	}
}

/// Node and property targeted by an animation channel.
#[derive(Debug, Clone)]
pub struct ChannelTarget {
	/// Target node index, `-1` when unset.
	pub node: i64,
	/// Which property of the node is animated.
	pub path: TargetPath,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl ChannelTarget {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let raw = json::opt_str(obj, "path", path)?
			.ok_or_else(|| GltfError::MissingField { path: json::join(path, "path") })?;
		let target_path = TargetPath::from_raw(raw).ok_or_else(|| json::bad_enum(path, "path", raw))?;

		Ok(Self {
			node: json::int_or(obj, "node", -1, path)?,
			path: target_path,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Pairing of a sampler with the property it drives.
#[derive(Debug, Clone)]
pub struct AnimationChannel {
	/// Sampler index inside this animation, `-1` when unset.
	pub sampler: i64,
	/// Targeted node and property.
	pub target: Option<ChannelTarget>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl AnimationChannel {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let target = match obj.get("target") {
			None => None,
			Some(value) => Some(ChannelTarget::decode(value, &json::join(path, "target"))?),
		};

		Ok(Self {
			sampler: json::int_or(obj, "sampler", -1, path)?,
			target,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Keyframe curve: input times, output values, interpolation.
#[derive(Debug, Clone)]
pub struct AnimationSampler {
	/// Accessor index of keyframe input times, `-1` when unset.
	pub input: i64,
	/// Interpolation algorithm, `LINEAR` when absent.
	pub interpolation: Interpolation,
	/// Accessor index of keyframe output values, `-1` when unset.
	pub output: i64,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl AnimationSampler {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let interpolation = match json::opt_str(obj, "interpolation", path)? {
			None => Interpolation::Linear,
			Some(raw) => Interpolation::from_raw(raw).ok_or_else(|| json::bad_enum(path, "interpolation", raw))?,
		};

		Ok(Self {
			input: json::int_or(obj, "input", -1, path)?,
			interpolation,
			output: json::int_or(obj, "output", -1, path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// A keyframe animation: channels driven by samplers.
#[derive(Debug, Clone)]
pub struct Animation {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Channels in source order.
	pub channels: Vec<AnimationChannel>,
	/// Samplers in source order; channel `sampler` fields index here.
	pub samplers: Vec<AnimationSampler>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Animation {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let mut channels = Vec::new();
		if let Some(value) = obj.get("channels") {
			let items = json::array(value, &json::join(path, "channels"))?;
			for (idx, item) in items.iter().enumerate() {
				channels.push(AnimationChannel::decode(item, &format!("{path}.channels[{idx}]"))?);
			}
		}

		let mut samplers = Vec::new();
		if let Some(value) = obj.get("samplers") {
			let items = json::array(value, &json::join(path, "samplers"))?;
			for (idx, item) in items.iter().enumerate() {
				samplers.push(AnimationSampler::decode(item, &format!("{path}.samplers[{idx}]"))?);
			}
		}

		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			channels,
			samplers,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}
