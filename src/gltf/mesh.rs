use std::collections::BTreeMap;

use serde_json::Value;

use crate::gltf::json::{self, JsonMap};
use crate::gltf::Result;

/// Rasterization topology of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
	/// Individual points (0).
	Points,
	/// Individual line segments (1).
	Lines,
	/// Closed line loop (2).
	LineLoop,
	/// Connected line strip (3).
	LineStrip,
	/// Individual triangles (4).
	Triangles,
	/// Connected triangle strip (5).
	TriangleStrip,
	/// Triangle fan (6).
	TriangleFan,
}

impl PrimitiveMode {
	/// Validate a raw mode constant against the closed set.
	pub fn from_raw(raw: i64) -> Option<Self> {
		match raw {
			0 => Some(Self::Points),
			1 => Some(Self::Lines),
			2 => Some(Self::LineLoop),
			3 => Some(Self::LineStrip),
			4 => Some(Self::Triangles),
			5 => Some(Self::TriangleStrip),
			6 => Some(Self::TriangleFan),
			_ => None,
		}
	}

	/// Render as a stable label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Points => "POINTS",
			Self::Lines => "LINES",
			Self::LineLoop => "LINE_LOOP",
			Self::LineStrip => "LINE_STRIP",
			Self::Triangles => "TRIANGLES",
			Self::TriangleStrip => "TRIANGLE_STRIP",
			Self::TriangleFan => "TRIANGLE_FAN",
		}
	}
}

/// Geometry rendered with one material.
#[derive(Debug, Clone)]
pub struct MeshPrimitive {
	/// Attribute semantic to accessor index.
	pub attributes: BTreeMap<String, i64>,
	/// Accessor index of the index buffer, `-1` for non-indexed geometry.
	pub indices: i64,
	/// Material index, `-1` when unset.
	pub material: i64,
	/// Rasterization topology, `TRIANGLES` when absent.
	pub mode: PrimitiveMode,
	/// Morph target displacement maps, semantic to accessor index.
	pub targets: Vec<BTreeMap<String, i64>>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl MeshPrimitive {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let mode = match json::opt_i64(obj, "mode", path)? {
			None => PrimitiveMode::Triangles,
			Some(raw) => PrimitiveMode::from_raw(raw).ok_or_else(|| json::bad_enum(path, "mode", raw))?,
		};

		let mut targets = Vec::new();
		if let Some(value) = obj.get("targets") {
			let items = json::array(value, &json::join(path, "targets"))?;
			for (idx, item) in items.iter().enumerate() {
				targets.push(json::attribute_map(item, &format!("{path}.targets[{idx}]"))?);
			}
		}

		Ok(Self {
			attributes: json::attribute_map_or_empty(obj, "attributes", path)?,
			indices: json::int_or(obj, "indices", -1, path)?,
			material: json::int_or(obj, "material", -1, path)?,
			mode,
			targets,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Set of primitives rendered together under one node.
#[derive(Debug, Clone)]
pub struct Mesh {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Primitives in source order.
	pub primitives: Vec<MeshPrimitive>,
	/// Default morph target weights.
	pub weights: Vec<f32>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Mesh {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let mut primitives = Vec::new();
		if let Some(value) = obj.get("primitives") {
			let items = json::array(value, &json::join(path, "primitives"))?;
			for (idx, item) in items.iter().enumerate() {
				primitives.push(MeshPrimitive::decode(item, &format!("{path}.primitives[{idx}]"))?);
			}
		}

		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			primitives,
			weights: json::float_list(obj, "weights", path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}
