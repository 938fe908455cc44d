use serde_json::Value;

use crate::gltf::json::{self, JsonMap};
use crate::gltf::{GltfError, Result};

/// One node of the scene hierarchy.
///
/// Either `matrix` or the TRS triple may be present; all default to empty
/// lists, which consumers treat as the identity transform.
#[derive(Debug, Clone)]
pub struct Node {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Camera index, `-1` when unset.
	pub camera: i64,
	/// Child node indices in source order.
	pub children: Vec<i64>,
	/// Skin index, `-1` when unset.
	pub skin: i64,
	/// Column-major 4x4 transform, empty when absent.
	pub matrix: Vec<f32>,
	/// Mesh index, `-1` when unset.
	pub mesh: i64,
	/// Unit quaternion `(x, y, z, w)`, empty when absent.
	pub rotation: Vec<f32>,
	/// Per-axis scale factors, empty when absent.
	pub scale: Vec<f32>,
	/// Translation along each axis, empty when absent.
	pub translation: Vec<f32>,
	/// Morph target weights, empty when absent.
	pub weights: Vec<f32>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Node {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			camera: json::int_or(obj, "camera", -1, path)?,
			children: json::index_list(obj, "children", path)?,
			skin: json::int_or(obj, "skin", -1, path)?,
			matrix: json::float_list(obj, "matrix", path)?,
			mesh: json::int_or(obj, "mesh", -1, path)?,
			rotation: json::float_list(obj, "rotation", path)?,
			scale: json::float_list(obj, "scale", path)?,
			translation: json::float_list(obj, "translation", path)?,
			weights: json::float_list(obj, "weights", path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Root node set of one scene.
#[derive(Debug, Clone)]
pub struct Scene {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Root node indices in source order.
	pub nodes: Vec<i64>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Scene {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			nodes: json::index_list(obj, "nodes", path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Joints and inverse-bind matrices defining a skin.
#[derive(Debug, Clone)]
pub struct Skin {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Accessor index of the 4x4 inverse-bind matrices, `-1` when unset.
	pub inverse_bind_matrices: i64,
	/// Skeleton root node index, `-1` when unset.
	pub skeleton: i64,
	/// Joint node indices in source order.
	pub joints: Vec<i64>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Skin {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			inverse_bind_matrices: json::int_or(obj, "inverseBindMatrices", -1, path)?,
			skeleton: json::int_or(obj, "skeleton", -1, path)?,
			joints: json::index_list(obj, "joints", path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Projection kind of a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraKind {
	/// Perspective projection.
	Perspective,
	/// Orthographic projection.
	Orthographic,
}

impl CameraKind {
	/// Validate a raw kind string against the closed set.
	pub fn from_raw(raw: &str) -> Option<Self> {
		match raw {
			"perspective" => Some(Self::Perspective),
			"orthographic" => Some(Self::Orthographic),
			_ => None,
		}
	}

	/// Render as the schema's raw label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Perspective => "perspective",
			Self::Orthographic => "orthographic",
		}
	}
}

/// Orthographic projection parameters.
#[derive(Debug, Clone)]
pub struct CameraOrthographic {
	/// Horizontal magnification, NaN when absent.
	pub xmag: f32,
	/// Vertical magnification, NaN when absent.
	pub ymag: f32,
	/// Far clipping plane distance, NaN when absent.
	pub zfar: f32,
	/// Near clipping plane distance, NaN when absent.
	pub znear: f32,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl CameraOrthographic {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			xmag: json::float_or(obj, "xmag", f32::NAN, path)?,
			ymag: json::float_or(obj, "ymag", f32::NAN, path)?,
			zfar: json::float_or(obj, "zfar", f32::NAN, path)?,
			znear: json::float_or(obj, "znear", f32::NAN, path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Perspective projection parameters.
#[derive(Debug, Clone)]
pub struct CameraPerspective {
	/// Aspect ratio of the field of view, NaN when absent.
	pub aspect_ratio: f32,
	/// Vertical field of view in radians, NaN when absent.
	pub yfov: f32,
	/// Far clipping plane distance, NaN for an infinite projection.
	pub zfar: f32,
	/// Near clipping plane distance, NaN when absent.
	pub znear: f32,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl CameraPerspective {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			aspect_ratio: json::float_or(obj, "aspectRatio", f32::NAN, path)?,
			yfov: json::float_or(obj, "yfov", f32::NAN, path)?,
			zfar: json::float_or(obj, "zfar", f32::NAN, path)?,
			znear: json::float_or(obj, "znear", f32::NAN, path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Camera projection referenced by a node.
#[derive(Debug, Clone)]
pub struct Camera {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Which projection the camera uses.
	pub kind: CameraKind,
	/// Orthographic parameters, set when `kind` is orthographic.
	pub orthographic: Option<CameraOrthographic>,
	/// Perspective parameters, set when `kind` is perspective.
	pub perspective: Option<CameraPerspective>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Camera {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let raw_kind = json::opt_str(obj, "type", path)?
			.ok_or_else(|| GltfError::MissingField { path: json::join(path, "type") })?;
		let kind = CameraKind::from_raw(raw_kind).ok_or_else(|| json::bad_enum(path, "type", raw_kind))?;

		let orthographic = match obj.get("orthographic") {
			None => None,
			Some(value) => Some(CameraOrthographic::decode(value, &json::join(path, "orthographic"))?),
		};
		let perspective = match obj.get("perspective") {
			None => None,
			Some(value) => Some(CameraPerspective::decode(value, &json::join(path, "perspective"))?),
		};

		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			kind,
			orthographic,
			perspective,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}
