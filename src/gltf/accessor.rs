use serde_json::Value;

use crate::gltf::json::{self, JsonMap};
use crate::gltf::{GltfError, Result};

/// Datatype of the components in an accessor element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
	/// Signed 8-bit integer (5120).
	Byte,
	/// Unsigned 8-bit integer (5121).
	UnsignedByte,
	/// Signed 16-bit integer (5122).
	Short,
	/// Unsigned 16-bit integer (5123).
	UnsignedShort,
	/// Unsigned 32-bit integer (5125).
	UnsignedInt,
	/// IEEE-754 32-bit float (5126).
	Float,
}

impl ComponentType {
	/// Validate a raw GL constant against the closed set.
	pub fn from_raw(raw: i64) -> Option<Self> {
		match raw {
			5120 => Some(Self::Byte),
			5121 => Some(Self::UnsignedByte),
			5122 => Some(Self::Short),
			5123 => Some(Self::UnsignedShort),
			5125 => Some(Self::UnsignedInt),
			5126 => Some(Self::Float),
			_ => None,
		}
	}

	/// Raw GL constant.
	pub fn raw(self) -> u32 {
		match self {
			Self::Byte => 5120,
			Self::UnsignedByte => 5121,
			Self::Short => 5122,
			Self::UnsignedShort => 5123,
			Self::UnsignedInt => 5125,
			Self::Float => 5126,
		}
	}

	/// Size of one component in bytes.
	pub fn byte_size(self) -> usize {
		match self {
			Self::Byte | Self::UnsignedByte => 1,
			Self::Short | Self::UnsignedShort => 2,
			Self::UnsignedInt | Self::Float => 4,
		}
	}

	/// Render as a stable label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Byte => "BYTE",
			Self::UnsignedByte => "UNSIGNED_BYTE",
			Self::Short => "SHORT",
			Self::UnsignedShort => "UNSIGNED_SHORT",
			Self::UnsignedInt => "UNSIGNED_INT",
			Self::Float => "FLOAT",
		}
	}
}

/// Element shape: scalar, vector, or matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
	/// Single component.
	Scalar,
	/// Two components.
	Vec2,
	/// Three components.
	Vec3,
	/// Four components.
	Vec4,
	/// 2x2 matrix, four components.
	Mat2,
	/// 3x3 matrix, nine components.
	Mat3,
	/// 4x4 matrix, sixteen components.
	Mat4,
}

impl ElementType {
	/// Validate a raw type string against the closed set.
	pub fn from_raw(raw: &str) -> Option<Self> {
		match raw {
			"SCALAR" => Some(Self::Scalar),
			"VEC2" => Some(Self::Vec2),
			"VEC3" => Some(Self::Vec3),
			"VEC4" => Some(Self::Vec4),
			"MAT2" => Some(Self::Mat2),
			"MAT3" => Some(Self::Mat3),
			"MAT4" => Some(Self::Mat4),
			_ => None,
		}
	}

	/// Number of components per element.
	pub fn component_count(self) -> usize {
		match self {
			Self::Scalar => 1,
			Self::Vec2 => 2,
			Self::Vec3 => 3,
			Self::Vec4 => 4,
			Self::Mat2 => 4,
			Self::Mat3 => 9,
			Self::Mat4 => 16,
		}
	}

	/// Render as the schema's raw label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Scalar => "SCALAR",
			Self::Vec2 => "VEC2",
			Self::Vec3 => "VEC3",
			Self::Vec4 => "VEC4",
			Self::Mat2 => "MAT2",
			Self::Mat3 => "MAT3",
			Self::Mat4 => "MAT4",
		}
	}
}

/// Index data type for sparse-override indices (unsigned only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseIndexType {
	/// Unsigned 8-bit integer (5121).
	UnsignedByte,
	/// Unsigned 16-bit integer (5123).
	UnsignedShort,
	/// Unsigned 32-bit integer (5125).
	UnsignedInt,
}

impl SparseIndexType {
	/// Validate a raw GL constant against the closed set.
	pub fn from_raw(raw: i64) -> Option<Self> {
		match raw {
			5121 => Some(Self::UnsignedByte),
			5123 => Some(Self::UnsignedShort),
			5125 => Some(Self::UnsignedInt),
			_ => None,
		}
	}
}

/// Typed, strided view description into a buffer view.
#[derive(Debug, Clone)]
pub struct Accessor {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Buffer view index, `-1` for sparse-only accessors.
	pub buffer_view: i64,
	/// Byte offset relative to the start of the buffer view.
	pub byte_offset: i64,
	/// Component datatype.
	pub component_type: ComponentType,
	/// Whether integer data should be normalized.
	pub normalized: bool,
	/// Number of elements.
	pub count: i64,
	/// Element shape.
	pub element_type: ElementType,
	/// Per-component maximum bounds, empty when absent.
	pub max: Vec<f32>,
	/// Per-component minimum bounds, empty when absent.
	pub min: Vec<f32>,
	/// Sparse override descriptor; parsed but never applied.
	pub sparse: Option<SparseAccessor>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Accessor {
	/// Tightly packed bytes per element.
	pub fn element_stride(&self) -> usize {
		self.component_type.byte_size() * self.element_type.component_count()
	}

	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let raw_component = json::require_i64(obj, "componentType", path)?;
		let component_type =
			ComponentType::from_raw(raw_component).ok_or_else(|| json::bad_enum(path, "componentType", raw_component))?;

		let raw_type = json::opt_str(obj, "type", path)?
			.ok_or_else(|| GltfError::MissingField { path: json::join(path, "type") })?;
		let element_type = ElementType::from_raw(raw_type).ok_or_else(|| json::bad_enum(path, "type", raw_type))?;

		let sparse = match obj.get("sparse") {
			None => None,
			Some(value) => Some(SparseAccessor::decode(value, &json::join(path, "sparse"))?),
		};

		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			buffer_view: json::int_or(obj, "bufferView", -1, path)?,
			byte_offset: json::int_or(obj, "byteOffset", 0, path)?,
			component_type,
			normalized: json::bool_or(obj, "normalized", false, path)?,
			count: json::require_i64(obj, "count", path)?,
			element_type,
			max: json::float_list(obj, "max", path)?,
			min: json::float_list(obj, "min", path)?,
			sparse,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Sparse storage of attributes deviating from their initialization value.
#[derive(Debug, Clone)]
pub struct SparseAccessor {
	/// Number of sparse entries.
	pub count: i64,
	/// Indices of the displaced elements.
	pub indices: SparseIndices,
	/// Displaced element values.
	pub values: SparseValues,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl SparseAccessor {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let indices = obj
			.get("indices")
			.ok_or_else(|| GltfError::MissingField { path: json::join(path, "indices") })?;
		let values = obj
			.get("values")
			.ok_or_else(|| GltfError::MissingField { path: json::join(path, "values") })?;

		Ok(Self {
			count: json::require_i64(obj, "count", path)?,
			indices: SparseIndices::decode(indices, &json::join(path, "indices"))?,
			values: SparseValues::decode(values, &json::join(path, "values"))?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Index sub-descriptor of a sparse accessor.
#[derive(Debug, Clone)]
pub struct SparseIndices {
	/// Buffer view holding the sparse indices.
	pub buffer_view: i64,
	/// Byte offset relative to the start of that buffer view.
	pub byte_offset: i64,
	/// Index data type.
	pub component_type: SparseIndexType,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl SparseIndices {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let raw = json::require_i64(obj, "componentType", path)?;
		let component_type = SparseIndexType::from_raw(raw).ok_or_else(|| json::bad_enum(path, "componentType", raw))?;

		Ok(Self {
			buffer_view: json::int_or(obj, "bufferView", -1, path)?,
			byte_offset: json::int_or(obj, "byteOffset", 0, path)?,
			component_type,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Value sub-descriptor of a sparse accessor.
#[derive(Debug, Clone)]
pub struct SparseValues {
	/// Buffer view holding the displaced values.
	pub buffer_view: i64,
	/// Byte offset relative to the start of that buffer view.
	pub byte_offset: i64,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl SparseValues {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			buffer_view: json::int_or(obj, "bufferView", -1, path)?,
			byte_offset: json::int_or(obj, "byteOffset", 0, path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

#[cfg(test)]
mod tests;
