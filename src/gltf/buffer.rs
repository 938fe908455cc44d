use serde_json::Value;

use crate::gltf::json::{self, JsonMap};
use crate::gltf::Result;

/// GPU binding target hint for a buffer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferViewTarget {
	/// Vertex attribute data (34962).
	ArrayBuffer,
	/// Index data (34963).
	ElementArrayBuffer,
}

impl BufferViewTarget {
	/// Validate a raw GL constant against the closed set.
	pub fn from_raw(raw: i64) -> Option<Self> {
		match raw {
			34962 => Some(Self::ArrayBuffer),
			34963 => Some(Self::ElementArrayBuffer),
			_ => None,
		}
	}

	/// Render as a stable label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ArrayBuffer => "ARRAY_BUFFER",
			Self::ElementArrayBuffer => "ELEMENT_ARRAY_BUFFER",
		}
	}
}

/// Raw byte storage; buffer 0 is the container's embedded BIN chunk.
#[derive(Debug, Clone)]
pub struct Buffer {
	/// User-defined name, empty when absent.
	pub name: String,
	/// External location, empty for the embedded chunk.
	pub uri: String,
	/// Length of the buffer in bytes.
	pub byte_length: i64,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Buffer {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			uri: json::string_or_empty(obj, "uri", path)?,
			byte_length: json::require_i64(obj, "byteLength", path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Byte-range window into a buffer.
#[derive(Debug, Clone)]
pub struct BufferView {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Index of the buffer this view windows.
	pub buffer: i64,
	/// Byte offset into the buffer.
	pub byte_offset: i64,
	/// Length of the window in bytes.
	pub byte_length: i64,
	/// Interleaving stride in bytes, `-1` when tightly packed.
	pub byte_stride: i64,
	/// Optional GPU binding target hint.
	pub target: Option<BufferViewTarget>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl BufferView {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let target = match json::opt_i64(obj, "target", path)? {
			None => None,
			Some(raw) => Some(BufferViewTarget::from_raw(raw).ok_or_else(|| json::bad_enum(path, "target", raw))?),
		};

		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			buffer: json::require_i64(obj, "buffer", path)?,
			byte_offset: json::int_or(obj, "byteOffset", 0, path)?,
			byte_length: json::require_i64(obj, "byteLength", path)?,
			byte_stride: json::int_or(obj, "byteStride", -1, path)?,
			target,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}
