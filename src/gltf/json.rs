//! Shape-checking field extraction over loosely typed JSON values.
//!
//! Every helper reports failures with the dotted path of the offending
//! field. Absent optional fields fall back to the schema's fixed
//! defaults; shape violations never coerce.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::gltf::{GltfError, Result};

/// Ordered JSON object map, as parsed from the source text.
pub type JsonMap = Map<String, Value>;

pub(crate) fn join(path: &str, key: &str) -> String {
	format!("{path}.{key}")
}

pub(crate) fn bad_enum(path: &str, key: &str, raw: impl std::fmt::Display) -> GltfError {
	GltfError::InvalidEnumValue {
		path: join(path, key),
		value: raw.to_string(),
	}
}

pub(crate) fn object<'a>(value: &'a Value, path: &str) -> Result<&'a JsonMap> {
	value.as_object().ok_or_else(|| GltfError::UnexpectedType {
		path: path.to_owned(),
		expected: "object",
	})
}

pub(crate) fn array<'a>(value: &'a Value, path: &str) -> Result<&'a [Value]> {
	value.as_array().map(Vec::as_slice).ok_or_else(|| GltfError::UnexpectedType {
		path: path.to_owned(),
		expected: "array",
	})
}

pub(crate) fn opt_i64(obj: &JsonMap, key: &str, path: &str) -> Result<Option<i64>> {
	match obj.get(key) {
		None => Ok(None),
		Some(value) => value.as_i64().map(Some).ok_or_else(|| GltfError::UnexpectedType {
			path: join(path, key),
			expected: "integer",
		}),
	}
}

pub(crate) fn opt_str<'a>(obj: &'a JsonMap, key: &str, path: &str) -> Result<Option<&'a str>> {
	match obj.get(key) {
		None => Ok(None),
		Some(value) => value.as_str().map(Some).ok_or_else(|| GltfError::UnexpectedType {
			path: join(path, key),
			expected: "string",
		}),
	}
}

/// Integer field with an explicit default, `-1` for index fields.
pub(crate) fn int_or(obj: &JsonMap, key: &str, default: i64, path: &str) -> Result<i64> {
	Ok(opt_i64(obj, key, path)?.unwrap_or(default))
}

/// Required integer field.
pub(crate) fn require_i64(obj: &JsonMap, key: &str, path: &str) -> Result<i64> {
	opt_i64(obj, key, path)?.ok_or_else(|| GltfError::MissingField { path: join(path, key) })
}

pub(crate) fn float_or(obj: &JsonMap, key: &str, default: f32, path: &str) -> Result<f32> {
	match obj.get(key) {
		None => Ok(default),
		Some(value) => value.as_f64().map(|v| v as f32).ok_or_else(|| GltfError::UnexpectedType {
			path: join(path, key),
			expected: "number",
		}),
	}
}

pub(crate) fn bool_or(obj: &JsonMap, key: &str, default: bool, path: &str) -> Result<bool> {
	match obj.get(key) {
		None => Ok(default),
		Some(value) => value.as_bool().ok_or_else(|| GltfError::UnexpectedType {
			path: join(path, key),
			expected: "bool",
		}),
	}
}

/// String field defaulting to the empty string.
pub(crate) fn string_or_empty(obj: &JsonMap, key: &str, path: &str) -> Result<String> {
	Ok(opt_str(obj, key, path)?.unwrap_or_default().to_owned())
}

/// Required string field.
pub(crate) fn require_string(obj: &JsonMap, key: &str, path: &str) -> Result<String> {
	opt_str(obj, key, path)?
		.map(str::to_owned)
		.ok_or_else(|| GltfError::MissingField { path: join(path, key) })
}

/// Array of numbers defaulting to an empty list.
pub(crate) fn float_list(obj: &JsonMap, key: &str, path: &str) -> Result<Vec<f32>> {
	let Some(value) = obj.get(key) else {
		return Ok(Vec::new());
	};
	let items = value.as_array().ok_or_else(|| GltfError::UnexpectedType {
		path: join(path, key),
		expected: "array",
	})?;

	let mut out = Vec::with_capacity(items.len());
	for (idx, item) in items.iter().enumerate() {
		let number = item.as_f64().ok_or_else(|| GltfError::UnexpectedType {
			path: format!("{path}.{key}[{idx}]"),
			expected: "number",
		})?;
		out.push(number as f32);
	}
	Ok(out)
}

/// Array of integer indices defaulting to an empty list.
pub(crate) fn index_list(obj: &JsonMap, key: &str, path: &str) -> Result<Vec<i64>> {
	let Some(value) = obj.get(key) else {
		return Ok(Vec::new());
	};
	let items = value.as_array().ok_or_else(|| GltfError::UnexpectedType {
		path: join(path, key),
		expected: "array",
	})?;

	let mut out = Vec::with_capacity(items.len());
	for (idx, item) in items.iter().enumerate() {
		let index = item.as_i64().ok_or_else(|| GltfError::UnexpectedType {
			path: format!("{path}.{key}[{idx}]"),
			expected: "integer",
		})?;
		out.push(index);
	}
	Ok(out)
}

/// Array of strings defaulting to an empty list.
pub(crate) fn string_list(obj: &JsonMap, key: &str, path: &str) -> Result<Vec<String>> {
	let Some(value) = obj.get(key) else {
		return Ok(Vec::new());
	};
	let items = value.as_array().ok_or_else(|| GltfError::UnexpectedType {
		path: join(path, key),
		expected: "array",
	})?;

	let mut out = Vec::with_capacity(items.len());
	for (idx, item) in items.iter().enumerate() {
		let text = item.as_str().ok_or_else(|| GltfError::UnexpectedType {
			path: format!("{path}.{key}[{idx}]"),
			expected: "string",
		})?;
		out.push(text.to_owned());
	}
	Ok(out)
}

/// Opaque passthrough map (`extensions`, `extras`), captured verbatim.
pub(crate) fn opaque_map(obj: &JsonMap, key: &str, path: &str) -> Result<JsonMap> {
	match obj.get(key) {
		None => Ok(JsonMap::new()),
		Some(value) => Ok(object(value, &join(path, key))?.clone()),
	}
}

/// Attribute semantic map: semantic string to accessor index.
pub(crate) fn attribute_map(value: &Value, path: &str) -> Result<BTreeMap<String, i64>> {
	let obj = object(value, path)?;
	let mut out = BTreeMap::new();
	for (semantic, item) in obj {
		let index = item.as_i64().ok_or_else(|| GltfError::UnexpectedType {
			path: join(path, semantic),
			expected: "integer",
		})?;
		out.insert(semantic.clone(), index);
	}
	Ok(out)
}

/// Attribute semantic map field defaulting to an empty mapping.
pub(crate) fn attribute_map_or_empty(obj: &JsonMap, key: &str, path: &str) -> Result<BTreeMap<String, i64>> {
	match obj.get(key) {
		None => Ok(BTreeMap::new()),
		Some(value) => attribute_map(value, &join(path, key)),
	}
}
