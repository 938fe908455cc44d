//! Shared fixture helpers: assemble GLB containers in memory.

use serde_json::Value;

/// Build a two-chunk GLB container around `json` and `bin`.
///
/// The JSON chunk is space-padded to a four-byte boundary the way real
/// exporters write it; the reader itself only trusts declared lengths.
pub fn build_glb(json: &Value, bin: &[u8]) -> Vec<u8> {
	let mut json_bytes = json.to_string().into_bytes();
	while json_bytes.len() % 4 != 0 {
		json_bytes.push(b' ');
	}

	let total = 12 + (8 + json_bytes.len()) + (8 + bin.len());
	let mut out = Vec::with_capacity(total);
	out.extend_from_slice(b"glTF");
	out.extend_from_slice(&2_u32.to_le_bytes());
	out.extend_from_slice(&(total as u32).to_le_bytes());

	out.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
	out.extend_from_slice(b"JSON");
	out.extend_from_slice(&json_bytes);

	out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
	out.extend_from_slice(b"BIN\0");
	out.extend_from_slice(bin);

	out
}

/// Little-endian byte image of an `f32` slice.
pub fn f32_bytes(values: &[f32]) -> Vec<u8> {
	values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Little-endian byte image of a `u16` slice.
pub fn u16_bytes(values: &[u16]) -> Vec<u8> {
	values.iter().flat_map(|v| v.to_le_bytes()).collect()
}
