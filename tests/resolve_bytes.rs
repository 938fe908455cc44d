//! Accessor resolution against a parsed container, end to end.

use glbdoc::gltf::{GltfError, accessor_bytes, buffer_view_bytes, parse_glb};
use serde_json::json;

mod common;

fn skinned_quad_glb() -> Vec<u8> {
	// Positions (4 x vec3 f32, 48 bytes) then indices (6 x u16, 12 bytes).
	let mut bin = common::f32_bytes(&[
		0.0, 0.0, 0.0, //
		1.0, 0.0, 0.0, //
		1.0, 1.0, 0.0, //
		0.0, 1.0, 0.0, //
	]);
	bin.extend_from_slice(&common::u16_bytes(&[0, 1, 2, 0, 2, 3]));

	let value = json!({
		"asset": { "version": "2.0" },
		"buffers": [{ "byteLength": bin.len() }],
		"bufferViews": [
			{ "buffer": 0, "byteOffset": 0, "byteLength": 48 },
			{ "buffer": 0, "byteOffset": 48, "byteLength": 12 },
		],
		"accessors": [
			{ "bufferView": 0, "componentType": 5126, "count": 4, "type": "VEC3" },
			{ "bufferView": 1, "componentType": 5123, "count": 6, "type": "SCALAR" },
		],
		"meshes": [{
			"primitives": [{ "attributes": { "POSITION": 0 }, "indices": 1 }],
		}],
	});
	common::build_glb(&value, &bin)
}

#[test]
fn resolves_position_and_index_streams() {
	let bytes = skinned_quad_glb();
	let (document, bin) = parse_glb(&bytes).expect("container parses");

	let positions = accessor_bytes(&document, bin, 0).expect("positions resolve");
	assert_eq!(positions.len(), 4 * 3 * 4);
	assert_eq!(&positions[..4], &0.0_f32.to_le_bytes());

	let primitive = &document.meshes[0].primitives[0];
	let indices = accessor_bytes(&document, bin, primitive.indices as usize).expect("indices resolve");
	assert_eq!(indices.len(), 6 * 2);
	assert_eq!(&indices[..2], &0_u16.to_le_bytes());
	assert_eq!(&indices[2..4], &1_u16.to_le_bytes());
}

#[test]
fn resolved_ranges_stay_inside_the_caller_owned_chunk() {
	let bytes = skinned_quad_glb();
	let (document, bin) = parse_glb(&bytes).expect("container parses");

	let positions = accessor_bytes(&document, bin, 0).expect("positions resolve");
	let chunk_start = bin.as_ptr() as usize;
	let view_start = positions.as_ptr() as usize;
	assert!(view_start >= chunk_start);
	assert!(view_start + positions.len() <= chunk_start + bin.len());
}

#[test]
fn buffer_view_window_matches_declared_range() {
	let bytes = skinned_quad_glb();
	let (document, bin) = parse_glb(&bytes).expect("container parses");

	let window = buffer_view_bytes(&document, bin, 1).expect("window resolves");
	assert_eq!(window.len(), 12);
	assert_eq!(window, &bin[48..60]);
}

#[test]
fn resolution_is_pure_and_repeatable() {
	let bytes = skinned_quad_glb();
	let (document, bin) = parse_glb(&bytes).expect("container parses");

	let first = accessor_bytes(&document, bin, 0).expect("first resolve");
	let second = accessor_bytes(&document, bin, 0).expect("second resolve");
	assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
	assert_eq!(first, second);
}

#[test]
fn count_stride_product_overrunning_the_chunk_fails() {
	let mut bin = common::f32_bytes(&[0.0; 9]);
	bin.truncate(30);
	let value = json!({
		"asset": { "version": "2.0" },
		"buffers": [{ "byteLength": 30 }],
		"bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 30 }],
		"accessors": [{ "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3" }],
	});
	let bytes = common::build_glb(&value, &bin);

	let (document, bin) = parse_glb(&bytes).expect("container parses");
	let err = accessor_bytes(&document, bin, 0).expect_err("36-byte range in 30-byte chunk should fail");
	assert!(matches!(err, GltfError::BufferRangeOutOfBounds { start: 0, len: 36, buffer: 30 }));
}
