use serde_json::json;

use crate::gltf::resolve::{accessor_bytes, buffer_view_bytes};
use crate::gltf::{Document, GltfError};

fn document(value: serde_json::Value) -> Document {
	Document::decode(value.to_string().as_bytes()).expect("document decodes")
}

fn float_vec3_document(count: i64) -> Document {
	document(json!({
		"asset": { "version": "2.0" },
		"buffers": [{ "byteLength": 36 }],
		"bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }],
		"accessors": [{
			"bufferView": 0,
			"byteOffset": 0,
			"componentType": 5126,
			"count": count,
			"type": "VEC3",
		}],
	}))
}

#[test]
fn resolves_tightly_packed_float_vec3_range() {
	let doc = float_vec3_document(3);
	let bin = vec![0_u8; 36];

	let bytes = accessor_bytes(&doc, &bin, 0).expect("range resolves");
	assert_eq!(bytes.len(), 36);
}

#[test]
fn resolved_view_borrows_from_the_binary_chunk() {
	let doc = float_vec3_document(3);
	let bin = vec![7_u8; 36];

	let bytes = accessor_bytes(&doc, &bin, 0).expect("range resolves");
	assert!(std::ptr::eq(bytes.as_ptr(), bin.as_ptr()));
}

#[test]
fn rejects_range_past_end_of_binary_chunk() {
	let doc = float_vec3_document(3);
	let bin = vec![0_u8; 30];

	let err = accessor_bytes(&doc, &bin, 0).expect_err("short chunk should fail");
	assert!(matches!(
		err,
		GltfError::BufferRangeOutOfBounds { start: 0, len: 36, buffer: 30 }
	));
}

#[test]
fn rejects_buffer_view_index_past_collection_end() {
	let doc = document(json!({
		"asset": { "version": "2.0" },
		"bufferViews": [
			{ "buffer": 0, "byteLength": 16 },
			{ "buffer": 0, "byteLength": 16 },
		],
		"accessors": [{
			"bufferView": 5,
			"componentType": 5126,
			"count": 1,
			"type": "SCALAR",
		}],
	}));

	let err = accessor_bytes(&doc, &[0_u8; 32], 0).expect_err("dangling index should fail");
	assert!(matches!(
		err,
		GltfError::IndexOutOfRange { kind: "bufferView", index: 5, len: 2 }
	));
}

#[test]
fn rejects_accessor_index_past_collection_end() {
	let doc = float_vec3_document(3);

	let err = accessor_bytes(&doc, &[0_u8; 36], 9).expect_err("dangling index should fail");
	assert!(matches!(err, GltfError::IndexOutOfRange { kind: "accessor", index: 9, len: 1 }));
}

#[test]
fn sparse_only_accessor_has_no_dense_bytes() {
	let doc = document(json!({
		"asset": { "version": "2.0" },
		"accessors": [{
			"componentType": 5126,
			"count": 10,
			"type": "VEC3",
			"sparse": {
				"count": 2,
				"indices": { "bufferView": 0, "componentType": 5123 },
				"values": { "bufferView": 1 },
			},
		}],
	}));

	let err = accessor_bytes(&doc, &[0_u8; 120], 0).expect_err("sparse-only dense resolve should fail");
	assert!(matches!(err, GltfError::IndexOutOfRange { kind: "bufferView", index: -1, .. }));
}

#[test]
fn offsets_compose_view_offset_plus_accessor_offset() {
	let doc = document(json!({
		"asset": { "version": "2.0" },
		"bufferViews": [{ "buffer": 0, "byteOffset": 4, "byteLength": 12 }],
		"accessors": [{
			"bufferView": 0,
			"byteOffset": 4,
			"componentType": 5121,
			"count": 4,
			"type": "SCALAR",
		}],
	}));
	let bin: Vec<u8> = (0..16).collect();

	let bytes = accessor_bytes(&doc, &bin, 0).expect("range resolves");
	assert_eq!(bytes, &bin[8..12]);
}

#[test]
fn rejects_explicitly_negative_count() {
	let doc = float_vec3_document(-1);

	let err = accessor_bytes(&doc, &[0_u8; 36], 0).expect_err("negative count should fail");
	assert!(matches!(err, GltfError::NegativeFieldValue { field: "count", value: -1 }));
}

#[test]
fn resolves_buffer_view_window() {
	let doc = document(json!({
		"asset": { "version": "2.0" },
		"bufferViews": [{ "buffer": 0, "byteOffset": 2, "byteLength": 5 }],
	}));
	let bin: Vec<u8> = (0..10).collect();

	let bytes = buffer_view_bytes(&doc, &bin, 0).expect("window resolves");
	assert_eq!(bytes, &bin[2..7]);
}

#[test]
fn rejects_buffer_view_window_past_end() {
	let doc = document(json!({
		"asset": { "version": "2.0" },
		"bufferViews": [{ "buffer": 0, "byteOffset": 8, "byteLength": 8 }],
	}));

	let err = buffer_view_bytes(&doc, &[0_u8; 12], 0).expect_err("overrunning window should fail");
	assert!(matches!(err, GltfError::BufferRangeOutOfBounds { start: 8, len: 8, buffer: 12 }));
}
