use serde_json::json;

use crate::gltf::accessor::Accessor;
use crate::gltf::{ComponentType, ElementType, GltfError, SparseIndexType};

#[test]
fn component_byte_size_table() {
	assert_eq!(ComponentType::Byte.byte_size(), 1);
	assert_eq!(ComponentType::UnsignedByte.byte_size(), 1);
	assert_eq!(ComponentType::Short.byte_size(), 2);
	assert_eq!(ComponentType::UnsignedShort.byte_size(), 2);
	assert_eq!(ComponentType::UnsignedInt.byte_size(), 4);
	assert_eq!(ComponentType::Float.byte_size(), 4);
}

#[test]
fn component_count_table() {
	assert_eq!(ElementType::Scalar.component_count(), 1);
	assert_eq!(ElementType::Vec2.component_count(), 2);
	assert_eq!(ElementType::Vec3.component_count(), 3);
	assert_eq!(ElementType::Vec4.component_count(), 4);
	assert_eq!(ElementType::Mat2.component_count(), 4);
	assert_eq!(ElementType::Mat3.component_count(), 9);
	assert_eq!(ElementType::Mat4.component_count(), 16);
}

#[test]
fn closed_sets_reject_unknown_raw_values() {
	assert!(ComponentType::from_raw(5124).is_none());
	assert!(ComponentType::from_raw(0).is_none());
	assert!(ElementType::from_raw("VEC5").is_none());
	assert!(ElementType::from_raw("scalar").is_none());
	assert!(SparseIndexType::from_raw(5120).is_none());
}

#[test]
fn decodes_full_accessor() {
	let value = json!({
		"bufferView": 1,
		"byteOffset": 24,
		"componentType": 5126,
		"normalized": true,
		"count": 12,
		"type": "VEC3",
		"min": [-1.0, -1.0, -1.0],
		"max": [1.0, 1.0, 1.0],
		"name": "positions",
	});

	let accessor = Accessor::decode(&value, "accessors[0]").expect("accessor decodes");
	assert_eq!(accessor.buffer_view, 1);
	assert_eq!(accessor.byte_offset, 24);
	assert_eq!(accessor.component_type, ComponentType::Float);
	assert!(accessor.normalized);
	assert_eq!(accessor.count, 12);
	assert_eq!(accessor.element_type, ElementType::Vec3);
	assert_eq!(accessor.min, vec![-1.0, -1.0, -1.0]);
	assert_eq!(accessor.max, vec![1.0, 1.0, 1.0]);
	assert_eq!(accessor.name, "positions");
	assert_eq!(accessor.element_stride(), 12);
	assert!(accessor.sparse.is_none());
}

#[test]
fn omitted_fields_take_documented_defaults() {
	let value = json!({ "componentType": 5123, "count": 6, "type": "SCALAR" });

	let accessor = Accessor::decode(&value, "accessors[0]").expect("accessor decodes");
	assert_eq!(accessor.buffer_view, -1);
	assert_eq!(accessor.byte_offset, 0);
	assert!(!accessor.normalized);
	assert!(accessor.min.is_empty());
	assert!(accessor.max.is_empty());
	assert!(accessor.name.is_empty());
	assert!(accessor.extensions.is_empty());
	assert!(accessor.extras.is_empty());
}

#[test]
fn rejects_component_type_outside_closed_set() {
	let value = json!({ "componentType": 9999, "count": 1, "type": "SCALAR" });

	let err = Accessor::decode(&value, "accessors[0]").expect_err("bad enum should fail");
	assert!(matches!(
		err,
		GltfError::InvalidEnumValue { ref path, ref value } if path == "accessors[0].componentType" && value == "9999"
	));
}

#[test]
fn rejects_missing_count() {
	let value = json!({ "componentType": 5126, "type": "SCALAR" });

	let err = Accessor::decode(&value, "accessors[3]").expect_err("missing count should fail");
	assert!(matches!(err, GltfError::MissingField { ref path } if path == "accessors[3].count"));
}

#[test]
fn decodes_sparse_descriptor_without_resolving_it() {
	let value = json!({
		"componentType": 5126,
		"count": 100,
		"type": "VEC3",
		"sparse": {
			"count": 3,
			"indices": { "bufferView": 2, "byteOffset": 0, "componentType": 5123 },
			"values": { "bufferView": 3 },
		},
	});

	let accessor = Accessor::decode(&value, "accessors[0]").expect("sparse accessor decodes");
	let sparse = accessor.sparse.expect("sparse descriptor present");
	assert_eq!(sparse.count, 3);
	assert_eq!(sparse.indices.buffer_view, 2);
	assert_eq!(sparse.indices.component_type, SparseIndexType::UnsignedShort);
	assert_eq!(sparse.values.buffer_view, 3);
	assert_eq!(sparse.values.byte_offset, 0);
}

#[test]
fn rejects_sparse_index_type_outside_closed_set() {
	let value = json!({
		"componentType": 5126,
		"count": 4,
		"type": "SCALAR",
		"sparse": {
			"count": 1,
			"indices": { "bufferView": 0, "componentType": 5120 },
			"values": { "bufferView": 1 },
		},
	});

	let err = Accessor::decode(&value, "accessors[0]").expect_err("signed sparse index type should fail");
	assert!(matches!(
		err,
		GltfError::InvalidEnumValue { ref path, .. } if path == "accessors[0].sparse.indices.componentType"
	));
}
