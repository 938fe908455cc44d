use serde_json::json;

use crate::gltf::{AlphaMode, Document, GltfError, Interpolation, PrimitiveMode, WrapMode};

fn decode(value: serde_json::Value) -> Document {
	Document::decode(value.to_string().as_bytes()).expect("document decodes")
}

#[test]
fn decodes_minimal_document() {
	let document = decode(json!({ "asset": { "version": "2.0" } }));

	assert_eq!(document.asset.version, "2.0");
	assert!(document.asset.generator.is_empty());
	assert_eq!(document.scene, -1);
	assert!(document.accessors.is_empty());
	assert!(document.meshes.is_empty());
	assert!(document.extensions_used.is_empty());
}

#[test]
fn rejects_missing_asset() {
	let err = Document::decode(b"{}").expect_err("missing asset should fail");
	assert!(matches!(err, GltfError::MissingField { ref path } if path == "asset"));
}

#[test]
fn rejects_unparseable_json() {
	let err = Document::decode(b"{not json").expect_err("garbage should fail");
	assert!(matches!(err, GltfError::MalformedJson(_)));
}

#[test]
fn empty_sampler_takes_repeat_wrapping() {
	let document = decode(json!({
		"asset": { "version": "2.0" },
		"samplers": [{}],
	}));

	let sampler = &document.samplers[0];
	assert_eq!(sampler.wrap_s, WrapMode::Repeat);
	assert_eq!(sampler.wrap_t, WrapMode::Repeat);
	assert!(sampler.mag_filter.is_none());
	assert!(sampler.min_filter.is_none());
}

#[test]
fn empty_material_takes_schema_defaults() {
	let document = decode(json!({
		"asset": { "version": "2.0" },
		"materials": [{}],
	}));

	let material = &document.materials[0];
	assert_eq!(material.alpha_mode, AlphaMode::Opaque);
	assert_eq!(material.alpha_cutoff, 0.5);
	assert!(!material.double_sided);
	assert!(material.pbr_metallic_roughness.is_none());
	assert!(material.emissive_factor.is_empty());
}

#[test]
fn pbr_factors_default_to_one() {
	let document = decode(json!({
		"asset": { "version": "2.0" },
		"materials": [{ "pbrMetallicRoughness": {} }],
	}));

	let pbr = document.materials[0].pbr_metallic_roughness.as_ref().expect("pbr present");
	assert_eq!(pbr.metallic_factor, 1.0);
	assert_eq!(pbr.roughness_factor, 1.0);
	assert!(pbr.base_color_texture.is_none());
}

#[test]
fn primitive_mode_defaults_to_triangles() {
	let document = decode(json!({
		"asset": { "version": "2.0" },
		"meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
	}));

	let primitive = &document.meshes[0].primitives[0];
	assert_eq!(primitive.mode, PrimitiveMode::Triangles);
	assert_eq!(primitive.indices, -1);
	assert_eq!(primitive.material, -1);
	assert_eq!(primitive.attributes.get("POSITION"), Some(&0));
}

#[test]
fn animation_sampler_interpolation_defaults_to_linear() {
	let document = decode(json!({
		"asset": { "version": "2.0" },
		"animations": [{
			"channels": [{ "sampler": 0, "target": { "node": 0, "path": "rotation" } }],
			"samplers": [{ "input": 0, "output": 1 }],
		}],
	}));

	let animation = &document.animations[0];
	assert_eq!(animation.samplers[0].interpolation, Interpolation::Linear);
	assert_eq!(animation.channels[0].sampler, 0);
}

#[test]
fn collections_preserve_source_order() {
	let document = decode(json!({
		"asset": { "version": "2.0" },
		"accessors": [
			{ "componentType": 5126, "count": 10, "type": "VEC3" },
			{ "componentType": 5123, "count": 20, "type": "SCALAR" },
		],
	}));

	assert_eq!(document.accessors[0].count, 10);
	assert_eq!(document.accessors[1].count, 20);
}

#[test]
fn enum_errors_name_the_collection_element() {
	let err = Document::decode(
		json!({
			"asset": { "version": "2.0" },
			"materials": [{}, { "alphaMode": "SOLID" }],
		})
		.to_string()
		.as_bytes(),
	)
	.expect_err("bad alphaMode should fail");

	assert!(matches!(
		err,
		GltfError::InvalidEnumValue { ref path, ref value } if path == "materials[1].alphaMode" && value == "SOLID"
	));
}

#[test]
fn missing_buffer_view_length_names_the_field() {
	let err = Document::decode(
		json!({
			"asset": { "version": "2.0" },
			"bufferViews": [{ "buffer": 0 }],
		})
		.to_string()
		.as_bytes(),
	)
	.expect_err("missing byteLength should fail");

	assert!(matches!(err, GltfError::MissingField { ref path } if path == "bufferViews[0].byteLength"));
}

#[test]
fn extras_and_extensions_pass_through_verbatim() {
	let extras = json!({ "b": [1, null, true], "a": { "nested": "yes" } });
	let document = decode(json!({
		"asset": { "version": "2.0" },
		"nodes": [{ "name": "root", "extras": extras.clone() }],
		"extensions": { "VENDOR_custom": { "flag": 7 } },
	}));

	let node = &document.nodes[0];
	assert_eq!(serde_json::Value::Object(node.extras.clone()), extras);
	// Key order survives the round trip.
	let keys: Vec<_> = node.extras.keys().cloned().collect();
	assert_eq!(keys, ["b", "a"]);
	assert_eq!(document.extensions["VENDOR_custom"]["flag"], 7);
}

#[test]
fn camera_defaults_to_nan_floats() {
	let document = decode(json!({
		"asset": { "version": "2.0" },
		"cameras": [{ "type": "perspective", "perspective": { "yfov": 0.7, "znear": 0.1 } }],
	}));

	let perspective = document.cameras[0].perspective.as_ref().expect("perspective present");
	assert_eq!(perspective.yfov, 0.7);
	assert_eq!(perspective.znear, 0.1);
	assert!(perspective.zfar.is_nan());
	assert!(perspective.aspect_ratio.is_nan());
}
