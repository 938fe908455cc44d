use serde_json::Value;

use crate::gltf::animation::Animation;
use crate::gltf::accessor::Accessor;
use crate::gltf::buffer::{Buffer, BufferView};
use crate::gltf::container::Glb;
use crate::gltf::json::{self, JsonMap};
use crate::gltf::material::{Image, Material, Sampler, Texture};
use crate::gltf::mesh::Mesh;
use crate::gltf::node::{Camera, Node, Scene, Skin};
use crate::gltf::{GltfError, Result};

/// Metadata about the asset.
#[derive(Debug, Clone)]
pub struct Asset {
	/// Copyright message, empty when absent.
	pub copyright: String,
	/// Generating tool, empty when absent.
	pub generator: String,
	/// Targeted glTF version.
	pub version: String,
	/// Minimum glTF version required, empty when absent.
	pub min_version: String,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Asset {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			copyright: json::string_or_empty(obj, "copyright", path)?,
			generator: json::string_or_empty(obj, "generator", path)?,
			version: json::require_string(obj, "version", path)?,
			min_version: json::string_or_empty(obj, "minVersion", path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Fully decoded scene-description graph.
///
/// Collections keep source order; every cross-reference elsewhere in the
/// graph is a position into one of these arrays. The graph is immutable
/// once decoded.
#[derive(Debug, Clone)]
pub struct Document {
	/// Asset metadata record.
	pub asset: Asset,
	/// Extension names used anywhere in the asset.
	pub extensions_used: Vec<String>,
	/// Extension names required to load the asset.
	pub extensions_required: Vec<String>,
	/// Typed views into buffer views.
	pub accessors: Vec<Accessor>,
	/// Keyframe animations.
	pub animations: Vec<Animation>,
	/// Raw byte storage records.
	pub buffers: Vec<Buffer>,
	/// Byte-range windows into buffers.
	pub buffer_views: Vec<BufferView>,
	/// Camera projections.
	pub cameras: Vec<Camera>,
	/// Image references.
	pub images: Vec<Image>,
	/// Material definitions.
	pub materials: Vec<Material>,
	/// Mesh definitions.
	pub meshes: Vec<Mesh>,
	/// Scene hierarchy nodes.
	pub nodes: Vec<Node>,
	/// Texture samplers.
	pub samplers: Vec<Sampler>,
	/// Default scene index, `-1` when unset.
	pub scene: i64,
	/// Scene definitions.
	pub scenes: Vec<Scene>,
	/// Skin definitions.
	pub skins: Vec<Skin>,
	/// Texture definitions.
	pub textures: Vec<Texture>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Document {
	/// Decode the JSON chunk bytes into a typed document.
	pub fn decode(json_bytes: &[u8]) -> Result<Self> {
		let root: Value = serde_json::from_slice(json_bytes)?;
		let obj = json::object(&root, "$")?;

		let asset = match obj.get("asset") {
			None => return Err(GltfError::MissingField { path: "asset".to_owned() }),
			Some(value) => Asset::decode(value, "asset")?,
		};

		Ok(Self {
			asset,
			extensions_used: json::string_list(obj, "extensionsUsed", "$")?,
			extensions_required: json::string_list(obj, "extensionsRequired", "$")?,
			accessors: decode_collection(obj, "accessors", Accessor::decode)?,
			animations: decode_collection(obj, "animations", Animation::decode)?,
			buffers: decode_collection(obj, "buffers", Buffer::decode)?,
			buffer_views: decode_collection(obj, "bufferViews", BufferView::decode)?,
			cameras: decode_collection(obj, "cameras", Camera::decode)?,
			images: decode_collection(obj, "images", Image::decode)?,
			materials: decode_collection(obj, "materials", Material::decode)?,
			meshes: decode_collection(obj, "meshes", Mesh::decode)?,
			nodes: decode_collection(obj, "nodes", Node::decode)?,
			samplers: decode_collection(obj, "samplers", Sampler::decode)?,
			scene: json::int_or(obj, "scene", -1, "$")?,
			scenes: decode_collection(obj, "scenes", Scene::decode)?,
			skins: decode_collection(obj, "skins", Skin::decode)?,
			textures: decode_collection(obj, "textures", Texture::decode)?,
			extensions: json::opaque_map(obj, "extensions", "$")?,
			extras: json::opaque_map(obj, "extras", "$")?,
		})
	}
}

/// Decode an entity array field element-wise, preserving source order.
fn decode_collection<T>(obj: &JsonMap, key: &str, decode: impl Fn(&Value, &str) -> Result<T>) -> Result<Vec<T>> {
	let Some(value) = obj.get(key) else {
		return Ok(Vec::new());
	};
	let items = json::array(value, key)?;

	let mut out = Vec::with_capacity(items.len());
	for (idx, item) in items.iter().enumerate() {
		out.push(decode(item, &format!("{key}[{idx}]"))?);
	}
	Ok(out)
}

/// Parse a whole GLB container into a document plus its binary chunk.
///
/// This is the sole entry point external code needs: container framing,
/// then schema decode of the JSON chunk. The returned slice borrows from
/// `bytes` and backs buffer 0 of the document.
pub fn parse_glb(bytes: &[u8]) -> Result<(Document, &[u8])> {
	let glb = Glb::parse(bytes)?;
	let document = Document::decode(glb.json)?;
	Ok((document, glb.bin))
}

#[cfg(test)]
mod tests;
