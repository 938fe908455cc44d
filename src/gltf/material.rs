use serde_json::Value;

use crate::gltf::json::{self, JsonMap};
use crate::gltf::Result;

/// Alpha rendering mode of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
	/// Alpha is ignored.
	Opaque,
	/// Alpha tested against `alpha_cutoff`.
	Mask,
	/// Alpha blended over the background.
	Blend,
}

impl AlphaMode {
	/// Validate a raw mode string against the closed set.
	pub fn from_raw(raw: &str) -> Option<Self> {
		match raw {
			"OPAQUE" => Some(Self::Opaque),
			"MASK" => Some(Self::Mask),
			"BLEND" => Some(Self::Blend),
			_ => None,
		}
	}

	/// Render as the schema's raw label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Opaque => "OPAQUE",
			Self::Mask => "MASK",
			Self::Blend => "BLEND",
		}
	}
}

/// Reference from a material to one texture.
#[derive(Debug, Clone)]
pub struct TextureInfo {
	/// Texture index, `-1` when unset.
	pub index: i64,
	/// TEXCOORD attribute set index.
	pub tex_coord: i64,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl TextureInfo {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			index: json::int_or(obj, "index", -1, path)?,
			tex_coord: json::int_or(obj, "texCoord", 0, path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}

	fn decode_opt(obj: &JsonMap, key: &str, path: &str) -> Result<Option<Self>> {
		match obj.get(key) {
			None => Ok(None),
			Some(value) => Ok(Some(Self::decode(value, &json::join(path, key))?)),
		}
	}
}

/// Normal map reference with its scale factor.
#[derive(Debug, Clone)]
pub struct NormalTextureInfo {
	/// Texture index, `-1` when unset.
	pub index: i64,
	/// TEXCOORD attribute set index.
	pub tex_coord: i64,
	/// Multiplier applied to each sampled normal.
	pub scale: f32,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl NormalTextureInfo {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			index: json::int_or(obj, "index", -1, path)?,
			tex_coord: json::int_or(obj, "texCoord", 0, path)?,
			scale: json::float_or(obj, "scale", 1.0, path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Occlusion map reference with its strength factor.
#[derive(Debug, Clone)]
pub struct OcclusionTextureInfo {
	/// Texture index, `-1` when unset.
	pub index: i64,
	/// TEXCOORD attribute set index.
	pub tex_coord: i64,
	/// Multiplier controlling the amount of occlusion applied.
	pub strength: f32,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl OcclusionTextureInfo {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			index: json::int_or(obj, "index", -1, path)?,
			tex_coord: json::int_or(obj, "texCoord", 0, path)?,
			strength: json::float_or(obj, "strength", 1.0, path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Metallic-roughness PBR parameter set.
#[derive(Debug, Clone)]
pub struct PbrMetallicRoughness {
	/// Linear base color multiplier, empty when absent.
	pub base_color_factor: Vec<f32>,
	/// Base color texture reference.
	pub base_color_texture: Option<TextureInfo>,
	/// Metalness factor, `1.0` when absent.
	pub metallic_factor: f32,
	/// Roughness factor, `1.0` when absent.
	pub roughness_factor: f32,
	/// Combined metallic-roughness texture reference.
	pub metallic_roughness_texture: Option<TextureInfo>,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl PbrMetallicRoughness {
	fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			base_color_factor: json::float_list(obj, "baseColorFactor", path)?,
			base_color_texture: TextureInfo::decode_opt(obj, "baseColorTexture", path)?,
			metallic_factor: json::float_or(obj, "metallicFactor", 1.0, path)?,
			roughness_factor: json::float_or(obj, "roughnessFactor", 1.0, path)?,
			metallic_roughness_texture: TextureInfo::decode_opt(obj, "metallicRoughnessTexture", path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Material appearance of a primitive.
#[derive(Debug, Clone)]
pub struct Material {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Metallic-roughness parameter set.
	pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,
	/// Normal map reference.
	pub normal_texture: Option<NormalTextureInfo>,
	/// Occlusion map reference.
	pub occlusion_texture: Option<OcclusionTextureInfo>,
	/// Emissive map reference.
	pub emissive_texture: Option<TextureInfo>,
	/// Linear emissive color multiplier, empty when absent.
	pub emissive_factor: Vec<f32>,
	/// Alpha rendering mode, `OPAQUE` when absent.
	pub alpha_mode: AlphaMode,
	/// Alpha cutoff for `MASK` mode, `0.5` when absent.
	pub alpha_cutoff: f32,
	/// Whether back faces are rendered.
	pub double_sided: bool,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Material {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let alpha_mode = match json::opt_str(obj, "alphaMode", path)? {
			None => AlphaMode::Opaque,
			Some(raw) => AlphaMode::from_raw(raw).ok_or_else(|| json::bad_enum(path, "alphaMode", raw))?,
		};

		let pbr_metallic_roughness = match obj.get("pbrMetallicRoughness") {
			None => None,
			Some(value) => Some(PbrMetallicRoughness::decode(value, &json::join(path, "pbrMetallicRoughness"))?),
		};
		let normal_texture = match obj.get("normalTexture") {
			None => None,
			Some(value) => Some(NormalTextureInfo::decode(value, &json::join(path, "normalTexture"))?),
		};
		let occlusion_texture = match obj.get("occlusionTexture") {
			None => None,
			Some(value) => Some(OcclusionTextureInfo::decode(value, &json::join(path, "occlusionTexture"))?),
		};

		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			pbr_metallic_roughness,
			normal_texture,
			occlusion_texture,
			emissive_texture: TextureInfo::decode_opt(obj, "emissiveTexture", path)?,
			emissive_factor: json::float_list(obj, "emissiveFactor", path)?,
			alpha_mode,
			alpha_cutoff: json::float_or(obj, "alphaCutoff", 0.5, path)?,
			double_sided: json::bool_or(obj, "doubleSided", false, path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Texture pairing an image with sampling state.
#[derive(Debug, Clone)]
pub struct Texture {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Sampler index, `-1` for repeat wrapping with auto filtering.
	pub sampler: i64,
	/// Image index, `-1` when unset.
	pub source: i64,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Texture {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;
		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			sampler: json::int_or(obj, "sampler", -1, path)?,
			source: json::int_or(obj, "source", -1, path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// MIME type of an embedded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMimeType {
	/// `image/jpeg`.
	Jpeg,
	/// `image/png`.
	Png,
}

impl ImageMimeType {
	/// Validate a raw MIME string against the closed set.
	pub fn from_raw(raw: &str) -> Option<Self> {
		match raw {
			"image/jpeg" => Some(Self::Jpeg),
			"image/png" => Some(Self::Png),
			_ => None,
		}
	}

	/// Render as the schema's raw label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Jpeg => "image/jpeg",
			Self::Png => "image/png",
		}
	}
}

/// Image data referenced by URI or embedded via a buffer view.
#[derive(Debug, Clone)]
pub struct Image {
	/// User-defined name, empty when absent.
	pub name: String,
	/// External location, empty for embedded images.
	pub uri: String,
	/// MIME type, required when `buffer_view` is set.
	pub mime_type: Option<ImageMimeType>,
	/// Buffer view index holding the encoded bytes, `-1` when external.
	pub buffer_view: i64,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Image {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let mime_type = match json::opt_str(obj, "mimeType", path)? {
			None => None,
			Some(raw) => Some(ImageMimeType::from_raw(raw).ok_or_else(|| json::bad_enum(path, "mimeType", raw))?),
		};

		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			uri: json::string_or_empty(obj, "uri", path)?,
			mime_type,
			buffer_view: json::int_or(obj, "bufferView", -1, path)?,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}

/// Magnification filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagFilter {
	/// Nearest-texel sampling (9728).
	Nearest,
	/// Bilinear sampling (9729).
	Linear,
}

impl MagFilter {
	/// Validate a raw GL constant against the closed set.
	pub fn from_raw(raw: i64) -> Option<Self> {
		match raw {
			9728 => Some(Self::Nearest),
			9729 => Some(Self::Linear),
			_ => None,
		}
	}
}

/// Minification filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinFilter {
	/// Nearest-texel sampling (9728).
	Nearest,
	/// Bilinear sampling (9729).
	Linear,
	/// Nearest texel, nearest mip (9984).
	NearestMipmapNearest,
	/// Bilinear texel, nearest mip (9985).
	LinearMipmapNearest,
	/// Nearest texel, blended mips (9986).
	NearestMipmapLinear,
	/// Trilinear sampling (9987).
	LinearMipmapLinear,
}

impl MinFilter {
	/// Validate a raw GL constant against the closed set.
	pub fn from_raw(raw: i64) -> Option<Self> {
		match raw {
			9728 => Some(Self::Nearest),
			9729 => Some(Self::Linear),
			9984 => Some(Self::NearestMipmapNearest),
			9985 => Some(Self::LinearMipmapNearest),
			9986 => Some(Self::NearestMipmapLinear),
			9987 => Some(Self::LinearMipmapLinear),
			_ => None,
		}
	}
}

/// Texture coordinate wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
	/// Clamp to edge texels (33071).
	ClampToEdge,
	/// Mirror on each repeat (33648).
	MirroredRepeat,
	/// Tile the texture (10497).
	Repeat,
}

impl WrapMode {
	/// Validate a raw GL constant against the closed set.
	pub fn from_raw(raw: i64) -> Option<Self> {
		match raw {
			33071 => Some(Self::ClampToEdge),
			33648 => Some(Self::MirroredRepeat),
			10497 => Some(Self::Repeat),
			_ => None,
		}
	}

	/// Render as a stable label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ClampToEdge => "CLAMP_TO_EDGE",
			Self::MirroredRepeat => "MIRRORED_REPEAT",
			Self::Repeat => "REPEAT",
		}
	}
}

/// Filtering and wrapping state for texture sampling.
#[derive(Debug, Clone)]
pub struct Sampler {
	/// User-defined name, empty when absent.
	pub name: String,
	/// Magnification filter, unset for auto filtering.
	pub mag_filter: Option<MagFilter>,
	/// Minification filter, unset for auto filtering.
	pub min_filter: Option<MinFilter>,
	/// S-axis wrapping mode, `REPEAT` when absent.
	pub wrap_s: WrapMode,
	/// T-axis wrapping mode, `REPEAT` when absent.
	pub wrap_t: WrapMode,
	/// Opaque extension objects, captured verbatim.
	pub extensions: JsonMap,
	/// Opaque application-specific data, captured verbatim.
	pub extras: JsonMap,
}

impl Sampler {
	pub(crate) fn decode(value: &Value, path: &str) -> Result<Self> {
		let obj = json::object(value, path)?;

		let mag_filter = match json::opt_i64(obj, "magFilter", path)? {
			None => None,
			Some(raw) => Some(MagFilter::from_raw(raw).ok_or_else(|| json::bad_enum(path, "magFilter", raw))?),
		};
		let min_filter = match json::opt_i64(obj, "minFilter", path)? {
			None => None,
			Some(raw) => Some(MinFilter::from_raw(raw).ok_or_else(|| json::bad_enum(path, "minFilter", raw))?),
		};
		let wrap_s = match json::opt_i64(obj, "wrapS", path)? {
			None => WrapMode::Repeat,
			Some(raw) => WrapMode::from_raw(raw).ok_or_else(|| json::bad_enum(path, "wrapS", raw))?,
		};
		let wrap_t = match json::opt_i64(obj, "wrapT", path)? {
			None => WrapMode::Repeat,
			Some(raw) => WrapMode::from_raw(raw).ok_or_else(|| json::bad_enum(path, "wrapT", raw))?,
		};

		Ok(Self {
			name: json::string_or_empty(obj, "name", path)?,
			mag_filter,
			min_filter,
			wrap_s,
			wrap_t,
			extensions: json::opaque_map(obj, "extensions", path)?,
			extras: json::opaque_map(obj, "extras", path)?,
		})
	}
}
