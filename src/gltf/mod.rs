mod accessor;
mod animation;
mod buffer;
mod bytes;
mod container;
mod document;
mod error;
mod json;
mod material;
mod mesh;
mod node;
mod resolve;

/// Accessor entity, sparse descriptors, and component/shape enums.
pub use accessor::{Accessor, ComponentType, ElementType, SparseAccessor, SparseIndexType, SparseIndices, SparseValues};
/// Animation entities and their enums.
pub use animation::{Animation, AnimationChannel, AnimationSampler, ChannelTarget, Interpolation, TargetPath};
/// Buffer storage and view entities.
pub use buffer::{Buffer, BufferView, BufferViewTarget};
/// GLB container framing types and chunk tags.
pub use container::{CHUNK_BIN, CHUNK_JSON, Glb, GlbHeader};
/// Document root, asset metadata, and the container entry point.
pub use document::{Asset, Document, parse_glb};
/// Error and result aliases.
pub use error::{GltfError, Result};
/// Ordered opaque JSON map used for extension/extras passthrough.
pub use json::JsonMap;
/// Material, texture, image, and sampler entities with their enums.
pub use material::{
	AlphaMode, Image, ImageMimeType, MagFilter, Material, MinFilter, NormalTextureInfo, OcclusionTextureInfo,
	PbrMetallicRoughness, Sampler, Texture, TextureInfo, WrapMode,
};
/// Mesh entities and primitive topology enum.
pub use mesh::{Mesh, MeshPrimitive, PrimitiveMode};
/// Scene hierarchy, skinning, and camera entities.
pub use node::{Camera, CameraKind, CameraOrthographic, CameraPerspective, Node, Scene, Skin};
/// Byte-range resolution entry points.
pub use resolve::{accessor_bytes, buffer_view_bytes};
