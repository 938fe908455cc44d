//! Public library API for decoding glTF 2.0 binary containers (GLB).

/// Container framing, schema decoding, and accessor byte-range resolution.
pub mod gltf;
