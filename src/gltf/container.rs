use crate::gltf::bytes::Cursor;
use crate::gltf::{GltfError, Result};

/// Chunk tag carrying the scene-description JSON text.
pub const CHUNK_JSON: [u8; 4] = *b"JSON";
/// Chunk tag carrying the binary payload.
pub const CHUNK_BIN: [u8; 4] = *b"BIN\0";

const GLB_MAGIC: [u8; 4] = *b"glTF";
const SUPPORTED_VERSION: u32 = 2;

/// Parsed GLB file header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
	/// Container format version.
	pub version: u32,
	/// Declared length of the whole container in bytes, header included.
	pub total_length: usize,
}

impl GlbHeader {
	/// Fixed header size in bytes: magic, version, total length.
	pub const SIZE: usize = 12;

	/// Parse the 12-byte GLB header from the front of the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let magic = cursor.read_tag4()?;
		if magic != GLB_MAGIC {
			return Err(GltfError::MagicMismatch { magic });
		}

		let version = cursor.read_u32_le()?;
		if version != SUPPORTED_VERSION {
			return Err(GltfError::UnsupportedVersion { version });
		}

		let total_length = cursor.read_u32_le()? as usize;
		Ok(Self { version, total_length })
	}
}

/// Borrowed split of a GLB container into its two chunks.
#[derive(Debug, Clone, Copy)]
pub struct Glb<'a> {
	/// Parsed file header.
	pub header: GlbHeader,
	/// Raw bytes of the JSON chunk.
	pub json: &'a [u8],
	/// Raw bytes of the BIN chunk.
	pub bin: &'a [u8],
}

impl<'a> Glb<'a> {
	/// Split `bytes` into JSON and BIN chunks, validating header and framing.
	///
	/// Walks chunks until the declared total length is consumed. Exactly one
	/// `JSON` and one `BIN\0` chunk must be present; any other tag is fatal.
	pub fn parse(bytes: &'a [u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);
		let header = GlbHeader::parse(&mut cursor)?;

		let mut rem = header.total_length.checked_sub(GlbHeader::SIZE).ok_or(GltfError::ChunkSizeMismatch {
			at: 0,
			need: GlbHeader::SIZE,
			rem: header.total_length,
		})?;

		let mut json = None;
		let mut bin = None;
		while rem > 0 {
			let at = cursor.pos();
			if rem < 8 {
				return Err(GltfError::ChunkSizeMismatch { at, need: 8, rem });
			}

			let chunk_len = cursor.read_u32_le()? as usize;
			let tag = cursor.read_tag4()?;

			let need = chunk_len + 8;
			if need > rem {
				return Err(GltfError::ChunkSizeMismatch { at, need, rem });
			}
			rem -= need;

			let data = cursor.read_exact(chunk_len)?;
			let slot = match tag {
				CHUNK_JSON => &mut json,
				CHUNK_BIN => &mut bin,
				_ => return Err(GltfError::UnknownChunkType { tag, at }),
			};
			if slot.is_some() {
				return Err(GltfError::DuplicateChunk { tag, at });
			}
			*slot = Some(data);
		}

		Ok(Self {
			header,
			json: json.ok_or(GltfError::MissingJsonChunk)?,
			bin: bin.ok_or(GltfError::MissingBinChunk)?,
		})
	}
}
