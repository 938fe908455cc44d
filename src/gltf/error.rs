use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, GltfError>;

/// Errors produced while reading, decoding, and resolving GLB data.
#[derive(Debug, Error)]
pub enum GltfError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Leading container magic was not `glTF`.
	#[error("magic mismatch (expected \"glTF\", got {magic:?})")]
	MagicMismatch {
		/// First four bytes of the stream.
		magic: [u8; 4],
	},
	/// Container version field was not 2.
	#[error("unsupported container version {version} (expected 2)")]
	UnsupportedVersion {
		/// Parsed version field.
		version: u32,
	},
	/// Chunk tag was neither `JSON` nor `BIN\0`.
	#[error("unknown chunk type {tag:?} at offset {at}")]
	UnknownChunkType {
		/// The offending four-byte tag.
		tag: [u8; 4],
		/// Byte offset of the chunk header.
		at: usize,
	},
	/// Chunk accounting disagreed with the declared total length.
	#[error("chunk size mismatch at offset {at}: chunk needs {need} bytes, {rem} declared remaining")]
	ChunkSizeMismatch {
		/// Byte offset of the chunk header.
		at: usize,
		/// Bytes the chunk header plus payload require.
		need: usize,
		/// Bytes left inside the declared total length.
		rem: usize,
	},
	/// A second chunk with an already-seen tag.
	#[error("duplicate {tag:?} chunk at offset {at}")]
	DuplicateChunk {
		/// Repeated chunk tag.
		tag: [u8; 4],
		/// Byte offset of the duplicate chunk header.
		at: usize,
	},
	/// No `JSON` chunk was present at end of stream.
	#[error("missing JSON chunk")]
	MissingJsonChunk,
	/// No `BIN\0` chunk was present at end of stream.
	#[error("missing BIN chunk")]
	MissingBinChunk,
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// JSON chunk failed to parse at all.
	#[error("malformed json: {0}")]
	MalformedJson(#[from] serde_json::Error),
	/// Enumerated field held a raw value outside its closed set.
	#[error("invalid enum value at {path}: {value}")]
	InvalidEnumValue {
		/// Dotted path of the offending field.
		path: String,
		/// Rendered raw value.
		value: String,
	},
	/// A required field was absent.
	#[error("missing required field {path}")]
	MissingField {
		/// Dotted path of the absent field.
		path: String,
	},
	/// A field held the wrong JSON value kind.
	#[error("unexpected type at {path}: expected {expected}")]
	UnexpectedType {
		/// Dotted path of the offending field.
		path: String,
		/// Expected JSON value kind.
		expected: &'static str,
	},
	/// A cross-reference index fell outside the referenced collection.
	#[error("{kind} index out of range: idx={index}, len={len}")]
	IndexOutOfRange {
		/// Collection the index refers into.
		kind: &'static str,
		/// Offending index value.
		index: i64,
		/// Length of the referenced collection.
		len: usize,
	},
	/// A signed schema field was negative where a size is required.
	#[error("negative {field}: {value}")]
	NegativeFieldValue {
		/// Schema field name.
		field: &'static str,
		/// Parsed signed value.
		value: i64,
	},
	/// Resolved byte range fell outside the binary chunk.
	#[error("buffer range out of bounds: start={start}, len={len}, buffer={buffer}")]
	BufferRangeOutOfBounds {
		/// Absolute start offset into the buffer.
		start: usize,
		/// Requested range length.
		len: usize,
		/// Buffer length in bytes.
		buffer: usize,
	},
}
