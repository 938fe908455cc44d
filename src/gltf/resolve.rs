//! Stateless byte-range resolution for accessors and buffer views.
//!
//! Each call is a pure computation over an immutable document and the
//! caller-owned binary chunk; returned slices borrow from that chunk and
//! are never copied. For the GLB subset handled here, the referenced
//! buffer is always the container's embedded BIN chunk.

use crate::gltf::buffer::BufferView;
use crate::gltf::{Document, GltfError, Result};

/// Resolve the tightly packed byte range described by accessor `index`.
///
/// The range is `count * element_stride` bytes starting at
/// `buffer_view.byte_offset + accessor.byte_offset`, validated against the
/// binary chunk length. Sparse-only accessors (`buffer_view == -1`) have
/// no dense bytes to resolve and fail with `IndexOutOfRange` on the
/// sentinel.
pub fn accessor_bytes<'a>(document: &Document, bin: &'a [u8], index: usize) -> Result<&'a [u8]> {
	let accessor = document.accessors.get(index).ok_or(GltfError::IndexOutOfRange {
		kind: "accessor",
		index: index as i64,
		len: document.accessors.len(),
	})?;
	let view = lookup_buffer_view(document, accessor.buffer_view)?;

	let count = non_negative(accessor.count, "count")?;
	let byte_len = accessor.element_stride().checked_mul(count).ok_or(GltfError::BufferRangeOutOfBounds {
		start: 0,
		len: usize::MAX,
		buffer: bin.len(),
	})?;

	let view_offset = non_negative(view.byte_offset, "byteOffset")?;
	let accessor_offset = non_negative(accessor.byte_offset, "byteOffset")?;
	let start = view_offset.checked_add(accessor_offset).ok_or(GltfError::BufferRangeOutOfBounds {
		start: usize::MAX,
		len: byte_len,
		buffer: bin.len(),
	})?;

	slice_checked(bin, start, byte_len)
}

/// Resolve the whole byte window of buffer view `index`.
pub fn buffer_view_bytes<'a>(document: &Document, bin: &'a [u8], index: usize) -> Result<&'a [u8]> {
	let view = lookup_buffer_view(document, index as i64)?;
	let start = non_negative(view.byte_offset, "byteOffset")?;
	let byte_len = non_negative(view.byte_length, "byteLength")?;
	slice_checked(bin, start, byte_len)
}

fn lookup_buffer_view(document: &Document, index: i64) -> Result<&BufferView> {
	usize::try_from(index)
		.ok()
		.and_then(|idx| document.buffer_views.get(idx))
		.ok_or(GltfError::IndexOutOfRange {
			kind: "bufferView",
			index,
			len: document.buffer_views.len(),
		})
}

fn non_negative(value: i64, field: &'static str) -> Result<usize> {
	usize::try_from(value).map_err(|_| GltfError::NegativeFieldValue { field, value })
}

fn slice_checked(bin: &[u8], start: usize, len: usize) -> Result<&[u8]> {
	let end = start.checked_add(len).ok_or(GltfError::BufferRangeOutOfBounds {
		start,
		len,
		buffer: bin.len(),
	})?;
	bin.get(start..end).ok_or(GltfError::BufferRangeOutOfBounds {
		start,
		len,
		buffer: bin.len(),
	})
}

#[cfg(test)]
mod tests;
