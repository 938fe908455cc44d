use std::fs;
use std::path::PathBuf;

use glbdoc::gltf::{Result, accessor_bytes, parse_glb};

const PREVIEW_BYTES: usize = 32;

/// Resolve one accessor's byte range and print it with a short preview.
pub fn run(path: PathBuf, index: usize) -> Result<()> {
	let raw = fs::read(&path)?;
	let (document, bin) = parse_glb(&raw)?;
	let bytes = accessor_bytes(&document, bin, index)?;
	let accessor = &document.accessors[index];

	println!("path: {}", path.display());
	println!("index: {index}");
	if !accessor.name.is_empty() {
		println!("name: {}", accessor.name);
	}
	println!("component_type: {}", accessor.component_type.as_str());
	println!("type: {}", accessor.element_type.as_str());
	println!("count: {}", accessor.count);
	println!("element_stride: {}", accessor.element_stride());
	println!("byte_length: {}", bytes.len());
	println!("preview: {}", hex_preview(bytes, PREVIEW_BYTES));

	Ok(())
}

fn hex_preview(bytes: &[u8], max_len: usize) -> String {
	let mut out = String::new();
	for byte in bytes.iter().take(max_len) {
		out.push_str(&format!("{byte:02x} "));
	}
	if bytes.len() > max_len {
		out.push_str(&format!("... {} more", bytes.len() - max_len));
	}
	out.trim_end().to_owned()
}
