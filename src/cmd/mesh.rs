use std::fs;
use std::path::PathBuf;

use glbdoc::gltf::{Document, Result, accessor_bytes, parse_glb};

/// Print each primitive's attribute table with resolved byte lengths.
///
/// Unknown attribute semantics are listed as-is; interpreting them is the
/// consumer's job, not this tool's.
pub fn run(path: PathBuf) -> Result<()> {
	let raw = fs::read(&path)?;
	let (document, bin) = parse_glb(&raw)?;

	println!("path: {}", path.display());
	for (mesh_idx, mesh) in document.meshes.iter().enumerate() {
		let name = if mesh.name.is_empty() { "(unnamed)" } else { &mesh.name };
		println!("mesh[{mesh_idx}]: {name}");
		for (prim_idx, primitive) in mesh.primitives.iter().enumerate() {
			println!("  primitive[{prim_idx}]: mode={} material={}", primitive.mode.as_str(), primitive.material);
			for (semantic, accessor_index) in &primitive.attributes {
				println!("    {semantic}: accessor={} bytes={}", accessor_index, resolved_len(&document, bin, *accessor_index));
			}
			if primitive.indices >= 0 {
				println!(
					"    indices: accessor={} bytes={}",
					primitive.indices,
					resolved_len(&document, bin, primitive.indices),
				);
			}
			if !primitive.targets.is_empty() {
				println!("    morph_targets: {}", primitive.targets.len());
			}
		}
	}

	Ok(())
}

fn resolved_len(document: &Document, bin: &[u8], index: i64) -> String {
	let Ok(idx) = usize::try_from(index) else {
		return "unresolved".to_owned();
	};
	match accessor_bytes(document, bin, idx) {
		Ok(bytes) => bytes.len().to_string(),
		Err(_) => "unresolved".to_owned(),
	}
}
