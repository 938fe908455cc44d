use std::fs;
use std::path::PathBuf;

use glbdoc::gltf::{Document, Result, parse_glb};

/// Print per-collection entity summaries of a decoded document.
pub fn run(path: PathBuf) -> Result<()> {
	let raw = fs::read(&path)?;
	let (document, bin) = parse_glb(&raw)?;

	println!("path: {}", path.display());
	println!("bin_chunk_bytes: {}", bin.len());
	print_accessors(&document);
	print_buffer_views(&document);
	print_materials(&document);
	print_nodes(&document);
	print_scenes(&document);

	Ok(())
}

fn print_accessors(document: &Document) {
	println!("accessors:");
	for (idx, accessor) in document.accessors.iter().enumerate() {
		println!(
			"  [{idx}] {} {} count={} buffer_view={} offset={}{}",
			accessor.component_type.as_str(),
			accessor.element_type.as_str(),
			accessor.count,
			accessor.buffer_view,
			accessor.byte_offset,
			if accessor.sparse.is_some() { " sparse" } else { "" },
		);
	}
}

fn print_buffer_views(document: &Document) {
	println!("buffer_views:");
	for (idx, view) in document.buffer_views.iter().enumerate() {
		let target = view.target.map(|t| t.as_str()).unwrap_or("-");
		println!(
			"  [{idx}] buffer={} offset={} length={} stride={} target={}",
			view.buffer, view.byte_offset, view.byte_length, view.byte_stride, target,
		);
	}
}

fn print_materials(document: &Document) {
	println!("materials:");
	for (idx, material) in document.materials.iter().enumerate() {
		let metallic = material
			.pbr_metallic_roughness
			.as_ref()
			.map(|pbr| format!(" metallic={} roughness={}", pbr.metallic_factor, pbr.roughness_factor))
			.unwrap_or_default();
		println!(
			"  [{idx}] {} alpha={}{}{}",
			label(&material.name),
			material.alpha_mode.as_str(),
			metallic,
			if material.double_sided { " double_sided" } else { "" },
		);
	}
}

fn print_nodes(document: &Document) {
	println!("nodes:");
	for (idx, node) in document.nodes.iter().enumerate() {
		println!(
			"  [{idx}] {} mesh={} camera={} skin={} children={}",
			label(&node.name),
			node.mesh,
			node.camera,
			node.skin,
			node.children.len(),
		);
	}
}

fn print_scenes(document: &Document) {
	println!("default_scene: {}", document.scene);
	println!("scenes:");
	for (idx, scene) in document.scenes.iter().enumerate() {
		println!("  [{idx}] {} roots={}", label(&scene.name), scene.nodes.len());
	}
}

fn label(name: &str) -> &str {
	if name.is_empty() { "(unnamed)" } else { name }
}
