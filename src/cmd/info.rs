use std::fs;
use std::path::PathBuf;

use glbdoc::gltf::{Document, Glb, Result};

/// Print container header fields and document collection counts.
pub fn run(path: PathBuf, json: bool) -> Result<()> {
	let raw = fs::read(&path)?;
	let glb = Glb::parse(&raw)?;
	let document = Document::decode(glb.json)?;

	let counts = CountsJson {
		accessors: document.accessors.len(),
		animations: document.animations.len(),
		buffers: document.buffers.len(),
		buffer_views: document.buffer_views.len(),
		cameras: document.cameras.len(),
		images: document.images.len(),
		materials: document.materials.len(),
		meshes: document.meshes.len(),
		nodes: document.nodes.len(),
		samplers: document.samplers.len(),
		scenes: document.scenes.len(),
		skins: document.skins.len(),
		textures: document.textures.len(),
	};

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			version: glb.header.version,
			total_length: glb.header.total_length,
			json_chunk_bytes: glb.json.len(),
			bin_chunk_bytes: glb.bin.len(),
			asset_version: document.asset.version.clone(),
			generator: if document.asset.generator.is_empty() {
				None
			} else {
				Some(document.asset.generator.clone())
			},
			counts,
		};
		println!("{}", serde_json::to_string_pretty(&payload)?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("version: {}", glb.header.version);
	println!("total_length: {}", glb.header.total_length);
	println!("json_chunk_bytes: {}", glb.json.len());
	println!("bin_chunk_bytes: {}", glb.bin.len());
	println!("asset_version: {}", document.asset.version);
	if !document.asset.generator.is_empty() {
		println!("generator: {}", document.asset.generator);
	}

	println!("counts:");
	println!("  accessors: {}", counts.accessors);
	println!("  animations: {}", counts.animations);
	println!("  buffers: {}", counts.buffers);
	println!("  buffer_views: {}", counts.buffer_views);
	println!("  cameras: {}", counts.cameras);
	println!("  images: {}", counts.images);
	println!("  materials: {}", counts.materials);
	println!("  meshes: {}", counts.meshes);
	println!("  nodes: {}", counts.nodes);
	println!("  samplers: {}", counts.samplers);
	println!("  scenes: {}", counts.scenes);
	println!("  skins: {}", counts.skins);
	println!("  textures: {}", counts.textures);

	Ok(())
}

#[derive(serde::Serialize)]
struct CountsJson {
	accessors: usize,
	animations: usize,
	buffers: usize,
	buffer_views: usize,
	cameras: usize,
	images: usize,
	materials: usize,
	meshes: usize,
	nodes: usize,
	samplers: usize,
	scenes: usize,
	skins: usize,
	textures: usize,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	version: u32,
	total_length: usize,
	json_chunk_bytes: usize,
	bin_chunk_bytes: usize,
	asset_version: String,
	generator: Option<String>,
	counts: CountsJson,
}
