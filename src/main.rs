#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "glbdoc", about = "glTF binary container (GLB) inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
	Doc {
		path: PathBuf,
	},
	Accessor {
		path: PathBuf,
		index: usize,
	},
	Mesh {
		path: PathBuf,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> glbdoc::gltf::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info { path, json } => cmd::info::run(path, json),
		Commands::Doc { path } => cmd::doc::run(path),
		Commands::Accessor { path, index } => cmd::accessor::run(path, index),
		Commands::Mesh { path } => cmd::mesh::run(path),
	}
}
