//! syscallgen renders one generated source artifact for the tracer build.
//!
//! # Usage
//!
//! ```bash
//! syscallgen gen/SyscallEnumsX86.generated
//! syscallgen --artifact SyscallDefsTable
//! syscallgen --list
//! ```
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
	author,
	name = "syscallgen",
	version,
	about = "Generate syscall tables and dispatch code for a record-and-replay tracer."
)]
struct Cli {
	#[arg(help = "File to write; its stem names the artifact unless --artifact is given")]
	output: Option<PathBuf>,

	#[arg(short = 'a', long = "artifact", help = "Name of the artifact to generate")]
	artifact: Option<String>,

	#[arg(short = 'l', long = "list", help = "List the known artifact names and exit")]
	list: bool,
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	syscallgen::util::init_logging();

	let generator = syscallgen::linux().context("failed to load the syscall catalogue")?;

	if cli.list {
		let mut stdout = std::io::stdout().lock();
		for artifact in generator.selector().artifacts() {
			writeln!(stdout, "{artifact}")?;
		}
		return Ok(());
	}

	match (cli.artifact.as_deref(), cli.output.as_deref()) {
		(Some(artifact), Some(path)) => {
			generator.generate(artifact, path)?;
		},
		(None, Some(path)) => {
			generator.generate_path(path)?;
		},
		(Some(artifact), None) => {
			let mut stdout = std::io::stdout().lock();
			generator.generate_to(artifact, &mut stdout)?;
			stdout.flush()?;
		},
		(None, None) => bail!(
			"no artifact requested; pass an output path or --artifact (one of: {})",
			generator.selector().artifacts().collect::<Vec<_>>().join(", ")
		),
	}

	Ok(())
}
