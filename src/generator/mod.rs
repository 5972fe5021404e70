//! Generator functionality
//!
//! This module ties the catalogue, the emitters and the output handling
//! together. A `Generator` is built once, holds its catalogue immutably
//! and renders one artifact per call.

mod builder;
mod error;
mod selector;
mod sink;

pub use builder::{GeneratorBuilder, GeneratorConfig};
pub use error::{CatalogueError, GeneratorError, Result};
pub use selector::Selector;
pub use sink::OutputSink;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::emit::EmitContext;
use crate::syscall::Catalogue;

/// A configured source generator
///
/// Created with `GeneratorBuilder`. Rendering is deterministic: the same
/// catalogue and artifact name always produce the same bytes.
#[derive(Debug)]
pub struct Generator {
	/// The catalogue every artifact is rendered from
	catalogue: Catalogue,
	/// Settings passed to the emitters
	config: GeneratorConfig,
	/// Artifact name resolution
	selector: Selector,
}

impl Generator {
	pub(crate) const fn new(catalogue: Catalogue, config: GeneratorConfig, selector: Selector) -> Self {
		Self {
			catalogue,
			config,
			selector,
		}
	}

	#[must_use]
	pub const fn catalogue(&self) -> &Catalogue {
		&self.catalogue
	}

	#[must_use]
	pub const fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	#[must_use]
	pub const fn selector(&self) -> &Selector {
		&self.selector
	}

	fn context(&self) -> EmitContext<'_> {
		EmitContext::new(&self.catalogue, &self.config)
	}

	/// Write `artifact` to an arbitrary writer
	pub fn generate_to(&self, artifact: &str, out: &mut dyn Write) -> Result<()> {
		let emitter = self.selector.resolve(artifact)?;
		tracing::debug!("Rendering {}", artifact);
		emitter.emit(&self.context(), out)
	}

	/// Render `artifact` into a string
	pub fn render(&self, artifact: &str) -> Result<String> {
		let mut buf = Vec::new();
		self.generate_to(artifact, &mut buf)?;
		String::from_utf8(buf).map_err(|e| GeneratorError::Other(format!("Artifact {artifact} is not UTF-8: {e}")))
	}

	/// Write `artifact` to `path`
	///
	/// The artifact name is resolved before anything is created on disk,
	/// and the file only appears at `path` once it is complete.
	pub fn generate(&self, artifact: &str, path: impl AsRef<Path>) -> Result<PathBuf> {
		let emitter = self.selector.resolve(artifact)?;
		let mut sink = OutputSink::create(path)?;

		match emitter.emit(&self.context(), &mut sink) {
			Ok(()) => {
				let published = sink.commit()?;
				tracing::info!("Generated {} at {}", artifact, published.display());
				Ok(published)
			},
			Err(e) => {
				tracing::error!("Failed to generate {} for {}: {}", artifact, sink.target().display(), e);
				Err(e)
			},
		}
	}

	/// Write the artifact named by `path`'s file stem to `path`
	pub fn generate_path(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
		let path = path.as_ref();
		let artifact = Selector::artifact_for_path(path)?;
		self.generate(artifact, path)
	}
}
