//! Artifact selection
//!
//! Maps artifact names to the emitters producing them.

use std::fmt;
use std::path::Path;

use crate::emit::{self, Emitter};
use crate::generator::{GeneratorError, Result};

/// Resolves artifact names to emitters
pub struct Selector {
	emitters: Vec<Box<dyn Emitter>>,
}

impl Default for Selector {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Selector")
			.field("artifacts", &self.artifacts().collect::<Vec<_>>())
			.finish()
	}
}

impl Selector {
	/// A selector over every built-in emitter
	#[must_use]
	pub fn new() -> Self {
		Self::with_emitters(emit::all())
	}

	/// A selector over a custom set of emitters
	#[must_use]
	pub fn with_emitters(emitters: Vec<Box<dyn Emitter>>) -> Self {
		Self { emitters }
	}

	/// Find the emitter for `artifact`
	pub fn resolve(&self, artifact: &str) -> Result<&dyn Emitter> {
		self.emitters
			.iter()
			.find(|emitter| emitter.artifact() == artifact)
			.map(AsRef::as_ref)
			.ok_or_else(|| GeneratorError::UnknownArtifact(artifact.to_string()))
	}

	/// Names of every known artifact
	pub fn artifacts(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.emitters.iter().map(|emitter| emitter.artifact())
	}

	/// The artifact named by an output path's file stem
	///
	/// `gen/SyscallEnumsX86.generated` names `SyscallEnumsX86`.
	pub fn artifact_for_path(path: &Path) -> Result<&str> {
		path.file_stem()
			.and_then(|stem| stem.to_str())
			.filter(|stem| !stem.is_empty())
			.ok_or_else(|| GeneratorError::InvalidOutputPath(path.to_path_buf()))
	}
}
