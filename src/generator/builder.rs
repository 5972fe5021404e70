//! Builder for creating generators
//!
//! This module contains the `GeneratorBuilder` struct and the
//! configuration it produces.

use crate::emit::{self, Emitter};
use crate::generator::{Generator, Result, Selector};
use crate::syscall::{Arch, Catalogue};

/// Configuration for a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
	/// Name returned by the name lookup for numbers it does not know
	pub unknown_syscall_name: String,
	/// Prefix of the system's syscall number macros, checked against
	pub reference_prefix: String,
	/// The single architecture the number checks are written for
	pub check_arch: Arch,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			unknown_syscall_name: "<unknown-syscall>".to_string(),
			reference_prefix: "SYS_".to_string(),
			check_arch: Arch::X86,
		}
	}
}

/// Builder for creating generators
///
/// ```
/// let generator = syscallgen::new().unknown_syscall_name("???").build()?;
/// assert!(generator.render("SyscallnameArch")?.contains("default: return \"???\";"));
/// # Ok::<(), syscallgen::GeneratorError>(())
/// ```
#[derive(Default)]
pub struct GeneratorBuilder {
	/// The configuration for the generator
	config: GeneratorConfig,
	/// The catalogue to render, the built-in one when unset
	catalogue: Option<Catalogue>,
	/// Emitters registered on top of the built-in ones
	emitters: Vec<Box<dyn Emitter>>,
}

impl std::fmt::Debug for GeneratorBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GeneratorBuilder")
			.field("config", &self.config)
			.field("catalogue", &self.catalogue.as_ref().map(|catalogue| catalogue.len()))
			.field("emitters", &format!("[{} extra emitters]", self.emitters.len()))
			.finish()
	}
}

impl GeneratorBuilder {
	/// Create a new generator builder with default settings
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Render `catalogue` instead of the built-in Linux catalogue
	#[must_use]
	pub fn catalogue(mut self, catalogue: Catalogue) -> Self {
		self.catalogue = Some(catalogue);
		self
	}

	/// Set the name returned for unknown syscall numbers
	#[must_use]
	pub fn unknown_syscall_name(mut self, name: impl Into<String>) -> Self {
		self.config.unknown_syscall_name = name.into();
		self
	}

	/// Set the prefix of the reference syscall number macros
	#[must_use]
	pub fn reference_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.config.reference_prefix = prefix.into();
		self
	}

	/// Set the architecture the number checks are written for
	#[must_use]
	pub const fn check_arch(mut self, arch: Arch) -> Self {
		self.config.check_arch = arch;
		self
	}

	/// Register an additional emitter
	///
	/// Built-in emitters are resolved first, so an extra emitter cannot
	/// shadow a built-in artifact name.
	#[must_use]
	pub fn emitter(mut self, emitter: impl Emitter + 'static) -> Self {
		self.emitters.push(Box::new(emitter));
		self
	}

	/// Set the whole configuration at once
	#[must_use]
	pub fn config(mut self, config: GeneratorConfig) -> Self {
		self.config = config;
		self
	}

	/// Build the generator
	///
	/// Loading the built-in catalogue validates it; malformed data fails
	/// here, before any artifact is written.
	pub fn build(self) -> Result<Generator> {
		let catalogue = match self.catalogue {
			Some(catalogue) => catalogue,
			None => Catalogue::linux()?,
		};
		let mut emitters = emit::all();
		emitters.extend(self.emitters);
		Ok(Generator::new(catalogue, self.config, Selector::with_emitters(emitters)))
	}
}
