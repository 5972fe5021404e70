//! Artifact emitters
//!
//! Each emitter walks the catalogue and writes one textual artifact for
//! the tracer's build. Emitters are independent of each other; the
//! selector picks one by artifact name.

mod check;
mod defs_table;
mod enums;
mod helpers;
mod names;
mod record;
mod semantics;

use std::io::Write;

use crate::generator::{GeneratorConfig, Result};
use crate::syscall::Catalogue;

pub use check::CheckSyscallNumbers;
pub use defs_table::SyscallDefsTable;
pub use enums::{SyscallEnumsX64, SyscallEnumsX86, write_syscall_enum};
pub use helpers::SyscallHelperFunctions;
pub use names::SyscallnameArch;
pub use record::SyscallRecordCase;
pub use semantics::IsAlwaysEmulatedSyscall;

/// Everything an emitter reads
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
	/// The catalogue being rendered
	pub catalogue: &'a Catalogue,
	/// Generator settings
	pub config: &'a GeneratorConfig,
}

impl<'a> EmitContext<'a> {
	#[must_use]
	pub const fn new(catalogue: &'a Catalogue, config: &'a GeneratorConfig) -> Self {
		Self { catalogue, config }
	}
}

/// Trait for artifact emitters
///
/// Implementations are usually generated with the `#[emitter]` attribute
/// from a plain function.
pub trait Emitter: Send + Sync {
	/// The artifact name this emitter answers to
	fn artifact(&self) -> &'static str;

	/// Write the artifact to `out`
	fn emit(&self, ctx: &EmitContext<'_>, out: &mut dyn Write) -> Result<()>;
}

/// Every emitter, in a fixed order
#[must_use]
pub fn all() -> Vec<Box<dyn Emitter>> {
	vec![
		Box::new(CheckSyscallNumbers),
		Box::new(IsAlwaysEmulatedSyscall),
		Box::new(SyscallDefsTable),
		Box::new(SyscallEnumsX86),
		Box::new(SyscallEnumsX64),
		Box::new(SyscallnameArch),
		Box::new(SyscallRecordCase),
		Box::new(SyscallHelperFunctions),
	]
}
