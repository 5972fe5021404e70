//! syscallgen - Syscall table and dispatch code generator
//!
//! This crate renders the architecture-specific syscall tables, lookup
//! functions and recording code a record-and-replay tracer compiles in.
//! Everything is derived from one declarative catalogue of syscalls,
//! each annotated with its per-architecture numbers, its argument
//! descriptors and its replay semantics.
//!
//! # Getting Started
//!
//! ```rust
//! use syscallgen::{ArgDescriptor, Catalogue, ReplaySemantics, SyscallEntry};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalogue = Catalogue::new([
//!         SyscallEntry::regular("read", ReplaySemantics::Exec)
//!             .x86(3)
//!             .x64(0)
//!             .arg2(ArgDescriptor::dynamic("t->regs().syscall_result()")),
//!         SyscallEntry::regular("foo_new", ReplaySemantics::Emu).x64(400),
//!     ])?;
//!
//!     let generator = syscallgen::new().catalogue(catalogue).build()?;
//!     let enums = generator.render("SyscallEnumsX86")?;
//!     assert!(enums.contains("  foo_new = -1,\n"));
//!     assert!(enums.contains("  read = 3,\n"));
//!     assert!(enums.contains("  SYSCALL_COUNT = 2,\n"));
//!     Ok(())
//! }
//! ```

extern crate self as syscallgen;

pub mod emit;
pub mod generator;
pub mod syscall;
pub mod util;

pub use syscallgen_macros::emitter;

pub use emit::{EmitContext, Emitter};
pub use generator::{
	CatalogueError, Generator, GeneratorBuilder, GeneratorConfig, GeneratorError, OutputSink, Result, Selector,
};
pub use syscall::{
	Arch, ArgDescriptor, ArgSlot, Catalogue, ReplaySemantics, SyscallArgs, SyscallEntry, SyscallKind,
};

/// Create a new generator builder
#[must_use]
pub fn new() -> GeneratorBuilder {
	GeneratorBuilder::new()
}

/// Build a generator over the built-in catalogue with default settings
///
/// This is equivalent to `new().build()`
pub fn linux() -> Result<Generator> {
	new().build()
}
