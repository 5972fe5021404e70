//! Per-architecture syscall enumerations

use std::io::Write;

use crate::emit::EmitContext;
use crate::emitter;
use crate::generator::Result;
use crate::syscall::{Arch, Catalogue};

/// Write the `Syscalls` enumeration for one architecture
///
/// Every catalogue entry gets a value: its real number, or a negative
/// placeholder when it does not exist on `arch`. Values are written in
/// ascending order and followed by a `SYSCALL_COUNT` sentinel holding the
/// number of entries.
pub fn write_syscall_enum(catalogue: &Catalogue, arch: Arch, out: &mut dyn Write) -> Result<()> {
	let numbering = catalogue.numbering(arch);
	tracing::debug!("Writing {} syscall enumeration with {} entries", arch, numbering.len());

	writeln!(out, "enum Syscalls {{")?;
	for (entry, number) in &numbering {
		writeln!(out, "  {} = {},", entry.name(), number)?;
	}
	writeln!(out, "  SYSCALL_COUNT = {},", numbering.len())?;
	writeln!(out, "}};")?;
	writeln!(out)?;
	Ok(())
}

/// The x86 syscall enumeration
#[emitter(SyscallEnumsX86)]
pub fn write_syscall_enums_x86(ctx: &EmitContext<'_>, out: &mut dyn Write) -> Result<()> {
	write_syscall_enum(ctx.catalogue, Arch::X86, out)
}

/// The x86-64 syscall enumeration
#[emitter(SyscallEnumsX64)]
pub fn write_syscall_enums_x64(ctx: &EmitContext<'_>, out: &mut dyn Write) -> Result<()> {
	write_syscall_enum(ctx.catalogue, Arch::X64, out)
}
