//! Syscall number to name lookup

use std::io::Write;

use crate::emit::EmitContext;
use crate::emitter;
use crate::generator::Result;
use crate::syscall::Arch;

/// `syscallname_arch<Arch>()` specializations
///
/// Only syscalls defined on the architecture get a case. Anything else
/// maps to the configured unknown-syscall name.
#[emitter(SyscallnameArch)]
pub fn write_syscallname_arch(ctx: &EmitContext<'_>, out: &mut dyn Write) -> Result<()> {
	writeln!(out, "template <typename Arch> static const char* syscallname_arch(int syscall);")?;
	writeln!(out)?;

	for arch in Arch::ALL {
		let specializer = arch.specializer();
		writeln!(out, "template <> const char* syscallname_arch<{specializer}>(int syscall) {{")?;
		writeln!(out, "  switch (syscall) {{")?;
		for entry in ctx.catalogue.for_arch(arch) {
			let name = entry.name();
			writeln!(out, "    case {specializer}::{name}: return \"{name}\";")?;
		}
		writeln!(out, "    default: return \"{}\";", ctx.config.unknown_syscall_name)?;
		writeln!(out, "  }}")?;
		writeln!(out, "}}")?;
		writeln!(out)?;
	}
	Ok(())
}
