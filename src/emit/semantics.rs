//! The "is this syscall always emulated" lookup

use std::io::Write;

use crate::emit::EmitContext;
use crate::emitter;
use crate::generator::Result;
use crate::syscall::{Arch, SyscallEntry};

fn always_emulated(entry: &SyscallEntry) -> bool {
	// Unsupported entries carry no semantics and are never emulated
	entry.semantics().is_some_and(|semantics| semantics.is_always_emulated())
}

/// `is_always_emulated_syscall_arch<Arch>()` specializations
///
/// The switch covers every catalogue entry on every architecture, and
/// an unmatched number is fatal at runtime.
#[emitter(IsAlwaysEmulatedSyscall)]
pub fn write_is_always_emulated_syscall(ctx: &EmitContext<'_>, out: &mut dyn Write) -> Result<()> {
	writeln!(out, "template <typename Arch> static bool is_always_emulated_syscall_arch(int syscall);")?;
	writeln!(out)?;

	for arch in Arch::ALL {
		let specializer = arch.specializer();
		tracing::debug!("Writing {} emulation lookup", arch);

		writeln!(out, "template<> bool is_always_emulated_syscall_arch<{specializer}>(int syscallno) {{")?;
		writeln!(out, "  switch (syscallno) {{")?;
		for entry in ctx.catalogue.entries() {
			writeln!(
				out,
				"    case {specializer}::{}: return {};",
				entry.name(),
				always_emulated(entry)
			)?;
		}
		writeln!(out, "    default:")?;
		writeln!(out, "      FATAL() << \"Unknown syscall \" << syscallno;")?;
		writeln!(out, "      return true;")?;
		writeln!(out, "  }}")?;
		writeln!(out, "}}")?;
		writeln!(out)?;
	}
	Ok(())
}
