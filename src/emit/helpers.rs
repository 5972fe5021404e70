//! Inline helpers for every syscall
//!
//! `has_<name>_syscall`, `is_<name>_syscall` and `syscall_number_for_<name>`
//! switch over the runtime architecture and assert on anything else.

use std::io::Write;

use crate::emit::EmitContext;
use crate::emitter;
use crate::generator::Result;
use crate::syscall::Arch;

const UNSUPPORTED_ARCH: &str = "      assert(0 && \"unsupported architecture\");";

fn write_has_syscall(out: &mut dyn Write, name: &str) -> Result<()> {
	writeln!(out, "inline bool\nhas_{name}_syscall(SupportedArch arch) {{")?;
	writeln!(out, "  switch (arch) {{")?;
	for arch in Arch::ALL {
		writeln!(out, "    case {}:", arch.case_label())?;
		writeln!(out, "      return {}::{name} >= 0;", arch.specializer())?;
	}
	writeln!(out, "    default:\n{UNSUPPORTED_ARCH}\n  }}\n}}")?;
	Ok(())
}

fn write_is_syscall(out: &mut dyn Write, name: &str) -> Result<()> {
	writeln!(out, "inline bool\nis_{name}_syscall(int syscallno, SupportedArch arch) {{")?;
	writeln!(out, "  switch (arch) {{")?;
	for arch in Arch::ALL {
		writeln!(out, "    case {}:", arch.case_label())?;
		writeln!(
			out,
			"      return syscallno >= 0 && syscallno == {}::{name};",
			arch.specializer()
		)?;
	}
	writeln!(out, "    default:\n{UNSUPPORTED_ARCH}\n  }}\n}}")?;
	Ok(())
}

fn write_syscall_number(out: &mut dyn Write, name: &str) -> Result<()> {
	writeln!(out, "inline int\nsyscall_number_for_{name}(SupportedArch arch) {{")?;
	writeln!(out, "  switch (arch) {{")?;
	for arch in Arch::ALL {
		let specializer = arch.specializer();
		writeln!(out, "    case {}:", arch.case_label())?;
		writeln!(out, "      assert({specializer}::{name} >= 0);")?;
		writeln!(out, "      return {specializer}::{name};")?;
	}
	writeln!(out, "    default:\n{UNSUPPORTED_ARCH}\n  }}\n}}")?;
	Ok(())
}

#[emitter(SyscallHelperFunctions)]
pub fn write_syscall_helper_functions(ctx: &EmitContext<'_>, out: &mut dyn Write) -> Result<()> {
	for entry in ctx.catalogue.entries() {
		write_has_syscall(out, entry.name())?;
		write_is_syscall(out, entry.name())?;
		write_syscall_number(out, entry.name())?;
	}
	Ok(())
}
