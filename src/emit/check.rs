//! Compile-time checks against the system's syscall numbers

use std::io::Write;

use crate::emit::EmitContext;
use crate::emitter;
use crate::generator::Result;

/// One `static_assert` per syscall numbered on the checked architecture
///
/// Only `config.check_arch` is checked; the reference values come from the
/// `SYS_*` macros of the build host, which describe a single ABI.
#[emitter(CheckSyscallNumbers)]
pub fn write_check_syscall_numbers(ctx: &EmitContext<'_>, out: &mut dyn Write) -> Result<()> {
	let arch = ctx.config.check_arch;
	let specializer = arch.specializer();
	let prefix = &ctx.config.reference_prefix;

	for entry in ctx.catalogue.entries() {
		if entry.number(arch).is_none() {
			continue;
		}
		let name = entry.name();
		writeln!(
			out,
			"static_assert({specializer}::{name} == {prefix}{name}, \"Incorrect syscall number for {name}\");"
		)?;
	}
	Ok(())
}
