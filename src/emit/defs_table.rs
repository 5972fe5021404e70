//! The per-architecture syscall definition table

use std::io::Write;

use crate::emit::EmitContext;
use crate::emitter;
use crate::generator::Result;
use crate::syscall::{Arch, SyscallKind};

/// `syscall_defs<Arch>::table` definitions
///
/// Rows follow the enumeration's ascending order. Regular syscalls map to
/// their semantics and recorded argument count, irregular and restart
/// syscalls to `rep_IRREGULAR, -1`. Unsupported syscalls get no row.
#[emitter(SyscallDefsTable)]
pub fn write_syscall_defs_table(ctx: &EmitContext<'_>, out: &mut dyn Write) -> Result<()> {
	for arch in Arch::ALL {
		let specializer = arch.specializer();
		writeln!(
			out,
			"template<> syscall_defs<{specializer}>::Table syscall_defs<{specializer}>::table = {{"
		)?;

		let rows = ctx
			.catalogue
			.numbering(arch)
			.into_iter()
			.filter(|(entry, _)| entry.is_defined_on(arch));
		for (entry, _) in rows {
			let name = entry.name();
			match entry.kind() {
				SyscallKind::Regular { semantics, args } => {
					writeln!(
						out,
						"  {{ {specializer}::{name}, {{ rep_{}, {} }} }},",
						semantics.tag(),
						args.recorded_count()
					)?;
				},
				SyscallKind::Irregular { .. } | SyscallKind::Restart { .. } => {
					writeln!(out, "  {{ {specializer}::{name}, {{ rep_IRREGULAR, -1 }} }},")?;
				},
				SyscallKind::Unsupported => {},
			}
		}
		writeln!(out, "}};")?;
		writeln!(out)?;
	}
	Ok(())
}
