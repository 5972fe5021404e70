//! Argument recording cases
//!
//! One `case` per regular syscall, recording each described argument in
//! slot order. Other kinds are recorded by hand-written tracer code.

use std::io::Write;

use crate::emit::EmitContext;
use crate::emitter;
use crate::generator::Result;
use crate::syscall::{ArgDescriptor, ArgSlot};

fn write_recorder_for_arg(out: &mut dyn Write, slot: ArgSlot, descriptor: &ArgDescriptor) -> Result<()> {
	let reg = slot.accessor();
	match descriptor {
		ArgDescriptor::FixedType(ty) => {
			writeln!(out, "    t->record_remote(remote_ptr<{ty}>(t->regs().{reg}()));")?;
		},
		ArgDescriptor::DynamicSize { size_expr } => {
			writeln!(out, "    t->record_remote(remote_ptr<void>(t->regs().{reg}()), {size_expr});")?;
		},
		ArgDescriptor::NullTerminatedString => {
			writeln!(out, "    t->record_remote_str(remote_ptr<void>(t->regs().{reg}()));")?;
		},
	}
	Ok(())
}

#[emitter(SyscallRecordCase)]
pub fn write_syscall_record_cases(ctx: &EmitContext<'_>, out: &mut dyn Write) -> Result<()> {
	for entry in ctx.catalogue.entries() {
		let Some(args) = entry.args() else {
			continue;
		};
		tracing::trace!("Recording {} arguments of {}", args.recorded_count(), entry.name());

		writeln!(out, "  case Arch::{}:", entry.name())?;
		for (slot, descriptor) in args.iter() {
			write_recorder_for_arg(out, slot, descriptor)?;
		}
		writeln!(out, "    break;")?;
	}
	Ok(())
}
