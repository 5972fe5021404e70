//! A single catalogue entry

use crate::syscall::arch::Arch;
use crate::syscall::types::{ArgDescriptor, ArgSlot, ReplaySemantics, SyscallArgs, SyscallKind};

/// Metadata for one syscall
///
/// Entries are built with the constructor matching their kind and then
/// given per-architecture numbers and, for regular syscalls, argument
/// descriptors:
///
/// ```
/// use syscallgen::{ArgDescriptor, ReplaySemantics, SyscallEntry};
///
/// let read = SyscallEntry::regular("read", ReplaySemantics::Exec)
/// 	.x86(3)
/// 	.x64(0)
/// 	.arg2(ArgDescriptor::dynamic("t->regs().syscall_result_signed()"));
/// assert_eq!(read.recorded_arg_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyscallEntry {
	name: String,
	x86: Option<i32>,
	x64: Option<i32>,
	kind: SyscallKind,
}

impl SyscallEntry {
	fn with_kind(name: impl Into<String>, kind: SyscallKind) -> Self {
		Self {
			name: name.into(),
			x86: None,
			x64: None,
			kind,
		}
	}

	/// A syscall recorded from its argument descriptors
	pub fn regular(name: impl Into<String>, semantics: ReplaySemantics) -> Self {
		Self::with_kind(
			name,
			SyscallKind::Regular {
				semantics,
				args: SyscallArgs::new(),
			},
		)
	}

	/// A syscall recorded by hand-written code
	pub fn irregular(name: impl Into<String>, semantics: ReplaySemantics) -> Self {
		Self::with_kind(name, SyscallKind::Irregular { semantics })
	}

	/// The restart syscall
	pub fn restart(name: impl Into<String>, semantics: ReplaySemantics) -> Self {
		Self::with_kind(name, SyscallKind::Restart { semantics })
	}

	/// A syscall excluded from dispatch
	pub fn unsupported(name: impl Into<String>) -> Self {
		Self::with_kind(name, SyscallKind::Unsupported)
	}

	/// Set the x86 number
	#[must_use]
	pub const fn x86(mut self, number: i32) -> Self {
		self.x86 = Some(number);
		self
	}

	/// Set the x86-64 number
	#[must_use]
	pub const fn x64(mut self, number: i32) -> Self {
		self.x64 = Some(number);
		self
	}

	/// Attach a descriptor to an argument slot
	///
	/// Has no effect on non-regular entries, whose recording is not
	/// described by the catalogue.
	#[must_use]
	pub fn arg(mut self, slot: ArgSlot, descriptor: ArgDescriptor) -> Self {
		if let SyscallKind::Regular { args, .. } = &mut self.kind {
			args.set(slot, descriptor);
		}
		self
	}

	#[must_use]
	pub fn arg1(self, descriptor: ArgDescriptor) -> Self {
		self.arg(ArgSlot::Arg1, descriptor)
	}

	#[must_use]
	pub fn arg2(self, descriptor: ArgDescriptor) -> Self {
		self.arg(ArgSlot::Arg2, descriptor)
	}

	#[must_use]
	pub fn arg3(self, descriptor: ArgDescriptor) -> Self {
		self.arg(ArgSlot::Arg3, descriptor)
	}

	#[must_use]
	pub fn arg4(self, descriptor: ArgDescriptor) -> Self {
		self.arg(ArgSlot::Arg4, descriptor)
	}

	#[must_use]
	pub fn arg5(self, descriptor: ArgDescriptor) -> Self {
		self.arg(ArgSlot::Arg5, descriptor)
	}

	#[must_use]
	pub fn arg6(self, descriptor: ArgDescriptor) -> Self {
		self.arg(ArgSlot::Arg6, descriptor)
	}

	/// The syscall's name
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The entry's kind
	#[must_use]
	pub const fn kind(&self) -> &SyscallKind {
		&self.kind
	}

	/// The real number on `arch`, if the syscall exists there
	#[must_use]
	pub const fn number(&self, arch: Arch) -> Option<i32> {
		match arch {
			Arch::X86 => self.x86,
			Arch::X64 => self.x64,
		}
	}

	/// Whether the entry has a number on `arch` and takes part in dispatch
	#[must_use]
	pub const fn is_defined_on(&self, arch: Arch) -> bool {
		self.number(arch).is_some() && !self.is_unsupported()
	}

	#[must_use]
	pub const fn is_unsupported(&self) -> bool {
		matches!(self.kind, SyscallKind::Unsupported)
	}

	/// Replay semantics, absent for unsupported entries
	#[must_use]
	pub const fn semantics(&self) -> Option<ReplaySemantics> {
		self.kind.semantics()
	}

	/// Argument descriptors, present only on regular entries
	#[must_use]
	pub const fn args(&self) -> Option<&SyscallArgs> {
		match &self.kind {
			SyscallKind::Regular { args, .. } => Some(args),
			_ => None,
		}
	}

	/// Number of argument slots the tracer records
	#[must_use]
	pub fn recorded_arg_count(&self) -> usize {
		self.args().map_or(0, SyscallArgs::recorded_count)
	}
}
