//! Value types describing how a syscall is recorded and replayed
//!
//! These types are the vocabulary of the catalogue: replay semantics,
//! argument slots and the descriptors attached to them.

use std::fmt;

/// How the tracer treats a syscall during replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplaySemantics {
	/// Always emulated, never executed
	Emu,
	/// Always executed, real results recorded
	Exec,
	/// Executed, but part of the post-state is emulated
	ExecRetEmu,
	/// Executed only under some conditions
	MayExec,
}

impl ReplaySemantics {
	/// The tag used in generated code
	#[must_use]
	pub const fn tag(self) -> &'static str {
		match self {
			Self::Emu => "EMU",
			Self::Exec => "EXEC",
			Self::ExecRetEmu => "EXEC_RET_EMU",
			Self::MayExec => "MAY_EXEC",
		}
	}

	/// Whether the tracer never executes the call
	#[must_use]
	pub const fn is_always_emulated(self) -> bool {
		match self {
			Self::Emu => true,
			Self::Exec | Self::ExecRetEmu | Self::MayExec => false,
		}
	}
}

impl fmt::Display for ReplaySemantics {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

/// One of the six syscall argument registers
///
/// The declaration order is the recording order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArgSlot {
	Arg1,
	Arg2,
	Arg3,
	Arg4,
	Arg5,
	Arg6,
}

impl ArgSlot {
	/// Every slot, in recording order
	pub const ALL: [Self; 6] = [Self::Arg1, Self::Arg2, Self::Arg3, Self::Arg4, Self::Arg5, Self::Arg6];

	/// Position of the slot (0-5)
	#[must_use]
	pub const fn index(self) -> usize {
		self as usize
	}

	/// Name of the register accessor on the tracer's register file
	#[must_use]
	pub const fn accessor(self) -> &'static str {
		match self {
			Self::Arg1 => "arg1",
			Self::Arg2 => "arg2",
			Self::Arg3 => "arg3",
			Self::Arg4 => "arg4",
			Self::Arg5 => "arg5",
			Self::Arg6 => "arg6",
		}
	}
}

/// How one argument's pointee is captured for replay
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgDescriptor {
	/// A pointer to a fixed-size value of the named type
	FixedType(String),
	/// A buffer whose length is computed by a C++ expression
	DynamicSize {
		/// Expression inlined verbatim into the generated code
		size_expr: String,
	},
	/// A string read up to and including its terminator
	NullTerminatedString,
}

impl ArgDescriptor {
	/// Record a fixed-size value of type `ty`
	pub fn fixed(ty: impl Into<String>) -> Self {
		Self::FixedType(ty.into())
	}

	/// Record a buffer of `size_expr` bytes
	pub fn dynamic(size_expr: impl Into<String>) -> Self {
		Self::DynamicSize {
			size_expr: size_expr.into(),
		}
	}

	/// Record a null-terminated string
	#[must_use]
	pub const fn string() -> Self {
		Self::NullTerminatedString
	}
}

/// The argument descriptors of a regular syscall, indexed by slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyscallArgs {
	slots: [Option<ArgDescriptor>; 6],
}

impl SyscallArgs {
	/// No recorded arguments
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Get the descriptor attached to a slot
	#[must_use]
	pub fn get(&self, slot: ArgSlot) -> Option<&ArgDescriptor> {
		self.slots[slot.index()].as_ref()
	}

	/// Attach a descriptor to a slot, replacing any previous one
	pub fn set(&mut self, slot: ArgSlot, descriptor: ArgDescriptor) {
		self.slots[slot.index()] = Some(descriptor);
	}

	/// Present slots in recording order
	pub fn iter(&self) -> impl Iterator<Item = (ArgSlot, &ArgDescriptor)> {
		ArgSlot::ALL
			.into_iter()
			.filter_map(|slot| self.get(slot).map(|descriptor| (slot, descriptor)))
	}

	/// Number of slots carrying a descriptor
	#[must_use]
	pub fn recorded_count(&self) -> usize {
		self.slots.iter().filter(|slot| slot.is_some()).count()
	}
}

/// The kind of a catalogue entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyscallKind {
	/// Fully described by its argument descriptors
	Regular {
		semantics: ReplaySemantics,
		args: SyscallArgs,
	},
	/// Recorded by hand-written code in the tracer
	Irregular { semantics: ReplaySemantics },
	/// The kernel's forced re-invocation after an interruption
	Restart { semantics: ReplaySemantics },
	/// Known but deliberately left out of dispatch
	Unsupported,
}

impl SyscallKind {
	/// Replay semantics, if the kind carries any
	#[must_use]
	pub const fn semantics(&self) -> Option<ReplaySemantics> {
		match self {
			Self::Regular { semantics, .. } | Self::Irregular { semantics } | Self::Restart { semantics } => {
				Some(*semantics)
			},
			Self::Unsupported => None,
		}
	}
}
