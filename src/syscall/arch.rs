//! Supported architectures
//!
//! The generated code is specialized for every architecture listed here.

use std::fmt;

/// An instruction-set architecture the tracer supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arch {
	/// 32-bit x86
	X86,
	/// x86-64
	X64,
}

impl Arch {
	/// Every supported architecture, in emission order
	pub const ALL: [Self; 2] = [Self::X86, Self::X64];

	/// The C++ type the generated templates are specialized on
	#[must_use]
	pub const fn specializer(self) -> &'static str {
		match self {
			Self::X86 => "X86Arch",
			Self::X64 => "X64Arch",
		}
	}

	/// The `SupportedArch` enumerator used in runtime switches
	#[must_use]
	pub const fn case_label(self) -> &'static str {
		match self {
			Self::X86 => "x86",
			Self::X64 => "x86_64",
		}
	}

	/// Short lowercase key
	#[must_use]
	pub const fn key(self) -> &'static str {
		match self {
			Self::X86 => "x86",
			Self::X64 => "x64",
		}
	}
}

impl fmt::Display for Arch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}
