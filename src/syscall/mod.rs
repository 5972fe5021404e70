//! Syscall metadata model
//!
//! This module contains the catalogue of syscalls the generator reads,
//! the per-entry metadata and the value types describing how each
//! syscall is recorded and replayed.

mod arch;
mod catalogue;
mod entry;
mod linux;
mod types;

pub use arch::Arch;
pub use catalogue::Catalogue;
pub use entry::SyscallEntry;
pub use types::{ArgDescriptor, ArgSlot, ReplaySemantics, SyscallArgs, SyscallKind};
