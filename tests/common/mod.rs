#![allow(dead_code)]

use syscallgen::{ArgDescriptor, Catalogue, Generator, ReplaySemantics, SyscallEntry};

/// The two-entry catalogue used throughout the examples
pub fn read_and_foo_new() -> Catalogue {
	Catalogue::new([
		SyscallEntry::regular("read", ReplaySemantics::Exec)
			.x86(3)
			.x64(0)
			.arg2(ArgDescriptor::dynamic("t->regs().syscall_result()")),
		SyscallEntry::regular("foo_new", ReplaySemantics::Emu).x64(400),
	])
	.expect("valid catalogue")
}

/// A catalogue with every kind and descriptor, and holes on both architectures
pub fn mixed() -> Catalogue {
	Catalogue::new([
		SyscallEntry::regular("read", ReplaySemantics::Exec)
			.x86(3)
			.x64(0)
			.arg2(ArgDescriptor::dynamic("t->regs().syscall_result()")),
		SyscallEntry::regular("foo_new", ReplaySemantics::Emu).x64(400),
		SyscallEntry::regular("open", ReplaySemantics::Emu)
			.x86(5)
			.x64(2)
			.arg1(ArgDescriptor::string()),
		SyscallEntry::regular("stat", ReplaySemantics::Emu)
			.x86(106)
			.x64(4)
			.arg1(ArgDescriptor::string())
			.arg2(ArgDescriptor::fixed("typename Arch::stat")),
		SyscallEntry::irregular("clone", ReplaySemantics::Exec).x86(120).x64(56),
		SyscallEntry::restart("restart_syscall", ReplaySemantics::Emu).x86(0).x64(219),
		SyscallEntry::unsupported("ptrace").x86(26).x64(101),
		SyscallEntry::irregular("socketcall", ReplaySemantics::Emu).x86(102),
		SyscallEntry::regular("waitpid", ReplaySemantics::MayExec)
			.x86(7)
			.arg2(ArgDescriptor::fixed("int")),
	])
	.expect("valid catalogue")
}

pub fn generator(catalogue: Catalogue) -> Generator {
	syscallgen::new().catalogue(catalogue).build().expect("generator")
}

pub fn render(catalogue: Catalogue, artifact: &str) -> String {
	generator(catalogue).render(artifact).expect("render")
}

/// Parse `  name = value,` lines of a rendered enumeration
pub fn enum_values(rendered: &str) -> Vec<(String, i64)> {
	rendered
		.lines()
		.filter_map(|line| {
			let line = line.trim().strip_suffix(',')?;
			let (name, value) = line.split_once(" = ")?;
			Some((name.to_string(), value.parse().ok()?))
		})
		.filter(|(name, _)| name != "SYSCALL_COUNT")
		.collect()
}
