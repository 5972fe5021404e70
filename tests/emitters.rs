//! Rendered text of every artifact

mod common;

use syscallgen::{Arch, ArgDescriptor, Catalogue, ReplaySemantics, SyscallEntry};

#[test]
fn x86_enumeration_assigns_placeholders_and_counts_entries() {
	let rendered = common::render(common::read_and_foo_new(), "SyscallEnumsX86");
	assert_eq!(
		rendered,
		"enum Syscalls {\n  foo_new = -1,\n  read = 3,\n  SYSCALL_COUNT = 2,\n};\n\n"
	);
}

#[test]
fn x64_enumeration_uses_real_numbers() {
	let rendered = common::render(common::read_and_foo_new(), "SyscallEnumsX64");
	assert_eq!(
		rendered,
		"enum Syscalls {\n  read = 0,\n  foo_new = 400,\n  SYSCALL_COUNT = 2,\n};\n\n"
	);
}

#[test]
fn enumerations_are_strictly_increasing_with_distinct_placeholders() {
	for artifact in ["SyscallEnumsX86", "SyscallEnumsX64"] {
		let rendered = syscallgen::linux().unwrap().render(artifact).unwrap();
		let values = common::enum_values(&rendered);
		assert!(values.windows(2).all(|pair| pair[0].1 < pair[1].1), "{artifact}");
		assert!(rendered.contains(&format!("  SYSCALL_COUNT = {},\n", values.len())));
	}
}

#[test]
fn unsupported_entries_stay_in_the_enumeration() {
	let rendered = common::render(common::mixed(), "SyscallEnumsX86");
	assert!(rendered.contains("  ptrace = 26,\n"));
	assert!(rendered.contains("  SYSCALL_COUNT = 9,\n"));
}

#[test]
fn emulation_lookup_covers_every_entry_and_fails_on_unknown_numbers() {
	let rendered = common::render(common::read_and_foo_new(), "IsAlwaysEmulatedSyscall");
	let x64 = rendered
		.split("template<> bool is_always_emulated_syscall_arch<X64Arch>(int syscallno) {\n")
		.nth(1)
		.expect("x64 specialization");
	assert!(x64.contains("    case X64Arch::foo_new: return true;\n"));
	assert!(x64.contains("    case X64Arch::read: return false;\n"));
	assert!(x64.contains("    default:\n      FATAL() << \"Unknown syscall \" << syscallno;\n"));

	// foo_new does not exist on x86 but still gets a case
	assert!(rendered.contains("    case X86Arch::foo_new: return true;\n"));
	assert!(rendered.starts_with(
		"template <typename Arch> static bool is_always_emulated_syscall_arch(int syscall);\n\n"
	));
}

#[test]
fn emulation_lookup_only_answers_true_for_emu() {
	let catalogue = Catalogue::new([
		SyscallEntry::regular("a", ReplaySemantics::Emu).x64(1),
		SyscallEntry::irregular("b", ReplaySemantics::Exec).x64(2),
		SyscallEntry::restart("c", ReplaySemantics::ExecRetEmu).x64(3),
		SyscallEntry::regular("d", ReplaySemantics::MayExec).x64(4),
		SyscallEntry::unsupported("e").x64(5),
	])
	.unwrap();
	let rendered = common::render(catalogue, "IsAlwaysEmulatedSyscall");
	assert!(rendered.contains("case X64Arch::a: return true;"));
	for name in ["b", "c", "d", "e"] {
		assert!(rendered.contains(&format!("case X64Arch::{name}: return false;")), "{name}");
	}
}

#[test]
fn name_lookup_only_covers_defined_syscalls() {
	let rendered = common::render(common::mixed(), "SyscallnameArch");
	let (x86, x64) = rendered
		.split_once("template <> const char* syscallname_arch<X64Arch>(int syscall) {\n")
		.expect("x64 specialization");

	assert!(x86.contains("    case X86Arch::socketcall: return \"socketcall\";\n"));
	assert!(!x86.contains("foo_new"));
	assert!(!x86.contains("ptrace"));
	assert!(x64.contains("    case X64Arch::foo_new: return \"foo_new\";\n"));
	assert!(!x64.contains("socketcall"));
	assert_eq!(rendered.matches("    default: return \"<unknown-syscall>\";\n").count(), 2);
}

#[test]
fn record_cases_follow_slot_order_and_skip_non_regular_entries() {
	let rendered = common::render(common::mixed(), "SyscallRecordCase");
	let expected = "  case Arch::read:
    t->record_remote(remote_ptr<void>(t->regs().arg2()), t->regs().syscall_result());
    break;
  case Arch::foo_new:
    break;
  case Arch::open:
    t->record_remote_str(remote_ptr<void>(t->regs().arg1()));
    break;
  case Arch::stat:
    t->record_remote_str(remote_ptr<void>(t->regs().arg1()));
    t->record_remote(remote_ptr<typename Arch::stat>(t->regs().arg2()));
    break;
  case Arch::waitpid:
    t->record_remote(remote_ptr<int>(t->regs().arg2()));
    break;
";
	assert_eq!(rendered, expected);
}

#[test]
fn record_slots_are_written_in_register_order_regardless_of_declaration_order() {
	let catalogue = Catalogue::new([SyscallEntry::regular("wait4", ReplaySemantics::Emu)
		.x86(114)
		.arg4(ArgDescriptor::fixed("typename Arch::rusage"))
		.arg2(ArgDescriptor::fixed("int"))])
	.unwrap();
	let rendered = common::render(catalogue, "SyscallRecordCase");
	let arg2 = rendered.find("arg2()").unwrap();
	let arg4 = rendered.find("arg4()").unwrap();
	assert!(arg2 < arg4);
}

#[test]
fn defs_table_rows_are_sorted_and_skip_unsupported() {
	let rendered = common::render(common::mixed(), "SyscallDefsTable");
	let expected_x64 = "\
template<> syscall_defs<X64Arch>::Table syscall_defs<X64Arch>::table = {
  { X64Arch::read, { rep_EXEC, 1 } },
  { X64Arch::open, { rep_EMU, 1 } },
  { X64Arch::stat, { rep_EMU, 2 } },
  { X64Arch::clone, { rep_IRREGULAR, -1 } },
  { X64Arch::restart_syscall, { rep_IRREGULAR, -1 } },
  { X64Arch::foo_new, { rep_EMU, 0 } },
};

";
	assert!(rendered.ends_with(expected_x64));

	let expected_x86 = "\
template<> syscall_defs<X86Arch>::Table syscall_defs<X86Arch>::table = {
  { X86Arch::restart_syscall, { rep_IRREGULAR, -1 } },
  { X86Arch::read, { rep_EXEC, 1 } },
  { X86Arch::open, { rep_EMU, 1 } },
  { X86Arch::waitpid, { rep_MAY_EXEC, 1 } },
  { X86Arch::socketcall, { rep_IRREGULAR, -1 } },
  { X86Arch::stat, { rep_EMU, 2 } },
  { X86Arch::clone, { rep_IRREGULAR, -1 } },
};

";
	assert!(rendered.starts_with(expected_x86));
	assert!(!rendered.contains("ptrace"));
}

#[test]
fn defs_table_argument_counts_match_the_catalogue() {
	let generator = syscallgen::linux().unwrap();
	let rendered = generator.render("SyscallDefsTable").unwrap();
	for arch in Arch::ALL {
		for entry in generator.catalogue().for_arch(arch) {
			let Some(args) = entry.args() else {
				continue;
			};
			let row = format!(
				"  {{ {}::{}, {{ rep_{}, {} }} }},\n",
				arch.specializer(),
				entry.name(),
				entry.semantics().unwrap().tag(),
				args.recorded_count()
			);
			assert!(rendered.contains(&row), "missing row {row:?}");
		}
	}
}

#[test]
fn number_checks_only_cover_the_baseline_arch() {
	let rendered = common::render(common::mixed(), "CheckSyscallNumbers");
	assert!(rendered.contains(
		"static_assert(X86Arch::read == SYS_read, \"Incorrect syscall number for read\");\n"
	));
	// Number zero is still a defined number
	assert!(rendered.contains("static_assert(X86Arch::restart_syscall == SYS_restart_syscall"));
	assert!(rendered.contains("static_assert(X86Arch::ptrace == SYS_ptrace"));
	assert!(!rendered.contains("foo_new"));
	assert!(!rendered.contains("X64Arch"));
	assert_eq!(rendered.lines().count(), 8);
}

#[test]
fn number_checks_follow_configuration() {
	let generator = syscallgen::new()
		.catalogue(common::read_and_foo_new())
		.check_arch(Arch::X64)
		.reference_prefix("__NR_")
		.build()
		.unwrap();
	let rendered = generator.render("CheckSyscallNumbers").unwrap();
	assert_eq!(
		rendered,
		"static_assert(X64Arch::read == __NR_read, \"Incorrect syscall number for read\");\n\
		 static_assert(X64Arch::foo_new == __NR_foo_new, \"Incorrect syscall number for foo_new\");\n"
	);
}

#[test]
fn helper_triples_switch_over_every_arch() {
	let rendered = common::render(common::read_and_foo_new(), "SyscallHelperFunctions");
	let expected_has = "\
inline bool
has_read_syscall(SupportedArch arch) {
  switch (arch) {
    case x86:
      return X86Arch::read >= 0;
    case x86_64:
      return X64Arch::read >= 0;
    default:
      assert(0 && \"unsupported architecture\");
  }
}
";
	assert!(rendered.starts_with(expected_has));
	assert!(rendered.contains("is_foo_new_syscall(int syscallno, SupportedArch arch) {"));
	assert!(rendered.contains("      return syscallno >= 0 && syscallno == X64Arch::foo_new;\n"));
	assert!(rendered.contains("syscall_number_for_foo_new(SupportedArch arch) {"));
	assert!(rendered.contains("      assert(X86Arch::foo_new >= 0);\n      return X86Arch::foo_new;\n"));
	assert_eq!(rendered.matches("assert(0 && \"unsupported architecture\");").count(), 6);
}
