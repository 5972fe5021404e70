//! The built-in Linux syscall catalogue
//!
//! Numbers are the i386 and x86-64 ABI numbers. Syscalls that only exist
//! on one of the two architectures leave the other number unset.

use crate::generator::CatalogueError;
use crate::syscall::catalogue::Catalogue;
use crate::syscall::entry::SyscallEntry;
use crate::syscall::types::ArgDescriptor;
use crate::syscall::types::ReplaySemantics::{Emu, Exec, ExecRetEmu, MayExec};

/// Bytes actually transferred by the call, clamped at zero on failure
const RESULT_SIZE: &str = "std::max<ssize_t>(0, t->regs().syscall_result_signed())";

fn fixed(ty: &str) -> ArgDescriptor {
	ArgDescriptor::fixed(ty)
}

fn dynamic(size_expr: &str) -> ArgDescriptor {
	ArgDescriptor::dynamic(size_expr)
}

fn result_sized() -> ArgDescriptor {
	dynamic(RESULT_SIZE)
}

impl Catalogue {
	/// Build the built-in Linux catalogue
	pub fn linux() -> Result<Self, CatalogueError> {
		Self::new(linux_entries())
	}
}

#[allow(clippy::too_many_lines)]
fn linux_entries() -> Vec<SyscallEntry> {
	vec![
		SyscallEntry::restart("restart_syscall", Emu).x86(0).x64(219),
		SyscallEntry::irregular("exit", Exec).x86(1).x64(60),
		SyscallEntry::irregular("fork", Exec).x86(2).x64(57),
		SyscallEntry::regular("read", Emu).x86(3).x64(0).arg2(result_sized()),
		SyscallEntry::regular("write", Emu).x86(4).x64(1),
		SyscallEntry::irregular("open", Emu).x86(5).x64(2),
		SyscallEntry::irregular("close", Exec).x86(6).x64(3),
		SyscallEntry::regular("waitpid", Emu).x86(7).arg2(fixed("int")),
		SyscallEntry::regular("creat", Emu).x86(8).x64(85),
		SyscallEntry::regular("link", Emu).x86(9).x64(86),
		SyscallEntry::regular("unlink", Emu).x86(10).x64(87),
		SyscallEntry::irregular("execve", Exec).x86(11).x64(59),
		SyscallEntry::regular("chdir", Exec).x86(12).x64(80),
		SyscallEntry::regular("time", Emu).x86(13).x64(201).arg1(fixed("typename Arch::time_t")),
		SyscallEntry::unsupported("mknod").x86(14).x64(133),
		SyscallEntry::regular("chmod", Emu).x86(15).x64(90),
		SyscallEntry::regular("lseek", Emu).x86(19).x64(8),
		SyscallEntry::regular("getpid", Emu).x86(20).x64(39),
		SyscallEntry::unsupported("mount").x86(21).x64(165),
		SyscallEntry::regular("getuid", Emu).x86(24).x64(102),
		SyscallEntry::unsupported("ptrace").x86(26).x64(101),
		SyscallEntry::regular("alarm", Emu).x86(27).x64(37),
		SyscallEntry::regular("pause", MayExec).x86(29).x64(34),
		SyscallEntry::regular("utime", Emu).x86(30).x64(132),
		SyscallEntry::regular("access", Emu).x86(33).x64(21),
		SyscallEntry::regular("sync", Emu).x86(36).x64(162),
		SyscallEntry::regular("kill", Exec).x86(37).x64(62),
		SyscallEntry::regular("rename", Emu).x86(38).x64(82),
		SyscallEntry::regular("mkdir", Emu).x86(39).x64(83),
		SyscallEntry::regular("rmdir", Emu).x86(40).x64(84),
		SyscallEntry::regular("dup", Exec).x86(41).x64(32),
		SyscallEntry::regular("pipe", Exec).x86(42).x64(22).arg1(fixed("int[2]")),
		SyscallEntry::regular("times", Emu).x86(43).x64(100).arg1(fixed("typename Arch::tms")),
		SyscallEntry::regular("brk", Exec).x86(45).x64(12),
		SyscallEntry::irregular("ioctl", Exec).x86(54).x64(16),
		SyscallEntry::irregular("fcntl", ExecRetEmu).x86(55).x64(72),
		SyscallEntry::regular("setpgid", Emu).x86(57).x64(109),
		SyscallEntry::regular("umask", Emu).x86(60).x64(95),
		SyscallEntry::regular("chroot", Emu).x86(61).x64(161),
		SyscallEntry::regular("dup2", Exec).x86(63).x64(33),
		SyscallEntry::regular("getppid", Emu).x86(64).x64(110),
		SyscallEntry::regular("getpgrp", Emu).x86(65).x64(111),
		SyscallEntry::regular("setsid", Emu).x86(66).x64(112),
		SyscallEntry::irregular("sigaction", Exec).x86(67),
		SyscallEntry::regular("getrlimit", Emu).x86(76).x64(97).arg2(fixed("typename Arch::rlimit")),
		SyscallEntry::regular("gettimeofday", Emu)
			.x86(78)
			.x64(96)
			.arg1(fixed("typename Arch::timeval"))
			.arg2(fixed("typename Arch::timezone")),
		SyscallEntry::regular("select", Emu)
			.x86(82)
			.x64(23)
			.arg2(fixed("typename Arch::fd_set"))
			.arg3(fixed("typename Arch::fd_set"))
			.arg4(fixed("typename Arch::fd_set"))
			.arg5(fixed("typename Arch::timeval")),
		SyscallEntry::regular("symlink", Emu).x86(83).x64(88),
		SyscallEntry::regular("readlink", Emu).x86(85).x64(89).arg2(result_sized()),
		SyscallEntry::irregular("mmap", Exec).x86(90).x64(9),
		SyscallEntry::irregular("munmap", Exec).x86(91).x64(11),
		SyscallEntry::regular("truncate", Emu).x86(92).x64(76),
		SyscallEntry::regular("ftruncate", Emu).x86(93).x64(77),
		SyscallEntry::regular("fchmod", Emu).x86(94).x64(91),
		SyscallEntry::regular("statfs", Emu).x86(99).x64(137).arg2(fixed("typename Arch::statfs")),
		SyscallEntry::regular("fstatfs", Emu).x86(100).x64(138).arg2(fixed("typename Arch::statfs")),
		SyscallEntry::irregular("socketcall", Emu).x86(102),
		SyscallEntry::regular("setitimer", Emu).x86(104).x64(38).arg3(fixed("typename Arch::itimerval")),
		SyscallEntry::regular("getitimer", Emu).x86(105).x64(36).arg2(fixed("typename Arch::itimerval")),
		SyscallEntry::regular("stat", Emu).x86(106).x64(4).arg2(fixed("typename Arch::stat")),
		SyscallEntry::regular("lstat", Emu).x86(107).x64(6).arg2(fixed("typename Arch::stat")),
		SyscallEntry::regular("fstat", Emu).x86(108).x64(5).arg2(fixed("typename Arch::stat")),
		SyscallEntry::regular("wait4", Emu)
			.x86(114)
			.x64(61)
			.arg2(fixed("int"))
			.arg4(fixed("typename Arch::rusage")),
		SyscallEntry::regular("sysinfo", Emu).x86(116).x64(99).arg1(fixed("typename Arch::sysinfo")),
		SyscallEntry::irregular("ipc", Emu).x86(117),
		SyscallEntry::regular("fsync", Emu).x86(118).x64(74),
		SyscallEntry::irregular("sigreturn", Exec).x86(119),
		SyscallEntry::irregular("clone", Exec).x86(120).x64(56),
		SyscallEntry::regular("uname", Emu).x86(122).x64(63).arg1(fixed("typename Arch::utsname")),
		SyscallEntry::irregular("mprotect", Exec).x86(125).x64(10),
		SyscallEntry::regular("getpgid", Emu).x86(132).x64(121),
		SyscallEntry::regular("fchdir", Exec).x86(133).x64(81),
		SyscallEntry::regular("_llseek", Emu).x86(140).arg4(fixed("typename Arch::__kernel_loff_t")),
		SyscallEntry::regular("getdents", Emu).x86(141).x64(78).arg2(result_sized()),
		SyscallEntry::regular("flock", Emu).x86(143).x64(73),
		SyscallEntry::regular("msync", Exec).x86(144).x64(26),
		SyscallEntry::irregular("readv", Emu).x86(145).x64(19),
		SyscallEntry::regular("writev", Emu).x86(146).x64(20),
		SyscallEntry::regular("getsid", Emu).x86(147).x64(124),
		SyscallEntry::regular("fdatasync", Emu).x86(148).x64(75),
		SyscallEntry::irregular("_sysctl", Emu).x86(149).x64(156),
		SyscallEntry::regular("mlock", Exec).x86(150).x64(149),
		SyscallEntry::regular("munlock", Exec).x86(151).x64(150),
		SyscallEntry::regular("sched_getparam", Emu)
			.x86(155)
			.x64(143)
			.arg2(fixed("typename Arch::sched_param")),
		SyscallEntry::regular("sched_yield", MayExec).x86(158).x64(24),
		SyscallEntry::regular("nanosleep", MayExec).x86(162).x64(35).arg2(fixed("typename Arch::timespec")),
		SyscallEntry::irregular("mremap", Exec).x86(163).x64(25),
		SyscallEntry::regular("poll", MayExec)
			.x86(168)
			.x64(7)
			.arg1(dynamic("sizeof(typename Arch::pollfd) * t->regs().arg2()")),
		SyscallEntry::irregular("prctl", Exec).x86(172).x64(157),
		SyscallEntry::irregular("rt_sigreturn", Exec).x86(173).x64(15),
		SyscallEntry::irregular("rt_sigaction", Exec).x86(174).x64(13),
		SyscallEntry::irregular("rt_sigprocmask", Exec).x86(175).x64(14),
		SyscallEntry::regular("pread64", Emu).x86(180).x64(17).arg2(result_sized()),
		SyscallEntry::regular("pwrite64", Emu).x86(181).x64(18),
		SyscallEntry::regular("getcwd", Emu).x86(183).x64(79).arg1(ArgDescriptor::string()),
		SyscallEntry::regular("sigaltstack", Exec).x86(186).x64(131).arg2(fixed("typename Arch::stack_t")),
		SyscallEntry::irregular("vfork", Exec).x86(190).x64(58),
		SyscallEntry::regular("ugetrlimit", Emu).x86(191).arg2(fixed("typename Arch::rlimit")),
		SyscallEntry::irregular("mmap2", Exec).x86(192),
		SyscallEntry::regular("stat64", Emu).x86(195).arg2(fixed("typename Arch::stat64")),
		SyscallEntry::regular("lstat64", Emu).x86(196).arg2(fixed("typename Arch::stat64")),
		SyscallEntry::regular("fstat64", Emu).x86(197).arg2(fixed("typename Arch::stat64")),
		SyscallEntry::regular("getuid32", Emu).x86(199),
		SyscallEntry::irregular("madvise", ExecRetEmu).x86(219).x64(28),
		SyscallEntry::regular("getdents64", Emu).x86(220).x64(217).arg2(result_sized()),
		SyscallEntry::irregular("fcntl64", ExecRetEmu).x86(221),
		SyscallEntry::regular("gettid", Emu).x86(224).x64(186),
		SyscallEntry::regular("getxattr", Emu).x86(229).x64(191).arg3(result_sized()),
		SyscallEntry::regular("tkill", Exec).x86(238).x64(200),
		SyscallEntry::irregular("futex", Emu).x86(240).x64(202),
		SyscallEntry::regular("sched_setaffinity", ExecRetEmu).x86(241).x64(203),
		SyscallEntry::regular("sched_getaffinity", Emu).x86(242).x64(204).arg3(result_sized()),
		SyscallEntry::regular("set_thread_area", Exec)
			.x86(243)
			.x64(205)
			.arg1(fixed("typename Arch::user_desc")),
		SyscallEntry::unsupported("get_thread_area").x86(244).x64(211),
		SyscallEntry::irregular("exit_group", Exec).x86(252).x64(231),
		SyscallEntry::regular("epoll_create", Emu).x86(254).x64(213),
		SyscallEntry::regular("epoll_ctl", Emu).x86(255).x64(233),
		SyscallEntry::irregular("epoll_wait", Emu).x86(256).x64(232),
		SyscallEntry::regular("set_tid_address", Exec).x86(258).x64(218),
		SyscallEntry::regular("clock_gettime", Emu).x86(265).x64(228).arg2(fixed("typename Arch::timespec")),
		SyscallEntry::regular("clock_getres", Emu).x86(266).x64(229).arg2(fixed("typename Arch::timespec")),
		SyscallEntry::regular("tgkill", Exec).x86(270).x64(234),
		SyscallEntry::regular("utimes", Emu).x86(271).x64(235),
		SyscallEntry::irregular("openat", Emu).x86(295).x64(257),
		SyscallEntry::regular("mkdirat", Emu).x86(296).x64(258),
		SyscallEntry::regular("fstatat64", Emu).x86(300).arg3(fixed("typename Arch::stat64")),
		SyscallEntry::regular("newfstatat", Emu).x64(262).arg3(fixed("typename Arch::stat")),
		SyscallEntry::regular("unlinkat", Emu).x86(301).x64(263),
		SyscallEntry::regular("readlinkat", Emu).x86(305).x64(267).arg3(result_sized()),
		SyscallEntry::regular("faccessat", Emu).x86(307).x64(269),
		SyscallEntry::regular("set_robust_list", ExecRetEmu).x86(311).x64(273),
		SyscallEntry::regular("get_robust_list", Emu)
			.x86(312)
			.x64(274)
			.arg2(fixed("typename Arch::unsigned_word"))
			.arg3(fixed("typename Arch::size_t")),
		SyscallEntry::unsupported("splice").x86(313).x64(275),
		SyscallEntry::regular("getcpu", Emu)
			.x86(318)
			.x64(309)
			.arg1(fixed("unsigned int"))
			.arg2(fixed("unsigned int")),
		SyscallEntry::regular("utimensat", Emu).x86(320).x64(280),
		SyscallEntry::regular("epoll_create1", Emu).x86(329).x64(291),
		SyscallEntry::regular("pipe2", Exec).x86(331).x64(293).arg1(fixed("int[2]")),
		SyscallEntry::unsupported("perf_event_open").x86(336).x64(298),
		SyscallEntry::regular("prlimit64", Exec)
			.x86(340)
			.x64(302)
			.arg4(fixed("typename Arch::rlimit64")),
		SyscallEntry::regular("getrandom", Emu).x86(355).x64(318).arg1(result_sized()),
		SyscallEntry::regular("memfd_create", Emu).x86(356).x64(319),
		SyscallEntry::regular("socket", Emu).x86(359).x64(41),
		SyscallEntry::regular("connect", Emu).x86(362).x64(42),
		SyscallEntry::irregular("accept", Emu).x64(43),
		SyscallEntry::regular("sendto", Emu).x86(369).x64(44),
		SyscallEntry::regular("recvfrom", Emu)
			.x86(371)
			.x64(45)
			.arg2(result_sized())
			.arg5(fixed("typename Arch::sockaddr"))
			.arg6(fixed("typename Arch::socklen_t")),
		SyscallEntry::irregular("arch_prctl", Exec).x64(158),
	]
}
