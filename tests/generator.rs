//! Artifact selection, output files and determinism

mod common;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use syscallgen::emit::EmitContext;
use syscallgen::{GeneratorError, OutputSink, Selector};

/// A fresh scratch directory for one test
fn scratch_dir(test: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("syscallgen-{}-{}", std::process::id(), test));
	let _ = fs::remove_dir_all(&dir);
	fs::create_dir_all(&dir).expect("create scratch dir");
	dir
}

fn dir_entries(dir: &Path) -> Vec<String> {
	let mut names: Vec<String> = fs::read_dir(dir)
		.unwrap()
		.map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
		.collect();
	names.sort();
	names
}

/// Writes half an artifact, then fails
#[syscallgen::emitter(BrokenArtifact)]
fn write_broken(ctx: &EmitContext<'_>, out: &mut dyn Write) -> syscallgen::Result<()> {
	writeln!(out, "enum Syscalls {{")?;
	Err(GeneratorError::Other(format!("gave up after {} entries", ctx.catalogue.len())))
}

/// Derives its artifact name from the function name
#[syscallgen::emitter]
fn write_syscall_count(ctx: &EmitContext<'_>, out: &mut dyn Write) -> syscallgen::Result<()> {
	writeln!(out, "#define SYSCALL_COUNT {}", ctx.catalogue.len())?;
	Ok(())
}

#[test]
fn every_builtin_artifact_resolves() {
	let selector = Selector::new();
	let artifacts: Vec<&str> = selector.artifacts().collect();
	assert_eq!(
		artifacts,
		vec![
			"CheckSyscallNumbers",
			"IsAlwaysEmulatedSyscall",
			"SyscallDefsTable",
			"SyscallEnumsX86",
			"SyscallEnumsX64",
			"SyscallnameArch",
			"SyscallRecordCase",
			"SyscallHelperFunctions",
		]
	);
	for artifact in artifacts {
		assert_eq!(selector.resolve(artifact).unwrap().artifact(), artifact);
	}
}

#[test]
fn unknown_artifact_is_a_configuration_error() {
	let generator = common::generator(common::read_and_foo_new());
	let err = generator.render("SyscallEnumsArm").unwrap_err();
	assert!(matches!(err, GeneratorError::UnknownArtifact(ref name) if name == "SyscallEnumsArm"));
}

#[test]
fn unknown_artifact_produces_no_file() {
	let dir = scratch_dir("unknown-artifact");
	let generator = common::generator(common::read_and_foo_new());

	let err = generator.generate_path(dir.join("NoSuchArtifact.generated")).unwrap_err();
	assert!(matches!(err, GeneratorError::UnknownArtifact(_)));
	assert!(dir_entries(&dir).is_empty());
}

#[test]
fn artifact_name_comes_from_the_file_stem() {
	let path = Path::new("out/gen/SyscallEnumsX86.generated");
	assert_eq!(Selector::artifact_for_path(path).unwrap(), "SyscallEnumsX86");
	assert!(matches!(
		Selector::artifact_for_path(Path::new("/")),
		Err(GeneratorError::InvalidOutputPath(_))
	));
}

#[test]
fn generated_file_matches_rendered_text() {
	let dir = scratch_dir("generate");
	let generator = syscallgen::linux().unwrap();
	let target = dir.join("SyscallDefsTable.generated");

	let published = generator.generate_path(&target).unwrap();
	assert_eq!(published, target);
	assert_eq!(fs::read_to_string(&target).unwrap(), generator.render("SyscallDefsTable").unwrap());
	assert_eq!(dir_entries(&dir), vec!["SyscallDefsTable.generated".to_string()]);
}

#[test]
fn failing_emitter_leaves_no_partial_artifact() {
	let dir = scratch_dir("broken");
	let target = dir.join("out.h");
	fs::write(&target, "previous contents").unwrap();

	let generator = syscallgen::new()
		.catalogue(common::mixed())
		.emitter(BrokenArtifact)
		.build()
		.unwrap();
	let err = generator.generate("BrokenArtifact", &target).unwrap_err();
	assert_eq!(err.to_string(), "gave up after 9 entries");

	assert_eq!(fs::read_to_string(&target).unwrap(), "previous contents");
	assert_eq!(dir_entries(&dir), vec!["out.h".to_string()]);
}

#[test]
fn extra_emitters_use_the_function_name() {
	let generator = syscallgen::new()
		.catalogue(common::mixed())
		.emitter(SyscallCount)
		.build()
		.unwrap();
	assert_eq!(generator.render("SyscallCount").unwrap(), "#define SYSCALL_COUNT 9\n");
}

#[test]
fn dropped_sink_discards_its_temporary_file() {
	let dir = scratch_dir("sink");
	let target = dir.join("SyscallEnumsX64.generated");
	{
		let mut sink = OutputSink::create(&target).unwrap();
		sink.write_all(b"enum Syscalls {\n").unwrap();
		assert_eq!(dir_entries(&dir), vec![".SyscallEnumsX64.generated.tmp".to_string()]);
	}
	assert!(dir_entries(&dir).is_empty());
}

#[test]
fn committed_sink_publishes_its_contents() {
	let dir = scratch_dir("sink-commit");
	let target = dir.join("artifact.h");
	let mut sink = OutputSink::create(&target).unwrap();
	sink.write_all(b"hello\n").unwrap();
	assert!(!target.exists());

	sink.commit().unwrap();
	assert_eq!(fs::read_to_string(&target).unwrap(), "hello\n");
	assert_eq!(dir_entries(&dir), vec!["artifact.h".to_string()]);
}

#[test]
fn rendering_is_deterministic() {
	for artifact in Selector::new().artifacts() {
		let first = syscallgen::linux().unwrap().render(artifact).unwrap();
		let second = syscallgen::linux().unwrap().render(artifact).unwrap();
		assert_eq!(first, second, "{artifact}");
		assert!(!first.is_empty(), "{artifact}");
	}
}

#[test]
fn unknown_name_sentinel_is_configurable() {
	let generator = syscallgen::new()
		.catalogue(common::read_and_foo_new())
		.unknown_syscall_name("?")
		.build()
		.unwrap();
	let rendered = generator.render("SyscallnameArch").unwrap();
	assert!(rendered.contains("    default: return \"?\";\n"));
	assert!(!rendered.contains("<unknown-syscall>"));
}

#[test]
fn default_selector_knows_every_builtin_artifact() {
	let selector = Selector::default();
	assert_eq!(selector.artifacts().count(), 8);
	assert!(selector.resolve("SyscallHelperFunctions").is_ok());
}

#[test]
fn builder_accepts_a_whole_config() {
	let config = syscallgen::GeneratorConfig {
		unknown_syscall_name: "<none>".to_string(),
		reference_prefix: "__NR_".to_string(),
		check_arch: syscallgen::Arch::X64,
	};
	let generator = syscallgen::new()
		.catalogue(common::read_and_foo_new())
		.config(config.clone())
		.build()
		.unwrap();
	assert_eq!(generator.config(), &config);
	assert!(generator.render("SyscallnameArch").unwrap().contains("default: return \"<none>\";"));
	assert!(generator
		.render("CheckSyscallNumbers")
		.unwrap()
		.starts_with("static_assert(X64Arch::read == __NR_read,"));
}
