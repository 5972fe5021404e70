//! Error types for the generator
//!
//! This module contains the load-time catalogue errors, the generator's
//! error type and a result type.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::syscall::Arch;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Malformed catalogue data, detected when the catalogue is built
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
	/// Two entries share a name
	#[error("Duplicate syscall name: {0}")]
	DuplicateName(String),

	/// The name cannot be pasted into generated source
	#[error("Syscall name is not a valid identifier: {0:?}")]
	InvalidName(String),

	/// Negative numbers are reserved for placeholders
	#[error("Negative {arch} number {number} for syscall {name}")]
	NegativeNumber { name: String, arch: Arch, number: i32 },

	/// Two entries share a number on one architecture
	#[error("Syscalls {first} and {second} share {arch} number {number}")]
	DuplicateNumber {
		first: String,
		second: String,
		arch: Arch,
		number: i32,
	},

	/// An argument descriptor that cannot produce a recording statement
	#[error("Inconsistent descriptor for {slot} of syscall {name}: {reason}")]
	InconsistentDescriptor {
		name: String,
		slot: &'static str,
		reason: &'static str,
	},
}

/// Error type for generator operations
#[derive(Debug, Error)]
pub enum GeneratorError {
	/// The catalogue failed validation
	#[error("Malformed syscall catalogue: {0}")]
	Catalogue(#[from] CatalogueError),

	/// No emitter produces the requested artifact
	#[error("Unknown artifact: {0}")]
	UnknownArtifact(String),

	/// The output path does not name an artifact or a writable file
	#[error("Invalid output path: {}", .0.display())]
	InvalidOutputPath(PathBuf),

	/// An I/O error occurred
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	/// Other error
	#[error("{0}")]
	Other(String),
}
