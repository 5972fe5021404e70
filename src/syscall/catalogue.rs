//! The syscall catalogue
//!
//! A validated, immutable collection of syscall entries. Every emitter
//! reads the catalogue it is handed; nothing mutates it after
//! construction.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::generator::CatalogueError;
use crate::syscall::arch::Arch;
use crate::syscall::entry::SyscallEntry;
use crate::syscall::types::ArgDescriptor;

/// The full set of syscalls known to the generator
#[derive(Debug, Clone)]
pub struct Catalogue {
	entries: Vec<SyscallEntry>,
	by_name: HashMap<String, usize>,
}

impl Catalogue {
	/// Build a catalogue, rejecting malformed data
	///
	/// Entries keep the order they are given in; that order is the
	/// catalogue order every emitter iterates in.
	pub fn new(entries: impl IntoIterator<Item = SyscallEntry>) -> Result<Self, CatalogueError> {
		let entries: Vec<SyscallEntry> = entries.into_iter().collect();
		let mut by_name = HashMap::with_capacity(entries.len());

		for (index, entry) in entries.iter().enumerate() {
			validate_entry(entry)?;
			match by_name.entry(entry.name().to_string()) {
				Entry::Occupied(_) => return Err(CatalogueError::DuplicateName(entry.name().to_string())),
				Entry::Vacant(slot) => {
					slot.insert(index);
				},
			}
		}

		for arch in Arch::ALL {
			let mut seen: HashMap<i32, &str> = HashMap::new();
			for entry in &entries {
				let Some(number) = entry.number(arch) else {
					continue;
				};
				if let Some(first) = seen.insert(number, entry.name()) {
					return Err(CatalogueError::DuplicateNumber {
						first: first.to_string(),
						second: entry.name().to_string(),
						arch,
						number,
					});
				}
			}
		}

		tracing::debug!("Loaded syscall catalogue with {} entries", entries.len());
		Ok(Self { entries, by_name })
	}

	/// Every entry, in catalogue order
	#[must_use]
	pub fn entries(&self) -> &[SyscallEntry] {
		&self.entries
	}

	/// Entries that are numbered on `arch` and not unsupported, in catalogue order
	pub fn for_arch(&self, arch: Arch) -> impl Iterator<Item = &SyscallEntry> {
		self.entries.iter().filter(move |entry| entry.is_defined_on(arch))
	}

	/// Look an entry up by name
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&SyscallEntry> {
		self.by_name.get(name).map(|&index| &self.entries[index])
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Every entry paired with its effective number on `arch`
	///
	/// Entries without a real number get placeholders -1, -2, ... in
	/// catalogue order. The result is sorted by effective number, so it is
	/// strictly increasing.
	#[must_use]
	pub fn numbering(&self, arch: Arch) -> Vec<(&SyscallEntry, i32)> {
		let mut next_placeholder = -1;
		let mut numbered: Vec<(&SyscallEntry, i32)> = self
			.entries
			.iter()
			.map(|entry| match entry.number(arch) {
				Some(number) => (entry, number),
				None => {
					let placeholder = next_placeholder;
					next_placeholder -= 1;
					(entry, placeholder)
				},
			})
			.collect();
		numbered.sort_by_key(|&(_, number)| number);
		numbered
	}
}

fn validate_entry(entry: &SyscallEntry) -> Result<(), CatalogueError> {
	if !is_identifier(entry.name()) {
		return Err(CatalogueError::InvalidName(entry.name().to_string()));
	}

	for arch in Arch::ALL {
		if let Some(number) = entry.number(arch).filter(|number| *number < 0) {
			return Err(CatalogueError::NegativeNumber {
				name: entry.name().to_string(),
				arch,
				number,
			});
		}
	}

	let Some(args) = entry.args() else {
		return Ok(());
	};
	for (slot, descriptor) in args.iter() {
		let reason = match descriptor {
			ArgDescriptor::FixedType(ty) if ty.trim().is_empty() => Some("empty type name"),
			ArgDescriptor::DynamicSize { size_expr } if size_expr.trim().is_empty() => {
				Some("empty size expression")
			},
			ArgDescriptor::FixedType(_) | ArgDescriptor::DynamicSize { .. } | ArgDescriptor::NullTerminatedString => {
				None
			},
		};
		if let Some(reason) = reason {
			return Err(CatalogueError::InconsistentDescriptor {
				name: entry.name().to_string(),
				slot: slot.accessor(),
				reason,
			});
		}
	}

	Ok(())
}

/// Whether `name` is a C identifier
fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	chars
		.next()
		.is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
