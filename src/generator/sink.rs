//! Atomic output files
//!
//! An artifact is written to a temporary sibling of its destination and
//! renamed into place only once it is complete, so the tracer's build
//! never sees a partial artifact.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::generator::{GeneratorError, Result};

/// A buffered output file published on `commit`
///
/// Dropping the sink without committing removes the temporary file and
/// leaves the destination untouched.
#[derive(Debug)]
pub struct OutputSink {
	target: PathBuf,
	temp: PathBuf,
	writer: Option<BufWriter<File>>,
	committed: bool,
}

impl OutputSink {
	/// Open a sink for `target`
	pub fn create(target: impl AsRef<Path>) -> Result<Self> {
		let target = target.as_ref().to_path_buf();
		let file_name = target
			.file_name()
			.and_then(|name| name.to_str())
			.ok_or_else(|| GeneratorError::InvalidOutputPath(target.clone()))?;
		let temp = target.with_file_name(format!(".{file_name}.tmp"));

		let file = File::create(&temp)?;
		tracing::trace!("Opened temporary output {}", temp.display());
		Ok(Self {
			target,
			temp,
			writer: Some(BufWriter::new(file)),
			committed: false,
		})
	}

	/// The path the artifact is published to
	#[must_use]
	pub fn target(&self) -> &Path {
		&self.target
	}

	/// Flush the artifact and move it into place
	pub fn commit(mut self) -> Result<PathBuf> {
		if let Some(writer) = self.writer.take() {
			let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
			file.sync_all()?;
		}
		fs::rename(&self.temp, &self.target)?;
		self.committed = true;
		Ok(self.target.clone())
	}

	fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
		self.writer
			.as_mut()
			.ok_or_else(|| io::Error::other("output sink already committed"))
	}
}

impl Write for OutputSink {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.writer()?.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.writer()?.flush()
	}
}

impl Drop for OutputSink {
	fn drop(&mut self) {
		if !self.committed {
			// Close the file before unlinking it
			self.writer.take();
			if let Err(e) = fs::remove_file(&self.temp) {
				tracing::warn!("Could not remove temporary output {}: {}", self.temp.display(), e);
			} else {
				tracing::debug!("Discarded partial output for {}", self.target.display());
			}
		}
	}
}
