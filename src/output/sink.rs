use std::path::{Path, PathBuf};

use crate::foundation::error::{ManifoldError, ManifoldResult};
use crate::pipeline::Artwork;

/// Destination for finished artworks.
pub trait DocumentSink {
    /// Persist one artwork.
    fn write(&mut self, artwork: &Artwork) -> ManifoldResult<()>;
}

/// Options for [`FileSink`].
#[derive(Clone, Debug)]
pub struct FileSinkOpts {
    /// Output SVG file path.
    pub out_path: PathBuf,
    /// Replace the output file if it already exists.
    pub overwrite: bool,
}

impl FileSinkOpts {
    /// Create options for writing to `out_path`, overwriting by default.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Writes the SVG text to a file, creating parent directories as needed.
#[derive(Debug)]
pub struct FileSink {
    opts: FileSinkOpts,
    bytes_written: u64,
}

impl FileSink {
    /// Create a new file sink.
    pub fn new(opts: FileSinkOpts) -> Self {
        Self {
            opts,
            bytes_written: 0,
        }
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.opts.out_path
    }

    /// Bytes written by the last successful [`DocumentSink::write`].
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl DocumentSink for FileSink {
    fn write(&mut self, artwork: &Artwork) -> ManifoldResult<()> {
        let path = &self.opts.out_path;
        if !self.opts.overwrite && path.exists() {
            return Err(ManifoldError::io(format!(
                "output '{}' already exists",
                path.display()
            )));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ManifoldError::io(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }

        let svg = artwork.svg();
        std::fs::write(path, svg)
            .map_err(|e| ManifoldError::io(format!("write '{}': {e}", path.display())))?;
        self.bytes_written = svg.len() as u64;

        tracing::debug!(path = %path.display(), bytes = self.bytes_written, "wrote artwork");
        Ok(())
    }
}

/// In-memory sink for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    documents: Vec<(String, String)>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured `(seed, svg)` pairs in write order.
    pub fn documents(&self) -> &[(String, String)] {
        &self.documents
    }
}

impl DocumentSink for InMemorySink {
    fn write(&mut self, artwork: &Artwork) -> ManifoldResult<()> {
        self.documents
            .push((artwork.seed().to_string(), artwork.svg().to_owned()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/sink.rs"]
mod tests;
