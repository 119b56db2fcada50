// ABOUTME: Output sink for rendered templates (file or stdout)
// ABOUTME: Owns the output file for the run and flushes stdout without closing it

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{OutputError, Result};

/// Where rendered output goes.
///
/// A file sink owns its handle and releases it in [`OutputSink::close`] (or
/// on drop). The stdout sink is only ever flushed.
pub enum OutputSink {
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
    Stdout(BufWriter<Stdout>),
}

impl OutputSink {
    /// Create or truncate `path`, or wrap stdout when no path is given
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let file = File::create(path).map_err(|source| OutputError::OpenError {
                    path: path.display().to_string(),
                    source,
                })?;
                debug!("Opened output file: {}", path.display());
                Ok(Self::File {
                    path: path.to_path_buf(),
                    writer: BufWriter::new(file),
                })
            }
            None => Ok(Self::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Self::Stdout(BufWriter::new(io::stdout()))
    }

    /// Human-readable destination for diagnostics
    pub fn describe(&self) -> String {
        match self {
            Self::File { path, .. } => path.display().to_string(),
            Self::Stdout(_) => "stdout".to_string(),
        }
    }

    /// Flush buffered output and release the sink.
    pub fn close(self) -> Result<()> {
        let destination = self.describe();
        let flushed = match self {
            Self::File { writer, .. } => writer
                .into_inner()
                .map(drop)
                .map_err(|e| e.into_error()),
            Self::Stdout(mut writer) => writer.flush(),
        };

        flushed.map_err(|source| OutputError::CloseError {
            destination,
            source,
        })?;
        debug!("Closed output sink");
        Ok(())
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File { writer, .. } => writer.write(buf),
            Self::Stdout(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File { writer, .. } => writer.flush(),
            Self::Stdout(writer) => writer.flush(),
        }
    }
}
