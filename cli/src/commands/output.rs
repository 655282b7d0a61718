//! Output Sink
//!
//! Stdout or a freshly created file, both buffered.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::{is_separator, Path, PathBuf};

/// Destination of the generated bytes.
pub enum Output {
    Stdout(BufWriter<StdoutLock<'static>>),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl Output {
    /// Open `path`, creating parent directories, or lock stdout when `None`.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Stdout(BufWriter::new(io::stdout().lock())));
        };

        validate_file_name(path)?;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directories \"{}\"", dir.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create a file \"{}\"", path.display()))?;

        Ok(Self::File {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Flush buffered bytes and release the sink.
    pub fn finish(self) -> Result<()> {
        match self {
            Self::Stdout(mut writer) => writer.flush().context("Failed to flush stdout"),
            Self::File { path, writer } => {
                let file = writer
                    .into_inner()
                    .map_err(io::IntoInnerError::into_error)
                    .with_context(|| format!("Failed to flush \"{}\"", path.display()))?;
                drop(file);
                tracing::debug!(path = %path.display(), "closed output file");
                Ok(())
            }
        }
    }
}

/// Reject paths without a file-name component (`""`, `dir/`, `..`).
fn validate_file_name(path: &Path) -> Result<()> {
    let ends_with_separator = path
        .as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| is_separator(char::from(b)));

    if ends_with_separator || path.file_name().is_none() {
        bail!("Invalid file name \"{}\"", path.display());
    }
    Ok(())
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(writer) => writer.write(buf),
            Self::File { writer, .. } => writer.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout(writer) => writer.write_all(buf),
            Self::File { writer, .. } => writer.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(writer) => writer.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout(_) => f.write_str("stdout"),
            Self::File { path, .. } => write!(f, "\"{}\"", path.display()),
        }
    }
}
