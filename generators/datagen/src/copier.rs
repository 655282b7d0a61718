//! Stream Copier
//!
//! Pulls fixed-size chunks from a generator into a sink until exactly the
//! requested number of bytes has been written.

use std::io::Write;

use crate::constants::{DEFAULT_CHUNK_SIZE, MAX_OUTPUT_SIZE};
use crate::generator::PatternGenerator;
use crate::types::CopyError;

/// Bounded generator-to-sink pump with one reusable working buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamCopier {
    chunk_size: usize,
}

impl StreamCopier {
    /// Copier with a custom working-buffer size.
    ///
    /// # Errors
    /// [`CopyError::InvalidChunkSize`] if `chunk_size` is 0.
    pub fn new(chunk_size: usize) -> Result<Self, CopyError> {
        if chunk_size == 0 {
            return Err(CopyError::InvalidChunkSize);
        }
        Ok(Self { chunk_size })
    }

    /// Configured working-buffer size.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Chunk actually used for `generator`: rounded down to its unit width,
    /// never below one unit.
    #[must_use]
    pub const fn chunk_size_for(&self, generator: &PatternGenerator) -> usize {
        let unit = generator.unit_width();
        let aligned = self.chunk_size - self.chunk_size % unit;
        if aligned == 0 {
            unit
        } else {
            aligned
        }
    }

    /// Write exactly `total_bytes` of `generator` output into `sink`, then
    /// flush it.
    ///
    /// Size and alignment are validated before anything is written. Any fill
    /// or write error aborts the copy; bytes already written stay written.
    ///
    /// # Errors
    /// - [`CopyError::SizeLimit`] if `total_bytes` exceeds [`MAX_OUTPUT_SIZE`].
    /// - [`CopyError::MisalignedTotal`] if `total_bytes` is not a multiple of
    ///   the generator's unit width.
    /// - [`CopyError::Fill`] / [`CopyError::Io`] from the generator or sink.
    pub fn copy<W: Write + ?Sized>(
        &self,
        generator: &PatternGenerator,
        sink: &mut W,
        total_bytes: u64,
    ) -> Result<(), CopyError> {
        if total_bytes > MAX_OUTPUT_SIZE {
            return Err(CopyError::SizeLimit {
                requested: total_bytes,
            });
        }
        let unit = generator.unit_width();
        if total_bytes % unit as u64 != 0 {
            return Err(CopyError::MisalignedTotal {
                width: unit,
                total: total_bytes,
            });
        }

        let chunk_size = self.chunk_size_for(generator);
        tracing::debug!(
            pattern = generator.name(),
            total_bytes,
            chunk_size,
            "starting copy"
        );

        let mut buffer = vec![0u8; chunk_size];
        let mut written: u64 = 0;

        while written < total_bytes {
            let remaining = total_bytes - written;
            let len = usize::try_from(remaining).map_or(chunk_size, |r| r.min(chunk_size));
            let chunk = &mut buffer[..len];

            generator.fill(chunk)?;
            sink.write_all(chunk)?;

            written += len as u64;
            tracing::trace!(written, remaining = total_bytes - written, "chunk written");
        }

        sink.flush()?;
        tracing::debug!(pattern = generator.name(), written, "copy finished");

        Ok(())
    }
}

impl Default for StreamCopier {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
