//! `io::Read` adapter over a pattern generator.

use std::io::{self, Read};

use crate::generator::PatternGenerator;

/// Infinite reader that fills each request with the next pattern bytes.
///
/// Reads are truncated to a multiple of the generator's unit width; a
/// non-empty buffer shorter than one unit is an `InvalidInput` error.
#[derive(Debug, Clone, Copy)]
pub struct PatternReader<'a> {
    generator: &'a PatternGenerator,
}

impl<'a> PatternReader<'a> {
    /// Wrap `generator`.
    #[must_use]
    pub const fn new(generator: &'a PatternGenerator) -> Self {
        Self { generator }
    }
}

impl Read for PatternReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let aligned = buf.len() - buf.len() % self.generator.unit_width();
        let target = if aligned == 0 { &mut buf[..] } else { &mut buf[..aligned] };

        self.generator
            .fill(target)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }
}
