//! Pattern Generators
//!
//! Closed set of byte producers behind a single `fill` entry point.
//! All variants are `Send + Sync`; stateful ones serialize through a mutex.

use crate::counter::{CounterState, CounterWidth};
use crate::random::RandomSource;
use crate::reader::PatternReader;
use crate::types::FillError;

/// `[A-Za-z]`
pub const ALPHABETIC: &[u8; 52] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// `[0-9A-Z]`
pub const ALPHANUMERIC_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// =============================================================================
// PATTERN GENERATOR
// =============================================================================

/// A source of synthetic bytes.
#[derive(Debug)]
pub enum PatternGenerator {
    /// Every byte equals the given value.
    Constant(u8),
    /// Bytes uniform over `0..=255`.
    RandomBytes(RandomSource),
    /// Bytes uniform over [`ALPHABETIC`].
    RandomAlphabetic(RandomSource),
    /// Bytes uniform over [`ALPHANUMERIC_UPPER`].
    RandomAlphanumericUpper(RandomSource),
    /// Big-endian wrapping counter.
    Counter(CounterState),
}

impl PatternGenerator {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// `0x00` fill.
    #[must_use]
    pub const fn zeros() -> Self {
        Self::Constant(0x00)
    }

    /// `0xFF` fill.
    #[must_use]
    pub const fn ones() -> Self {
        Self::Constant(0xFF)
    }

    /// Counter of the given width, starting at 0.
    #[must_use]
    pub const fn counter(width: CounterWidth) -> Self {
        Self::Counter(CounterState::new(width))
    }

    // =========================================================================
    // GENERATION
    // =========================================================================

    /// Overwrite all of `buf` with the next bytes of the pattern.
    ///
    /// Returns `buf.len()` on success; there are no short fills.
    ///
    /// # Errors
    /// Counter variants return [`FillError::MisalignedLength`] when
    /// `buf.len()` is not a multiple of [`unit_width`](Self::unit_width),
    /// without advancing the counter.
    pub fn fill(&self, buf: &mut [u8]) -> Result<usize, FillError> {
        match self {
            Self::Constant(value) => buf.fill(*value),
            Self::RandomBytes(rng) => rng.fill_bytes(buf),
            Self::RandomAlphabetic(rng) => rng.fill_from_alphabet(buf, ALPHABETIC),
            Self::RandomAlphanumericUpper(rng) => rng.fill_from_alphabet(buf, ALPHANUMERIC_UPPER),
            Self::Counter(state) => return state.fill(buf),
        }
        Ok(buf.len())
    }

    /// Rewind a counter to 0. No-op for stateless variants.
    pub fn reset(&self) {
        if let Self::Counter(state) = self {
            state.reset();
        }
    }

    /// Byte granularity every fill length must respect.
    #[must_use]
    pub const fn unit_width(&self) -> usize {
        match self {
            Self::Counter(state) => state.width().bytes(),
            _ => 1,
        }
    }

    /// Short name for log records.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Constant(0x00) => "zero",
            Self::Constant(0xFF) => "ones",
            Self::Constant(_) => "constant",
            Self::RandomBytes(_) => "random",
            Self::RandomAlphabetic(_) => "random-alphabetic",
            Self::RandomAlphanumericUpper(_) => "random-alphanumeric",
            Self::Counter(state) => match state.width() {
                CounterWidth::U8 => "counter8",
                CounterWidth::U16 => "counter16",
                CounterWidth::U32 => "counter32",
                CounterWidth::U64 => "counter64",
            },
        }
    }

    /// Endless [`std::io::Read`] view of this generator.
    #[must_use]
    pub const fn reader(&self) -> PatternReader<'_> {
        PatternReader::new(self)
    }
}
