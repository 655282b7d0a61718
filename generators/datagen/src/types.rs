//! Shared types used across the datagen library.

use std::io;
use thiserror::Error;

use crate::constants::{GB, MAX_OUTPUT_SIZE};

// =============================================================================
// FILL ERRORS
// =============================================================================

/// Error returned by [`PatternGenerator::fill`](crate::PatternGenerator::fill).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FillError {
    /// A counter generator was handed a buffer that would split a unit.
    #[error("buffer length {got} is not a multiple of the counter width {width}")]
    MisalignedLength {
        /// Counter width in bytes.
        width: usize,
        /// Length of the rejected buffer.
        got: usize,
    },
}

// =============================================================================
// COPY ERRORS
// =============================================================================

/// Error returned by [`StreamCopier::copy`](crate::StreamCopier::copy).
#[derive(Debug, Error)]
pub enum CopyError {
    /// The request exceeds [`MAX_OUTPUT_SIZE`].
    #[error("{requested} bytes is too large, the maximum output size is {max} bytes", max = MAX_OUTPUT_SIZE)]
    SizeLimit {
        /// Requested byte count.
        requested: u64,
    },

    /// The request cannot be split into whole units of the generator.
    #[error("size {total} is not a multiple of {width}, the unit width of the selected pattern")]
    MisalignedTotal {
        /// Unit width of the generator.
        width: usize,
        /// Requested byte count.
        total: u64,
    },

    /// A zero-sized working buffer was configured.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// The generator rejected a fill.
    #[error(transparent)]
    Fill(#[from] FillError),

    /// Writing to or flushing the sink failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Error raised while building or querying a [`GeneratorRegistry`](crate::GeneratorRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No entry carries the requested key.
    #[error("unknown pattern '{0}'")]
    UnknownKey(String),

    /// Two entries share a key.
    #[error("pattern key '{0}' is registered more than once")]
    DuplicateKey(&'static str),

    /// The registry has no entry for the default key.
    #[error("no pattern is registered under the default key '{}'", crate::constants::DEFAULT_PATTERN_KEY)]
    MissingDefault,
}

// =============================================================================
// SIZE ERRORS
// =============================================================================

/// Error returned by [`parse_size`](crate::parse_size).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    /// The literal is not a non-negative decimal or `0x` hexadecimal integer.
    #[error("'{0}' is invalid as a size argument")]
    Invalid(String),

    /// The literal parses but exceeds [`MAX_OUTPUT_SIZE`].
    #[error(
        "{size} bytes ({:.2}GB) is too large, the maximum size is {max} bytes ({:.2}GB)",
        gib(.size),
        gib(&MAX_OUTPUT_SIZE),
        max = MAX_OUTPUT_SIZE
    )]
    TooLarge {
        /// Parsed size, saturated at `u64::MAX` on overflow.
        size: u64,
    },
}

#[allow(clippy::cast_precision_loss, clippy::trivially_copy_pass_by_ref)]
fn gib(bytes: &u64) -> f64 {
    *bytes as f64 / GB as f64
}
