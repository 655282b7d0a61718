//! # Datagen
//!
//! Synthetic byte streams: constant fills, random fills and wrapping
//! big-endian counters, written to any [`std::io::Write`] sink.

//! # Usage
//! ```rust
//! use datagen::{GeneratorRegistry, RandomSource, StreamCopier};
//!
//! // 1. Pick a pattern
//! let registry = GeneratorRegistry::standard(&RandomSource::from_os_rng());
//! let counter = registry.select(Some("ctr2"))?;
//!
//! // 2. Stream an exact number of bytes
//! let mut out = Vec::new();
//! StreamCopier::default().copy(counter, &mut out, 6)?;
//! assert_eq!(out, [0x00, 0x00, 0x00, 0x01, 0x00, 0x02]);
//!
//! // 3. Start over
//! counter.reset();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod constants;
mod copier;
mod counter;
mod generator;
mod random;
mod reader;
mod registry;
mod size;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use constants::{DEFAULT_CHUNK_SIZE, DEFAULT_PATTERN_KEY, MAX_OUTPUT_SIZE};
pub use copier::StreamCopier;
pub use counter::{CounterState, CounterWidth};
pub use generator::{PatternGenerator, ALPHABETIC, ALPHANUMERIC_UPPER};
pub use random::RandomSource;
pub use reader::PatternReader;
pub use registry::{GeneratorRegistry, RegistryEntry};
pub use size::parse_size;
pub use types::{CopyError, FillError, RegistryError, SizeError};
