//! Size Constants
//!
//! Binary size units and the limits shared by the copier and the size parser.

// =============================================================================
// UNITS
// =============================================================================

/// One kibibyte.
pub const KB: u64 = 1024;

/// One mebibyte.
pub const MB: u64 = KB * 1024;

/// One gibibyte.
pub const GB: u64 = MB * 1024;

// =============================================================================
// LIMITS
// =============================================================================

/// Largest number of bytes a single request may emit (1 GiB).
pub const MAX_OUTPUT_SIZE: u64 = GB;

/// Default working buffer of the stream copier: 64 KB.
///
/// A multiple of every counter width, so whole chunks never split a unit.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Key of the registry entry used when no pattern is requested.
pub const DEFAULT_PATTERN_KEY: &str = "0";
