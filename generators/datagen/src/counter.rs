//! Wrapping Counter State
//!
//! A big-endian counter of 1, 2, 4 or 8 bytes guarded by a single mutex.
//! Every fill holds the lock for its whole duration, so concurrent fills on
//! one instance each receive a contiguous run of values.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::FillError;

// =============================================================================
// COUNTER WIDTH
// =============================================================================

/// Encoded size of one counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CounterWidth {
    /// `u8`, wraps after `0xFF`.
    U8 = 1,
    /// `u16`, wraps after `0xFFFF`.
    U16 = 2,
    /// `u32`, wraps after `0xFFFF_FFFF`.
    U32 = 4,
    /// `u64`, wraps after `0xFFFF_FFFF_FFFF_FFFF`.
    U64 = 8,
}

impl CounterWidth {
    /// Number of bytes per encoded value.
    #[must_use]
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// Largest value representable at this width.
    #[must_use]
    pub const fn max_value(self) -> u64 {
        match self {
            Self::U8 => u8::MAX as u64,
            Self::U16 => u16::MAX as u64,
            Self::U32 => u32::MAX as u64,
            Self::U64 => u64::MAX,
        }
    }
}

impl TryFrom<usize> for CounterWidth {
    type Error = usize;

    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        match bytes {
            1 => Ok(Self::U8),
            2 => Ok(Self::U16),
            4 => Ok(Self::U32),
            8 => Ok(Self::U64),
            other => Err(other),
        }
    }
}

// =============================================================================
// COUNTER STATE
// =============================================================================

/// Mutex-guarded wrapping counter.
///
/// The value is only reachable through [`fill`](Self::fill),
/// [`reset`](Self::reset) and the [`current`](Self::current) snapshot.
#[derive(Debug)]
pub struct CounterState {
    width: CounterWidth,
    /// Next value to emit, always `<= width.max_value()`.
    value: Mutex<u64>,
}

impl CounterState {
    /// Create a counter starting at 0.
    #[must_use]
    pub const fn new(width: CounterWidth) -> Self {
        Self {
            width,
            value: Mutex::new(0),
        }
    }

    /// Width of each encoded value.
    #[must_use]
    pub const fn width(&self) -> CounterWidth {
        self.width
    }

    /// Next value that a fill would emit.
    pub fn current(&self) -> u64 {
        *self.lock()
    }

    /// Encode consecutive values into `buf`, one per `width` bytes.
    ///
    /// # Errors
    /// Returns [`FillError::MisalignedLength`] if `buf.len()` is not a multiple
    /// of the width. The counter is left untouched in that case.
    pub fn fill(&self, buf: &mut [u8]) -> Result<usize, FillError> {
        let width = self.width.bytes();
        if buf.len() % width != 0 {
            return Err(FillError::MisalignedLength {
                width,
                got: buf.len(),
            });
        }

        let mask = self.width.max_value();
        let mut value = self.lock();

        for unit in buf.chunks_exact_mut(width) {
            unit.copy_from_slice(&value.to_be_bytes()[8 - width..]);
            *value = value.wrapping_add(1) & mask;
        }

        Ok(buf.len())
    }

    /// Rewind to 0. The next fill starts a fresh sequence.
    pub fn reset(&self) {
        *self.lock() = 0;
        tracing::trace!(width = self.width.bytes(), "counter reset");
    }

    // Poisoning is ignored: the value is written in one store per unit, so a
    // panicking holder cannot leave it out of range.
    fn lock(&self) -> MutexGuard<'_, u64> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
