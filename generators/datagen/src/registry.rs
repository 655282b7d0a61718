//! Generator Registry
//!
//! Static catalog mapping short selector keys to generators. Entry order is
//! the order of the help listing.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::constants::DEFAULT_PATTERN_KEY;
use crate::counter::CounterWidth;
use crate::generator::PatternGenerator;
use crate::random::RandomSource;
use crate::types::RegistryError;

// =============================================================================
// ENTRY
// =============================================================================

/// One selectable pattern.
#[derive(Debug)]
pub struct RegistryEntry {
    /// Selector passed on the command line.
    pub key: &'static str,
    /// Help text, may span several lines.
    pub description: &'static str,
    /// Generator returned for `key`.
    pub generator: PatternGenerator,
}

impl RegistryEntry {
    /// Bundle a key, its description and its generator.
    #[must_use]
    pub const fn new(
        key: &'static str,
        description: &'static str,
        generator: PatternGenerator,
    ) -> Self {
        Self {
            key,
            description,
            generator,
        }
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Immutable, key-unique list of generators.
#[derive(Debug)]
pub struct GeneratorRegistry {
    entries: Vec<RegistryEntry>,
}

impl GeneratorRegistry {
    /// Build a registry from `entries`, keeping their order.
    ///
    /// # Errors
    /// [`RegistryError::DuplicateKey`] if a key repeats,
    /// [`RegistryError::MissingDefault`] if no entry uses the default key.
    pub fn new(entries: Vec<RegistryEntry>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.key) {
                return Err(RegistryError::DuplicateKey(entry.key));
            }
        }
        if !seen.contains(DEFAULT_PATTERN_KEY) {
            return Err(RegistryError::MissingDefault);
        }
        Ok(Self { entries })
    }

    /// The built-in patterns. All random entries share `random`.
    #[must_use]
    pub fn standard(random: &RandomSource) -> Self {
        Self {
            entries: vec![
                RegistryEntry::new("0", "Fill with 0x00.", PatternGenerator::zeros()),
                RegistryEntry::new("f", "Fill with 0xFF.", PatternGenerator::ones()),
                RegistryEntry::new(
                    "r",
                    "Fill with random bytes.",
                    PatternGenerator::RandomBytes(random.clone()),
                ),
                RegistryEntry::new(
                    "ra",
                    "Fill with random alphabet characters [A-Za-z].",
                    PatternGenerator::RandomAlphabetic(random.clone()),
                ),
                RegistryEntry::new(
                    "ran",
                    "Fill with random upper-case alphabet and numeric characters [0-9A-Z].",
                    PatternGenerator::RandomAlphanumericUpper(random.clone()),
                ),
                RegistryEntry::new(
                    "ctr",
                    "Fill with bytes increasing from 0x00 to 0xFF. After 0xFF it goes back to 0x00.",
                    PatternGenerator::counter(CounterWidth::U8),
                ),
                RegistryEntry::new(
                    "ctr2",
                    "Fill with uint16 (big-endian) increasing from 0x0000 to 0xFFFF.\n\
                     After 0xFFFF, the value starts from 0x0000 again.\n\
                     The size must be a multiple of 2.",
                    PatternGenerator::counter(CounterWidth::U16),
                ),
                RegistryEntry::new(
                    "ctr4",
                    "Fill with uint32 (big-endian) increasing from 0x00000000 to 0xFFFFFFFF.\n\
                     After 0xFFFFFFFF, the value starts from 0x00000000 again.\n\
                     The size must be a multiple of 4.",
                    PatternGenerator::counter(CounterWidth::U32),
                ),
                RegistryEntry::new(
                    "ctr8",
                    "Fill with uint64 (big-endian) increasing from 0x0000000000000000 to 0xFFFFFFFFFFFFFFFF.\n\
                     After 0xFFFFFFFFFFFFFFFF, the value starts from 0x0000000000000000 again.\n\
                     The size must be a multiple of 8.",
                    PatternGenerator::counter(CounterWidth::U64),
                ),
            ],
        }
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&PatternGenerator> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.generator)
    }

    /// The constant-zero generator registered under the default key.
    #[must_use]
    pub fn default_generator(&self) -> &PatternGenerator {
        // Both constructors guarantee the default key is present.
        self.entries
            .iter()
            .find(|entry| entry.key == DEFAULT_PATTERN_KEY)
            .map_or(&DEFAULT_GENERATOR, |entry| &entry.generator)
    }

    /// Resolve an optional user choice; `None` selects the default.
    ///
    /// # Errors
    /// [`RegistryError::UnknownKey`] if `key` matches no entry.
    pub fn select(&self, key: Option<&str>) -> Result<&PatternGenerator, RegistryError> {
        match key {
            None => Ok(self.default_generator()),
            Some(key) => self
                .resolve(key)
                .ok_or_else(|| RegistryError::UnknownKey(key.to_owned())),
        }
    }

    // =========================================================================
    // LISTING
    // =========================================================================

    /// `(key, description)` pairs in registration order.
    pub fn list(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|entry| (entry.key, entry.description))
    }

    /// One tab-indented line per entry, continuation lines aligned under the
    /// description.
    #[must_use]
    pub fn help_text(&self) -> String {
        let mut out = String::new();
        for (key, description) in self.list() {
            let mut lines = description.lines();
            let first = lines.next().unwrap_or_default();
            let _ = writeln!(out, "\t{key:<4} : {first}");
            for line in lines {
                let _ = writeln!(out, "\t{:<4}   {}", "", line.trim_start());
            }
        }
        out
    }
}

static DEFAULT_GENERATOR: PatternGenerator = PatternGenerator::zeros();
