//! Generate Command
//!
//! Resolve a request, open the sink and stream the pattern into it.

use anyhow::{Context, Result};
use datagen::{CopyError, GeneratorRegistry, StreamCopier};
use std::path::PathBuf;

use super::output::Output;

// =============================================================================
// REQUEST
// =============================================================================

/// Fully parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Registry key; `None` selects the default pattern.
    pub pattern_key: Option<String>,
    /// Output file; `None` writes to stdout.
    pub destination: Option<PathBuf>,
    /// Exact number of bytes to emit.
    pub size_bytes: u64,
}

// =============================================================================
// GENERATE
// =============================================================================

/// Write `request.size_bytes` of the selected pattern to the destination.
///
/// Every configuration error is reported before the output is created.
pub fn generate(request: &Request, registry: &GeneratorRegistry, copier: StreamCopier) -> Result<()> {
    let generator = registry
        .select(request.pattern_key.as_deref())
        .context("Invalid --data option")?;

    let unit = generator.unit_width();
    if request.size_bytes % unit as u64 != 0 {
        return Err(CopyError::MisalignedTotal {
            width: unit,
            total: request.size_bytes,
        }
        .into());
    }

    let mut output = Output::open(request.destination.as_deref())?;
    tracing::info!(
        pattern = generator.name(),
        size = request.size_bytes,
        destination = %output,
        "generating"
    );

    copier
        .copy(generator, &mut output, request.size_bytes)
        .with_context(|| format!("Failed to write {}", output))?;

    output.finish()
}
