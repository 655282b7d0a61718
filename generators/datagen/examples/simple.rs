//! Datagen Basic Example
//!
//! Minimal usage: pick a pattern by key and stream a few bytes of it.

#![allow(clippy::pedantic, clippy::nursery)]

use datagen::{GeneratorRegistry, RandomSource, StreamCopier};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = GeneratorRegistry::standard(&RandomSource::from_os_rng());

    for key in ["0", "f", "ra", "ran", "ctr", "ctr2", "ctr4", "ctr8"] {
        let mut out = Vec::new();
        StreamCopier::default().copy(registry.select(Some(key))?, &mut out, 16)?;
        println!("{key:<4}: {}", hex::encode(&out));
    }

    Ok(())
}
