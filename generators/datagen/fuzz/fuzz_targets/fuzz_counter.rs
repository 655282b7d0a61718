#![no_main]

use datagen::{CounterWidth, PatternGenerator, StreamCopier};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Width from the first byte
    let width = match data[0] % 4 {
        0 => CounterWidth::U8,
        1 => CounterWidth::U16,
        2 => CounterWidth::U32,
        _ => CounterWidth::U64,
    };
    let w = width.bytes();

    // Chunk size from the second byte (1 to 255), unit count from the rest
    let chunk_size = (data[1] as usize % 255) + 1;
    let total = w * data[2..].len() * 8;

    // Reference: one fill of the whole length
    let mut reference = vec![0u8; total];
    PatternGenerator::counter(width).fill(&mut reference).unwrap();

    // Copier output with the fuzzed chunk size
    let generator = PatternGenerator::counter(width);
    let mut out = Vec::with_capacity(total);
    StreamCopier::new(chunk_size)
        .unwrap()
        .copy(&generator, &mut out, total as u64)
        .unwrap();

    // They must be identical
    assert_eq!(reference, out, "Chunked and single-fill counters differ!");
});
