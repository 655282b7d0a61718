use std::io::Read;

use bolero::check;
use datagen::{CounterWidth, PatternGenerator};

#[test]
fn fuzz_reader_matches_fill() {
    check!()
        .with_type::<(bool, Vec<u8>)>()
        .for_each(|(wide, reads)| {
            let width = if *wide {
                CounterWidth::U64
            } else {
                CounterWidth::U16
            };
            let w = width.bytes();

            // =============================================================================
            // READER WITH ARBITRARY BUFFER SIZES
            // =============================================================================
            let source = PatternGenerator::counter(width);
            let mut reader = source.reader();
            let mut streamed = Vec::new();
            for len in reads.iter().map(|r| usize::from(*r)) {
                let mut buf = vec![0u8; len];
                match reader.read(&mut buf) {
                    Ok(n) => {
                        assert_eq!(n, len - len % w, "reader must return the aligned prefix");
                        streamed.extend_from_slice(&buf[..n]);
                    }
                    Err(_) => assert!(len < w, "only sub-unit reads may fail"),
                }
            }

            // =============================================================================
            // REFERENCE
            // =============================================================================
            let mut expected = vec![0u8; streamed.len()];
            PatternGenerator::counter(width).fill(&mut expected).unwrap();

            assert_eq!(streamed, expected);
        });
}
