use bolero::check;
use datagen::{CounterWidth, PatternGenerator, StreamCopier};

const WIDTHS: [CounterWidth; 4] = [
    CounterWidth::U8,
    CounterWidth::U16,
    CounterWidth::U32,
    CounterWidth::U64,
];

#[test]
fn fuzz_counter_chunking_invariance() {
    check!()
        .with_type::<(u8, u16, Vec<u8>)>()
        .for_each(|(selector, units, splits)| {
            let width = WIDTHS[*selector as usize % WIDTHS.len()];
            let w = width.bytes();
            let units = usize::from(*units % 4096);
            let total = w * units;

            // =============================================================================
            // BASELINE (ONE FILL)
            // =============================================================================
            let mut expected = vec![0u8; total];
            PatternGenerator::counter(width).fill(&mut expected).unwrap();

            // =============================================================================
            // ARBITRARY SPLITS
            // =============================================================================
            let generator = PatternGenerator::counter(width);
            let mut actual = Vec::with_capacity(total);
            let mut remaining = units;
            for split in splits.iter().map(|s| usize::from(*s)) {
                if remaining == 0 {
                    break;
                }
                let take = split.min(remaining);
                let mut part = vec![0u8; take * w];
                generator.fill(&mut part).unwrap();
                actual.extend_from_slice(&part);
                remaining -= take;
            }
            let mut tail = vec![0u8; remaining * w];
            generator.fill(&mut tail).unwrap();
            actual.extend_from_slice(&tail);

            assert_eq!(actual, expected, "split fills diverged at width {w}");

            // =============================================================================
            // COPIER WITH ARBITRARY CHUNK
            // =============================================================================
            let chunk = splits.first().map_or(1, |s| usize::from(*s).max(1));
            let copied = PatternGenerator::counter(width);
            let mut out = Vec::new();
            StreamCopier::new(chunk)
                .unwrap()
                .copy(&copied, &mut out, total as u64)
                .unwrap();

            assert_eq!(out, expected, "copier chunk {chunk} diverged at width {w}");
        });
}

#[test]
fn fuzz_misaligned_fill_is_atomic() {
    check!()
        .with_type::<(u8, u8, u8)>()
        .for_each(|(selector, warmup, len)| {
            let width = WIDTHS[1 + *selector as usize % 3];
            let w = width.bytes();
            let len = usize::from(*len);
            if len % w == 0 {
                return;
            }

            let generator = PatternGenerator::counter(width);
            let mut warm = vec![0u8; usize::from(*warmup) * w];
            generator.fill(&mut warm).unwrap();

            let mut bad = vec![0u8; len];
            assert!(generator.fill(&mut bad).is_err());

            let mut next = vec![0u8; w];
            generator.fill(&mut next).unwrap();
            let mut be = [0u8; 8];
            be[8 - w..].copy_from_slice(&next);
            assert_eq!(u64::from_be_bytes(be), u64::from(*warmup));
        });
}
