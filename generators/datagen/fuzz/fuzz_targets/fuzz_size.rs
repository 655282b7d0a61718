#![no_main]

use datagen::{parse_size, SizeError, MAX_OUTPUT_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(literal) = std::str::from_utf8(data) else {
        return;
    };

    match parse_size(literal) {
        Ok(size) => assert!(size <= MAX_OUTPUT_SIZE, "accepted {size} from {literal:?}"),
        Err(SizeError::TooLarge { size }) => assert!(size > MAX_OUTPUT_SIZE),
        Err(SizeError::Invalid(echo)) => assert_eq!(echo, literal),
    }
});
