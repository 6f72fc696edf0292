#![no_main]

use libfuzzer_sys::fuzz_target;
use picensor::{PLACEHOLDER, censor_fraction};

/// The contract restated naively: count strictly-descending steps, seeding
/// from b'0' and always comparing against the original byte.
fn reference_count(fraction: &[u8]) -> usize {
    let mut previous = b'0';
    let mut count = 0;
    for &b in fraction {
        if b < previous {
            count += 1;
        }
        previous = b;
    }
    count
}

// Differential check of the in-place scan against the naive reference on
// arbitrary bytes, not just digits.
fuzz_target!(|fraction: Vec<u8>| {
    let mut scanned = fraction.clone();
    let count = censor_fraction(&mut scanned);

    assert_eq!(scanned.len(), fraction.len());
    assert!(count <= fraction.len());
    assert_eq!(count, reference_count(&fraction));

    for (&now, &was) in scanned.iter().zip(&fraction) {
        if now != was {
            assert_eq!(now, PLACEHOLDER);
        }
    }
});
