use quickcheck_macros::quickcheck;

use super::censor_to_string;
use crate::{PLACEHOLDER, censor_fraction};

/// The contract restated naively: count strictly-descending steps, seeding
/// from `b'0'` and always comparing against the original byte.
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

fn digits(raw: &[u8]) -> Vec<u8> {
    raw.iter().map(|b| b'0' + b % 10).collect()
}

#[quickcheck]
fn count_matches_reference(raw: Vec<u8>) -> bool {
    let fraction = digits(&raw);
    let mut scanned = fraction.clone();
    censor_fraction(&mut scanned) == reference_count(&fraction)
}

#[quickcheck]
fn count_is_bounded_by_fraction_length(raw: Vec<u8>) -> bool {
    let mut fraction = digits(&raw);
    let len = fraction.len();
    censor_fraction(&mut fraction) <= len
}

#[quickcheck]
fn only_censored_positions_change(raw: Vec<u8>) -> bool {
    let fraction = digits(&raw);
    let mut scanned = fraction.clone();
    let count = censor_fraction(&mut scanned);

    let mut changed = 0;
    for (&now, &was) in scanned.iter().zip(&fraction) {
        if now != was {
            if now != PLACEHOLDER {
                return false;
            }
            changed += 1;
        }
    }
    changed == count
}

#[quickcheck]
fn first_fractional_digit_survives(raw: Vec<u8>) -> bool {
    let fraction = digits(&raw);
    let mut scanned = fraction.clone();
    censor_fraction(&mut scanned);
    scanned.first() == fraction.first()
}

#[quickcheck]
fn output_length_equals_input_length(raw: Vec<u8>) -> bool {
    let fraction = digits(&raw);
    let numeral = format!("3.{}", std::str::from_utf8(&fraction).expect("digits"));
    let (text, _) = censor_to_string(&numeral).expect("valid numeral");
    text.len() == numeral.len()
}
