//! The in-place censoring scan.

/// Byte written over a censored position.
pub const PLACEHOLDER: u8 = b'*';

/// Censors every byte of `fraction` that is strictly smaller than its
/// predecessor, in place, and returns how many positions were censored.
///
/// The previous-byte state seeds from `b'0'`, the lowest digit, so the
/// first byte can never be censored without a special case. Each comparison
/// uses the *original* predecessor byte, never the placeholder: a censored
/// run does not suppress legitimate increases relative to the last real
/// digit.
///
/// The intended domain is ASCII digits. Arbitrary bytes are censored by the
/// same ordinal rule, so feeding already-censored output back in gives a
/// different count (`'*'` sorts below every digit) and is unspecified.
pub fn censor_fraction(fraction: &mut [u8]) -> usize {
    let mut censored = 0usize;
    let mut previous = b'0';

    for slot in fraction.iter_mut() {
        let current = *slot;
        if current < previous {
            *slot = PLACEHOLDER;
            censored += 1;
        }
        previous = current;
    }

    censored
}
