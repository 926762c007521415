//! Fixture helpers shared across the suite

use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Default length for generated names and values
pub const DEFAULT_STRING_LEN: usize = 8;

/// Generate a random lowercase ASCII string of `len` characters
pub fn random_string(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Assert that `actual` falls within the inclusive `[lower, upper]` window
///
/// Used by backend suites for timing-sensitive checks, e.g. asserting a TTL
/// observed through the store lands inside the expected window.
pub fn assert_between<T>(actual: T, lower: T, upper: T)
where
    T: PartialOrd + std::fmt::Debug,
{
    assert!(
        actual >= lower && actual <= upper,
        "expected value in [{lower:?}, {upper:?}], got {actual:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_string_has_requested_length_and_charset() {
        let s = random_string(20);
        assert_eq!(s.len(), 20);
        assert!(s.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn random_string_produces_distinct_values() {
        // 26^20 possibilities; a collision here means the generator is broken
        assert_ne!(random_string(20), random_string(20));
    }

    #[test]
    fn random_string_handles_zero_length() {
        assert_eq!(random_string(0), "");
    }

    #[test]
    fn assert_between_accepts_bounds() {
        assert_between(5, 5, 10);
        assert_between(10, 5, 10);
        assert_between(0.5, 0.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "expected value in")]
    fn assert_between_rejects_out_of_window() {
        assert_between(11, 5, 10);
    }
}
