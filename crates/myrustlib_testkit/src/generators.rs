//! Property-based test generators using proptest.

use proptest::prelude::*;

/// Strategy for UTF-8 names that can cross the C boundary: any text
/// without NUL, including empty, blank and multi-kilobyte strings.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[^\\x00]{0,64}").expect("Invalid regex"),
        blank_strategy(),
        (1025usize..4096).prop_map(|len| "x".repeat(len)),
    ]
}

/// Strategy for raw C string contents: arbitrary NUL-free bytes, which
/// need not be UTF-8.
pub fn c_name_bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(1u8..=255, 0..64),
        prop::collection::vec(1u8..=255, 1024..4096),
    ]
}

/// Strategy for whitespace-only input.
pub fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\r\n]{0,16}").expect("Invalid regex")
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self { cases: 256 }
    }
}

impl PropTestConfig {
    /// Creates a config for quick tests.
    pub fn quick() -> Self {
        Self { cases: 32 }
    }

    /// Converts to proptest config.
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig::with_cases(self.cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn names_are_nul_free(name in name_strategy()) {
            prop_assert!(!name.contains('\0'));
        }

        #[test]
        fn name_bytes_are_nul_free(bytes in c_name_bytes_strategy()) {
            prop_assert!(!bytes.contains(&0));
        }

        #[test]
        fn blanks_trim_to_empty(blank in blank_strategy()) {
            prop_assert!(blank.trim().is_empty());
        }
    }
}
