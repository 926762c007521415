//! Suite configuration

use serde::{Deserialize, Serialize};

/// Tuning knobs for the conformance suite
///
/// The defaults match the behavioral contract and are what
/// [`run_all`](crate::run_all) uses; hosts only reach for this when a
/// backend needs longer keys (e.g. to exercise prefix handling) or a larger
/// key population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Length of the randomly generated key used by each case
    #[serde(default = "default_key_len")]
    pub key_len: usize,

    /// Number of entries the `keys()` case inserts before listing
    #[serde(default = "default_keys_case_entries")]
    pub keys_case_entries: usize,
}

fn default_key_len() -> usize {
    20
}

fn default_keys_case_entries() -> usize {
    10
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            key_len: default_key_len(),
            keys_case_entries: default_keys_case_entries(),
        }
    }
}

impl SuiteConfig {
    /// Builder-style: set the generated key length
    #[must_use]
    pub fn with_key_len(mut self, key_len: usize) -> Self {
        self.key_len = key_len;
        self
    }

    /// Builder-style: set the number of entries for the `keys()` case
    #[must_use]
    pub fn with_keys_case_entries(mut self, entries: usize) -> Self {
        self.keys_case_entries = entries;
        self
    }
}
