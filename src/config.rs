use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_MODULUS: u64 = 100003;

/// Settings for one count computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    /// Every cached value and partial sum is reduced modulo this number.
    pub modulus: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { modulus: DEFAULT_MODULUS }
    }
}

impl CounterConfig {
    /// Load a JSON config such as `{"modulus": 1000000007}`. Missing fields keep
    /// their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
