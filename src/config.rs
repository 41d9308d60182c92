// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Run configuration, read from JSON with every field optional.
//!
//! ```json
//! { "algorithm": "introsort", "pivot": "random", "interval_ms": 5, "len": 64, "seed": 7 }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;
use crate::sort::Algorithm;
use crate::sort::PivotStrategy;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub algorithm: Algorithm,
    /// Ignored unless the algorithm needs a pivot.
    pub pivot: PivotStrategy,
    /// Time between ticks.
    pub interval_ms: u64,
    /// Number of values to sort.
    pub len: usize,
    /// Seed for the shuffled input and random pivots. Random if unset.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            algorithm: Algorithm::Quicksort,
            pivot: PivotStrategy::Median3,
            interval_ms: 20,
            len: 32,
            seed: None,
        };
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Config> {
        return Ok(serde_json::from_str(text)?);
    }

    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)?;
        return Config::from_json(&text);
    }

    pub fn interval(&self) -> Duration {
        return Duration::from_millis(self.interval_ms);
    }

    /// Reject settings that could never run, before anything is built.
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(Error::invalid("interval_ms must be at least 1"));
        }
        return self.algorithm.check_len(self.len);
    }
}
