//! Config struct definition and default implementation.

use serde::Deserialize;
use std::collections::BTreeMap;

/// File looked up in the current directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".tmplfill.yaml";

/// Configuration for template filling.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output path used when none is given on the command line.
    #[serde(default = "default_output")]
    pub default_output: String,

    /// Values applied before prompting; `--set` overrides these.
    #[serde(default)]
    pub values: BTreeMap<String, String>,

    /// Render datetime arguments in UTC instead of local time.
    #[serde(default)]
    pub use_utc: bool,
}

fn default_output() -> String {
    "output.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_output: default_output(),
            values: BTreeMap::new(),
            use_utc: false,
        }
    }
}
