pub mod config;
pub mod quantize;
pub mod thresh;

use anyhow::{Context, Result};

/// Parse a comma-separated list of 8-bit gray levels, e.g. "50,120,200".
pub fn parse_levels(list: &str, what: &str) -> Result<Vec<u8>> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse::<u8>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid {what} list '{list}' (expected comma-separated 0-255 values)"))
}
