//! Environment-driven settings for the demo run.

use anyhow::{Context, bail};

pub const CHUNK_SIZE_VAR: &str = "VALUEKIT_CHUNK_SIZE";
pub const DEFAULT_CHUNK_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    pub chunk_size: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let Some(raw) = lookup(CHUNK_SIZE_VAR) else {
            return Ok(Self::default());
        };

        let chunk_size: usize = raw
            .trim()
            .parse()
            .with_context(|| format!("{CHUNK_SIZE_VAR} must be a positive integer, got {raw:?}"))?;
        if chunk_size == 0 {
            bail!("{CHUNK_SIZE_VAR} must be greater than zero");
        }
        Ok(Self { chunk_size })
    }
}
