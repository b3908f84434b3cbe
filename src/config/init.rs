use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use super::{ensure_parent_dir, Config};
use crate::scoring::ScoringConfig;

const HEADER: &str = "\
# esg-score configuration
#
# Every indicator has a weight; weights within a pillar must sum to 1.0,
# as must the three pillar weights. Scaled indicators also need a ceiling:
# the raw value at which the score saturates (100 for higher-is-better,
# 0 for lower-is-better); an override that leaves `ceiling` out keeps the
# built-in one. Bands are checked top-down, first `min` <= score wins, and
# the last band must start at 0.

";

/// Write the built-in scoring table to `path` as a commented YAML file.
///
/// Refuses to replace an existing file unless `force` is set. The write is
/// atomic, so an interrupted run never leaves a half-written config behind.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    ensure_parent_dir(path)?;

    let config = Config {
        scoring: Some(ScoringConfig::default()),
    };
    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(HEADER.as_bytes())
        .context("Failed to write config")?;
    file.write_all(yaml.as_bytes())
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    Ok(())
}
