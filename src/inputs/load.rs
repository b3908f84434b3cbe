use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use super::types::Disclosure;

/// Read a disclosure document from a file, or from stdin when `source` is `-`.
///
/// `.json` files are parsed as JSON; everything else (including stdin) as
/// YAML, which also accepts plain JSON documents.
pub fn load_disclosure(source: &str) -> Result<Disclosure> {
    if source == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read disclosure from stdin")?;
        return parse_disclosure(&content, false).context("Failed to parse disclosure from stdin");
    }

    let path = Path::new(source);
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read disclosure at {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse_disclosure(&content, is_json)
        .with_context(|| format!("Failed to parse disclosure in {}", path.display()))
}

pub fn parse_disclosure(content: &str, is_json: bool) -> Result<Disclosure> {
    let disclosure = if is_json {
        serde_json::from_str(content)?
    } else {
        serde_saphyr::from_str(content)?
    };
    Ok(disclosure)
}
