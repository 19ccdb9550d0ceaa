//! Configuration loading for the CLI.

use std::path::Path;

use anyhow::Context as _;

use stencil_engine::{MemoryConfig, WORKING_DIR_KEY};

/// Build the engine configuration from an optional TOML file plus the
/// working-directory override.
///
/// Tables flatten into dotted keys, so `working_dir = "/srv/work"`
/// under `[engine]` lands as `engine.working_dir`. Non-string scalars
/// keep their TOML text form. `--working-dir` wins over the file.
pub fn load(file: Option<&Path>, working_dir: Option<&Path>) -> anyhow::Result<MemoryConfig> {
    let mut config = MemoryConfig::new();

    if let Some(path) = file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let table: toml::Table = raw
            .parse()
            .with_context(|| format!("parsing config file {}", path.display()))?;
        flatten_into(&mut config, "", &table);
    }

    if let Some(dir) = working_dir {
        config.set(WORKING_DIR_KEY, dir.to_string_lossy());
    }
    Ok(config)
}

fn flatten_into(config: &mut MemoryConfig, prefix: &str, table: &toml::Table) {
    for (key, value) in table {
        let key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(nested) => flatten_into(config, &key, nested),
            toml::Value::String(text) => config.set(key, text.as_str()),
            other => config.set(key, other.to_string()),
        }
    }
}
