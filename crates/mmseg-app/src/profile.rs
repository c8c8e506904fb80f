use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use mmseg_config::Config;

/// Load a JSON config file, or the defaults when no path is given.
/// Environment overrides apply either way.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    let file = File::open(path).with_context(|| format!("failed to open config file {}", path.display()))?;
    let reader = BufReader::new(file);
    let config: Config = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse JSON from {}", path.display()))?;
    Ok(config.with_env())
}
