use std::path::PathBuf;

use triage_store::config::StoreConfig;

/// Overrides the default config location.
const CONFIG_PATH_VAR: &str = "TRIAGE_CONFIG";

fn config_path() -> eyre::Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("triage").join("config.json"))
}

/// Config file if present, defaults otherwise, then `TRIAGE_*` overrides.
pub fn load_config() -> eyre::Result<StoreConfig> {
    let path = config_path()?;
    let config = if path.exists() {
        StoreConfig::load(&path)
            .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?
    } else {
        StoreConfig::default()
    };
    Ok(config.apply_env()?)
}
