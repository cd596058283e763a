//! Static launcher configuration read from a single JSON map file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use launcher_host::ConfigSource;
use tauri::Manager;

type ConfigMap = BTreeMap<String, String>;

fn config_file(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let dir = app
        .path()
        .app_config_dir()
        .map_err(|err| format!("failed to resolve app config dir: {err}"))?;
    fs::create_dir_all(&dir).map_err(|err| format!("failed to create config dir: {err}"))?;
    Ok(dir.join("launcher.json"))
}

fn load_config_map(path: &Path) -> Result<ConfigMap, String> {
    if !path.exists() {
        return Ok(ConfigMap::new());
    }
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(ConfigMap::new());
    }
    serde_json::from_str(&raw)
        .map_err(|err| format!("failed to parse config map {}: {err}", path.display()))
}

#[derive(Debug, Clone, Default)]
/// Launcher configuration source backed by a single JSON map file.
///
/// The file is read once at construction; the bridge consults configuration
/// only during initialization, so later file edits are invisible until the
/// next process start.
pub(crate) struct ScopedConfigSource {
    entries: ConfigMap,
}

impl ScopedConfigSource {
    /// Creates a config source from the map file under `root`.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, String> {
        let root = root.as_ref();
        Self::from_file(&root.join("launcher.json"))
    }

    /// Creates a config source for the shell's app config directory.
    pub fn from_app(app: &tauri::AppHandle) -> Result<Self, String> {
        Self::from_file(&config_file(app)?)
    }

    fn from_file(path: &Path) -> Result<Self, String> {
        Ok(Self {
            entries: load_config_map(path)?,
        })
    }
}

impl ConfigSource for ScopedConfigSource {
    fn get_value(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
