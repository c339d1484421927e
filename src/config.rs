use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) notes_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) tasks_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) files_script: Option<PathBuf>,
    #[serde(default)]
    pub(crate) content_script: Option<PathBuf>,
}

/// Outcome of the config search. Logging is not set up yet when this runs,
/// so what happened is recorded here and reported afterwards.
#[derive(Debug, Default)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) path: Option<PathBuf>,
    pub(crate) skipped: Vec<(PathBuf, String)>,
}

impl Config {
    pub(crate) fn load() -> LoadedConfig {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(config_paths: &[PathBuf]) -> LoadedConfig {
        let mut loaded = LoadedConfig::default();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        loaded.config = config;
                        loaded.path = Some(path.clone());
                        return loaded;
                    }
                    Err(e) => loaded.skipped.push((path.clone(), e.to_string())),
                }
            }
        }

        loaded
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/noter/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("noter").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/noter/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("noter").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.noter.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".noter.toml"));
        }

        paths
    }
}
