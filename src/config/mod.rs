use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "apathy-theme";
const APP_CONFIG_FILE: &str = "config.json";

/// Relative to the working directory. The content is JSON despite the extension.
pub const DEFAULT_OUTPUT_PATH: &str = "./themes/default.yaml";

/// Optional overrides from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    output_path: Option<PathBuf>,
}

/// Settings for one generator run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl GeneratorConfig {
    fn from_file(file: FileConfig) -> Self {
        let mut config = Self::default();
        if let Some(path) = file.output_path.filter(|p| !p.as_os_str().is_empty()) {
            config.output_path = path;
        }
        config
    }
}

pub fn load_generator_config() -> GeneratorConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_generator_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_generator_config_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> GeneratorConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return GeneratorConfig::default(),
    };
    if !path.exists() {
        return GeneratorConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str::<FileConfig>(&contents) {
            Ok(file) => {
                tracing::debug!(?path, "loaded config.json");
                GeneratorConfig::from_file(file)
            }
            Err(err) => {
                tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
                GeneratorConfig::default()
            }
        },
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            GeneratorConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
