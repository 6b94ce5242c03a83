use crate::cli::Cli;
use crate::constants::{
    CONFIG_FILE_NAMES, DEFAULT_OUTFILE, DEFAULT_PROMPT, DEFAULT_SIZE, ENV_API_KEY, ENV_API_URL,
    ENV_OUTFILE, ENV_PROMPT, ENV_SIZE, IMAGES_API_URL,
};
use crate::error::{AiImgError, Result};
use serde_yaml::{Mapping, Value};
use std::{
    collections::HashMap,
    fmt, fs,
    path::{Path, PathBuf},
};

/// Everything a run needs, resolved once before any request is made.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub prompt: String,
    pub size: String,
    pub output_path: PathBuf,
    pub api_url: String,
    pub config_file: Option<PathBuf>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("prompt", &self.prompt)
            .field("size", &self.size)
            .field("output_path", &self.output_path)
            .field("api_url", &self.api_url)
            .field("config_file", &self.config_file)
            .finish()
    }
}

/// The ambient inputs of resolution, captured up front so resolving does
/// not reach into process state.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub env: HashMap<String, String>,
    pub home_dir: Option<PathBuf>,
}

impl ConfigSources {
    pub fn from_process() -> Self {
        ConfigSources {
            env: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
            home_dir: dirs::home_dir(),
        }
    }

    fn env_var(&self, key: &str) -> Option<String> {
        self.env.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

/// Settings read from a YAML config file. Keys are stored upper-cased so
/// lookups ignore case; when two keys differ only in case the later one in
/// the file wins.
#[derive(Debug, Default)]
pub struct FileSettings {
    values: HashMap<String, String>,
}

impl FileSettings {
    pub fn parse(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(FileSettings::default());
        }
        let raw: Option<Mapping> = serde_yaml::from_str(contents)?;
        let values = raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| {
                let Value::String(key) = key else {
                    return None;
                };
                let value = match value {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((key.to_uppercase(), value))
            })
            .collect();
        Ok(FileSettings { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(&key.to_uppercase())
            .filter(|v| !v.is_empty())
            .cloned()
    }
}

fn read_config_file(path: &Path) -> Result<FileSettings> {
    let contents = fs::read_to_string(path).map_err(|source| AiImgError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    FileSettings::parse(&contents).map_err(|source| AiImgError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the explicit config file, or the first default file found in the
/// home directory. Only an explicit file is required to load; a default
/// file that is missing or broken is skipped.
pub fn load_config_file(
    explicit: Option<&Path>,
    home_dir: Option<&Path>,
) -> Result<Option<(PathBuf, FileSettings)>> {
    if let Some(path) = explicit {
        let settings = read_config_file(path)?;
        return Ok(Some((path.to_path_buf(), settings)));
    }

    let Some(home) = home_dir else {
        log::debug!("no home directory, skipping default config file");
        return Ok(None);
    };

    for name in CONFIG_FILE_NAMES {
        let path = home.join(name);
        if !path.is_file() {
            continue;
        }
        match read_config_file(&path) {
            Ok(settings) => return Ok(Some((path, settings))),
            Err(e) => {
                log::warn!("ignoring default config file: {}", e);
                return Ok(None);
            }
        }
    }

    Ok(None)
}

/// Flag, then environment, then config file, then the built-in default.
/// The API key has no flag and no default.
pub fn resolve_config(cli: &Cli, sources: &ConfigSources) -> Result<Config> {
    let loaded = load_config_file(cli.config.as_deref(), sources.home_dir.as_deref())?;
    let (config_file, file) = match loaded {
        Some((path, settings)) => {
            eprintln!("Using config file: {}", path.display());
            (Some(path), settings)
        }
        None => (None, FileSettings::default()),
    };

    let lookup = |key: &str| sources.env_var(key).or_else(|| file.get(key));

    let api_key = lookup(ENV_API_KEY).ok_or(AiImgError::NoApiKey)?;

    let prompt = cli
        .prompt
        .clone()
        .or_else(|| lookup(ENV_PROMPT))
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    let size = cli
        .size
        .clone()
        .or_else(|| lookup(ENV_SIZE))
        .unwrap_or_else(|| DEFAULT_SIZE.to_string());

    let output_path = cli
        .outfile
        .clone()
        .or_else(|| lookup(ENV_OUTFILE).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTFILE));

    let api_url = lookup(ENV_API_URL).unwrap_or_else(|| IMAGES_API_URL.to_string());

    let config = Config {
        api_key,
        prompt,
        size,
        output_path,
        api_url,
        config_file,
    };
    log::debug!("resolved {:?}", config);
    Ok(config)
}
