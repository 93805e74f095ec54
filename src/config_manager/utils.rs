use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::config_manager::main::Config;

/// Read a JSON-LD or YAML configuration file with environment variable substitution.
///
/// The format is chosen by extension: `.yaml`/`.yml` are YAML, everything else is JSON.
pub fn read_config_value(config_path: &str) -> Result<Value> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file_with_guess_encoding(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path);
    }

    let content = substitute_env_vars(&content)?;

    let path_lower = config_path.to_lowercase();
    if path_lower.ends_with(".yaml") || path_lower.ends_with(".yml") {
        let value: Value = serde_yaml::from_str(&content)?;
        Ok(value)
    } else {
        // @context is kept in the value; Config carries it as an opaque field
        let value: Value = serde_json::from_str(&content)?;
        Ok(value)
    }
}

/// Replace `${VAR_NAME}` with the value of the environment variable.
///
/// Unset variables are left as written so validation can name them.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Validate configuration data against the Config model
pub fn validate_config(config_data: &Value) -> Result<Config> {
    let config: Config = serde_json::from_value(config_data.clone())?;
    config
        .translator_config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid translator_config: {}", e))?;
    Ok(config)
}

/// Load text file with encoding detection
pub fn load_text_file_with_guess_encoding(file_path: &str) -> Result<String> {
    let mut bytes = fs::read(file_path)?;

    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(0..3);
    }

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            debug!("{} is not valid UTF-8, decoding as GBK", file_path);
            let (cow, _, _) = encoding_rs::GBK.decode(e.as_bytes());
            Ok(cow.into_owned())
        }
    }
}

/// Candidate configuration paths, most specific first.
///
/// `CONFIG_PATH` wins, then `conf.jsonld` and `conf.yaml` in the working
/// directory, then the same names next to the executable.
pub fn config_search_paths() -> Vec<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    let mut paths: Vec<PathBuf> = Vec::new();
    if let Ok(path) = std::env::var("CONFIG_PATH") {
        paths.push(PathBuf::from(path));
    }
    paths.push(PathBuf::from("conf.jsonld"));
    paths.push(PathBuf::from("conf.yaml"));
    if let Some(dir) = exe_dir {
        paths.push(dir.join("conf.jsonld"));
        paths.push(dir.join("conf.yaml"));
    }
    paths
}

/// Load the first configuration file that exists.
///
/// Missing paths are skipped. A file that exists but fails to parse or
/// validate is an error naming that file; later candidates are not tried.
pub fn load_first_config(paths: &[PathBuf]) -> Result<(Config, PathBuf)> {
    for path in paths {
        if !path.exists() {
            debug!("No config at {}", path.display());
            continue;
        }
        let path_str = path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Config path is not valid UTF-8: {}", path.display()))?;
        let config = Config::load(path_str)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        return Ok((config, path.clone()));
    }

    Err(anyhow::anyhow!("Could not find config file. Tried: {:?}", paths))
}
