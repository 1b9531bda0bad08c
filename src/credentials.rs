//! API key discovery
//!
//! Lookup order, first match wins:
//! 1. `FIRECRAWL_API_KEY` environment variable
//! 2. An explicit key file
//! 3. `~/.secrets/firecrawl.key` (first line starting with `fc-`)
//! 4. Files under `~/.secrets/`, in name order (first line starting with `fc-`)

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const API_KEY_ENV: &str = "FIRECRAWL_API_KEY";
pub const KEY_PREFIX: &str = "fc-";

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("No API key found. Set FIRECRAWL_API_KEY or create ~/.secrets/firecrawl.key")]
    NotFound,

    #[error("Failed to read key file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Key file {0} is empty")]
    EmptyKeyFile(PathBuf),
}

pub type Result<T> = std::result::Result<T, CredentialsError>;

/// Load the API key from the environment or the well-known secret files.
pub fn load_api_key(key_file: Option<&Path>) -> Result<String> {
    let env_key = env::var(API_KEY_ENV).ok();
    resolve_api_key(env_key.as_deref(), key_file, &default_search_paths())
}

/// `~/.secrets/firecrawl.key`, then the `~/.secrets` directory.
pub fn default_search_paths() -> Vec<PathBuf> {
    dirs::home_dir()
        .map(|home| {
            let secrets = home.join(".secrets");
            vec![secrets.join("firecrawl.key"), secrets]
        })
        .unwrap_or_default()
}

/// Resolve a key from explicit inputs; `load_api_key` feeds it the process state.
pub fn resolve_api_key(
    env_key: Option<&str>,
    key_file: Option<&Path>,
    search_paths: &[PathBuf],
) -> Result<String> {
    if let Some(key) = env_key.map(str::trim).filter(|key| !key.is_empty()) {
        debug!(source = API_KEY_ENV, "Using API key from environment");
        return Ok(key.to_string());
    }

    if let Some(path) = key_file {
        let path = expand_home(path);
        let content = read_key_file(&path)?;
        let key = content.trim();
        if key.is_empty() {
            return Err(CredentialsError::EmptyKeyFile(path));
        }
        debug!(path = %path.display(), "Using API key from key file");
        return Ok(key.to_string());
    }

    for path in search_paths {
        if path.is_file() {
            if let Some(key) = find_prefixed_line(&read_key_file(path)?) {
                debug!(path = %path.display(), "Using API key from secrets file");
                return Ok(key);
            }
        } else if path.is_dir() {
            if let Some(key) = scan_directory(path)? {
                return Ok(key);
            }
        }
    }

    Err(CredentialsError::NotFound)
}

fn scan_directory(dir: &Path) -> Result<Option<String>> {
    let entries = fs::read_dir(dir).map_err(|source| CredentialsError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    for file in files {
        // Unrelated secrets may be binary or unreadable; they are not ours to report.
        let Ok(content) = fs::read_to_string(&file) else {
            debug!(path = %file.display(), "Skipping unreadable secrets file");
            continue;
        };
        if let Some(key) = find_prefixed_line(&content) {
            debug!(path = %file.display(), "Using API key from secrets directory");
            return Ok(Some(key));
        }
    }

    Ok(None)
}

fn read_key_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CredentialsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn find_prefixed_line(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(KEY_PREFIX))
        .map(str::to_string)
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
