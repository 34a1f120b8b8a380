//! Host configuration loaded from YAML.
//!
//! A configuration path may be empty (no configuration), a single YAML file,
//! or a directory of YAML files. In the directory case each file is mounted
//! under the key path formed by its relative location, so
//! `plugins/commands/http.yaml` provides `plugins.commands.http.*`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a specific file with context.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML from a specific file.
    #[error("YAML parse error in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The top level of a configuration file is not a mapping.
    #[error("configuration in '{0}' must be a mapping")]
    NotAMapping(PathBuf),

    /// Could not resolve the working directory for an empty path.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Read-only configuration tree with dotted-key lookup.
#[derive(Debug, Clone)]
pub struct HostConfig {
    path: PathBuf,
    root: Value,
}

impl HostConfig {
    /// Configuration with no keys, rooted at `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: Value::Object(Map::new()),
        }
    }

    /// Build a configuration from an in-memory tree.
    pub fn from_value(path: impl Into<PathBuf>, root: Value) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }

    /// Load configuration from `path`.
    ///
    /// An empty path yields an empty configuration rooted at the current
    /// directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.as_os_str().is_empty() {
            let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
            return Ok(Self::empty(cwd));
        }

        let root = if path.is_dir() {
            let mut root = Map::new();
            load_directory(path, path, &mut root)?;
            Value::Object(root)
        } else {
            read_yaml(path)?
        };

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(Self::from_value(path, root))
    }

    /// The path the configuration was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute form of [`Self::path`].
    pub fn absolute_path(&self) -> PathBuf {
        std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    /// Look up a dotted key such as `plugins.commands.http.config.name`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.as_object()?.get(segment))
    }

    /// String value at `key`; scalars are rendered, other types are ignored.
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            v @ (Value::Number(_) | Value::Bool(_)) => Some(v.to_string()),
            _ => None,
        }
    }

    /// List of strings at `key`. Non-string items are rendered as JSON.
    pub fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        let items = self.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }
}

fn read_yaml(path: &Path) -> Result<Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    let value: Value = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(_) => Ok(value),
        Value::Null => Ok(Value::Object(Map::new())),
        _ => Err(ConfigError::NotAMapping(path.to_path_buf())),
    }
}

fn load_directory(base: &Path, dir: &Path, root: &mut Map<String, Value>) -> Result<(), ConfigError> {
    let read_err = |source| ConfigError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(read_err)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            load_directory(base, &path, root)?;
            continue;
        }
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "yaml" || e == "yml");
        if !is_yaml {
            continue;
        }

        let Ok(relative) = path.strip_prefix(base) else {
            continue;
        };
        let segments: Vec<String> = relative
            .with_extension("")
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        let value = read_yaml(&path)?;
        mount(root, &segments, value);
    }
    Ok(())
}

/// Merge `value` into `root` at the nested key path `segments`.
fn mount(root: &mut Map<String, Value>, segments: &[String], value: Value) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };
    let mut node = root;
    for segment in parents {
        let child = node
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !child.is_object() {
            *child = Value::Object(Map::new());
        }
        let Value::Object(map) = child else { return };
        node = map;
    }
    match (node.get_mut(last), value) {
        (Some(Value::Object(existing)), Value::Object(incoming)) => {
            existing.extend(incoming);
        }
        (_, value) => {
            node.insert(last.clone(), value);
        }
    }
}
