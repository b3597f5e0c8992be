//! Where configuration values come from.

use std::collections::HashMap;
use std::path::Path;

/// A read-only lookup of named configuration values.
pub trait ConfigSource {
    /// Value for `key`, or `None` when it is unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Values that are not valid UTF-8 are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!("{} is not valid UTF-8, treating it as unset", key);
                None
            }
        }
    }
}

/// Fixed in-memory values.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Process environment backed by an env-override file.
///
/// Variables already set in the process win over the file, matching the
/// usual dotenv convention. The file is read once, up front, and the process
/// environment itself is left untouched.
#[derive(Debug, Clone)]
pub struct LayeredSource<P = EnvSource> {
    primary: P,
    file: MapSource,
}

impl LayeredSource<EnvSource> {
    /// Look for `.env` in the working directory and its ancestors.
    pub fn from_dotenv() -> Self {
        Self::new(EnvSource, read_env_file(dotenvy::dotenv_iter(), ".env"))
    }

    /// Use a specific env-override file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file = read_env_file(dotenvy::from_path_iter(path), &path.display().to_string());
        Self::new(EnvSource, file)
    }
}

impl<P: ConfigSource> LayeredSource<P> {
    pub fn new(primary: P, file: MapSource) -> Self {
        Self { primary, file }
    }

    /// Number of values picked up from the override file
    pub fn file_values(&self) -> usize {
        self.file.len()
    }
}

impl<P: ConfigSource> ConfigSource for LayeredSource<P> {
    fn get(&self, key: &str) -> Option<String> {
        self.primary.get(key).or_else(|| self.file.get(key))
    }
}

/// Collect an env file into a map.
///
/// A missing file yields an empty map. Malformed lines are logged and
/// skipped; the rest of the file still counts.
fn read_env_file<I>(iter: dotenvy::Result<I>, name: &str) -> MapSource
where
    I: Iterator<Item = dotenvy::Result<(String, String)>>,
{
    let iter = match iter {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            tracing::debug!("no env file at {}", name);
            return MapSource::new();
        }
        Err(e) => {
            tracing::warn!("ignoring env file {}: {}", name, e);
            return MapSource::new();
        }
    };

    let mut values = MapSource::new();
    for item in iter {
        match item {
            Ok((key, value)) => values.insert(key, value),
            Err(e) => tracing::warn!("skipping line in env file {}: {}", name, e),
        }
    }

    tracing::debug!("loaded {} value(s) from {}", values.len(), name);
    values
}
