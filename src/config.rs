//! Named normalizer profiles loaded from TOML.
//!
//! ```toml
//! default_profile = "attributes"
//!
//! [profiles.attributes]
//! separator = ","
//! space = "after"
//! entries = "trim|remove-empty"
//! suffix = "Attribute"
//! ```
//!
//! Files are read from `$XDG_CONFIG_DIRS/levitate/strings.toml` and then
//! `$XDG_CONFIG_HOME/levitate/strings.toml`. Later files override earlier
//! ones key by key. Missing keys fall back to the normalizer defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, StringError};
use crate::flags::{EntryFlags, SeparatorSpaceFlags};
use crate::separated::{DEFAULT_SEPARATOR, SeparatedValues};
use crate::suffixed::SuffixedSeparatedValues;

const CONFIG_DIR: &str = "levitate";
const CONFIG_FILE: &str = "strings.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct StringsToml {
    default_profile: Option<String>,
    profiles: Option<BTreeMap<String, ProfileToml>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ProfileToml {
    separator: Option<String>,
    space: Option<String>,
    entries: Option<String>,
    suffix: Option<String>,
}

impl StringsToml {
    fn merge(&mut self, other: StringsToml) {
        if other.default_profile.is_some() {
            self.default_profile = other.default_profile;
        }
        match (self.profiles.as_mut(), other.profiles) {
            (Some(dst), Some(src)) => {
                for (name, prof) in src {
                    match dst.get_mut(&name) {
                        Some(existing) => existing.merge(prof),
                        None => {
                            dst.insert(name, prof);
                        }
                    }
                }
            }
            (None, Some(src)) => self.profiles = Some(src),
            _ => {}
        }
    }
}

impl ProfileToml {
    fn merge(&mut self, other: ProfileToml) {
        if other.separator.is_some() {
            self.separator = other.separator;
        }
        if other.space.is_some() {
            self.space = other.space;
        }
        if other.entries.is_some() {
            self.entries = other.entries;
        }
        if other.suffix.is_some() {
            self.suffix = other.suffix;
        }
    }

    fn resolve(&self) -> Result<NormalizerProfile, ConfigError> {
        let space = match &self.space {
            Some(raw) => raw.parse()?,
            None => SeparatorSpaceFlags::default(),
        };
        let entries = match &self.entries {
            Some(raw) => raw.parse()?,
            None => EntryFlags::default(),
        };
        Ok(NormalizerProfile {
            separator: self
                .separator
                .clone()
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_owned()),
            space,
            entries,
            suffix: self.suffix.clone().filter(|s| !s.is_empty()),
        })
    }
}

/// Settings for one named way of normalizing separated values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerProfile {
    pub separator: String,
    pub space: SeparatorSpaceFlags,
    /// Ignored when `suffix` is set; suffixed parsing always trims and
    /// removes empty entries.
    pub entries: EntryFlags,
    pub suffix: Option<String>,
}

impl Default for NormalizerProfile {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            space: SeparatorSpaceFlags::default(),
            entries: EntryFlags::default(),
            suffix: None,
        }
    }
}

/// Result of applying a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Plain(SeparatedValues),
    Suffixed(SuffixedSeparatedValues),
}

impl Normalized {
    pub fn items(&self) -> &[String] {
        match self {
            Self::Plain(v) => v.items(),
            Self::Suffixed(v) => v.items(),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Plain(v) => v.value(),
            Self::Suffixed(v) => v.value(),
        }
    }
}

impl NormalizerProfile {
    pub fn apply(&self, source: &str) -> Result<Normalized, StringError> {
        Ok(match &self.suffix {
            Some(suffix) => Normalized::Suffixed(SuffixedSeparatedValues::new(
                source,
                suffix,
                &self.separator,
                self.space,
            )?),
            None => Normalized::Plain(SeparatedValues::new(
                source,
                &self.separator,
                self.space,
                self.entries,
            )?),
        })
    }
}

/// All configured profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSet {
    default_profile: Option<String>,
    profiles: BTreeMap<String, NormalizerProfile>,
}

impl ProfileSet {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let parsed = toml::from_str::<StringsToml>(text).map_err(|source| ConfigError::Parse {
            origin: "<string>".to_owned(),
            source,
        })?;
        Self::build(parsed)
    }

    /// Read and merge `paths` in order, skipping files that do not exist.
    pub fn load_from(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut merged = StringsToml::default();
        for path in paths {
            if !path.exists() {
                tracing::debug!(path = %path.display(), "profile config not present");
                continue;
            }
            tracing::debug!(path = %path.display(), "merging profile config");
            merged.merge(read_toml(path)?);
        }
        Self::build(merged)
    }

    /// Load from the standard XDG locations. No files means no profiles.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&find_config_files())
    }

    fn build(cfg: StringsToml) -> Result<Self, ConfigError> {
        let mut profiles = BTreeMap::new();
        for (name, raw) in cfg.profiles.unwrap_or_default() {
            let profile = raw.resolve()?;
            // Surface a bad separator at load time rather than on first use.
            if profile.separator.is_empty() {
                return Err(ConfigError::InvalidProfile {
                    name,
                    source: StringError::invalid("separator", "must not be empty"),
                });
            }
            profiles.insert(name, profile);
        }

        let set = Self {
            default_profile: cfg.default_profile,
            profiles,
        };
        if let Some(name) = &set.default_profile {
            set.get(name)?;
        }
        tracing::debug!(profiles = set.profiles.len(), "loaded normalizer profiles");
        Ok(set)
    }

    pub fn get(&self, name: &str) -> Result<&NormalizerProfile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile {
                name: name.to_owned(),
                available: if self.profiles.is_empty() {
                    "none".to_owned()
                } else {
                    self.names().collect::<Vec<_>>().join(", ")
                },
            })
    }

    /// The profile named by `default_profile`, or the built-in defaults.
    pub fn default_profile(&self) -> NormalizerProfile {
        self.default_profile
            .as_deref()
            .and_then(|name| self.profiles.get(name))
            .cloned()
            .unwrap_or_default()
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn read_toml(path: &Path) -> Result<StringsToml, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    toml::from_str::<StringsToml>(&text).map_err(|source| ConfigError::Parse {
        origin: path.display().to_string(),
        source,
    })
}

fn split_xdg_config_dirs() -> Vec<PathBuf> {
    let raw = std::env::var("XDG_CONFIG_DIRS").unwrap_or_else(|_| "/etc/xdg".to_owned());
    raw.split(':')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn xdg_config_home() -> PathBuf {
    if let Ok(raw) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".").join(".config"))
}

/// Candidate config files, lowest precedence first.
pub fn find_config_files() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = split_xdg_config_dirs()
        .into_iter()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .collect();
    paths.push(xdg_config_home().join(CONFIG_DIR).join(CONFIG_FILE));
    paths
}
