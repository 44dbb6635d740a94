//! Configuration flags for separated-value parsing.
//!
//! Both types are small bitsets: combine with `|`, test with `contains`.
//! They also round-trip through a text form (`"after|before"`,
//! `"trim|remove-empty"`) so profiles can name them in TOML.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// How spaces around the separator are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeparatorSpaceFlags(u8);

impl SeparatorSpaceFlags {
    /// Plain separator only.
    pub const NONE: Self = Self(0);
    /// Separator is followed by a space (`", "`).
    pub const ADD_SPACE_AFTER: Self = Self(0b01);
    /// Separator is preceded by a space (`" ,"`).
    pub const ADD_SPACE_BEFORE: Self = Self(0b10);

    const NAMES: &'static [(&'static str, Self)] = &[
        ("after", Self::ADD_SPACE_AFTER),
        ("before", Self::ADD_SPACE_BEFORE),
    ];

    pub const fn empty() -> Self {
        Self::NONE
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// True if any bit of `other` is set in `self`.
    pub const fn intersects(&self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for SeparatorSpaceFlags {
    fn default() -> Self {
        Self::ADD_SPACE_AFTER
    }
}

/// Normalization applied to each entry after splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryFlags(u8);

impl EntryFlags {
    /// Keep entries exactly as split.
    pub const NONE: Self = Self(0);
    /// Drop empty entries. Combined with [`EntryFlags::TRIM_ENTRIES`], entries
    /// that are empty once trimmed are dropped too.
    pub const REMOVE_EMPTY_ENTRIES: Self = Self(0b01);
    /// Trim surrounding whitespace from each entry.
    pub const TRIM_ENTRIES: Self = Self(0b10);

    const NAMES: &'static [(&'static str, Self)] = &[
        ("trim", Self::TRIM_ENTRIES),
        ("remove-empty", Self::REMOVE_EMPTY_ENTRIES),
    ];

    pub const fn empty() -> Self {
        Self::NONE
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for EntryFlags {
    fn default() -> Self {
        Self::REMOVE_EMPTY_ENTRIES | Self::TRIM_ENTRIES
    }
}

impl BitOr for SeparatorSpaceFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOr for EntryFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Parse `"none"` or names joined by `|` (also accepts `,` and `+`).
fn parse_names<F: Copy>(
    s: &str,
    kind: &'static str,
    names: &[(&str, F)],
    none: F,
    union: fn(F, F) -> F,
) -> Result<F, ConfigError> {
    let invalid = || ConfigError::InvalidFlags {
        kind,
        value: s.to_string(),
    };

    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(none);
    }

    let mut flags = none;
    for part in trimmed.split(['|', ',', '+']) {
        let part = part.trim();
        let (_, flag) = names
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(part))
            .ok_or_else(invalid)?;
        flags = union(flags, *flag);
    }
    Ok(flags)
}

fn write_names<F: Copy>(
    f: &mut fmt::Formatter<'_>,
    names: &[(&str, F)],
    contains: impl Fn(F) -> bool,
) -> fmt::Result {
    let set: Vec<&str> = names
        .iter()
        .filter(|(_, flag)| contains(*flag))
        .map(|(name, _)| *name)
        .collect();
    if set.is_empty() {
        write!(f, "none")
    } else {
        write!(f, "{}", set.join("|"))
    }
}

impl FromStr for SeparatorSpaceFlags {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_names(s, "space", Self::NAMES, Self::NONE, Self::union)
    }
}

impl FromStr for EntryFlags {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_names(s, "entry", Self::NAMES, Self::NONE, Self::union)
    }
}

impl fmt::Display for SeparatorSpaceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_names(f, Self::NAMES, |flag| self.contains(flag))
    }
}

impl fmt::Display for EntryFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_names(f, Self::NAMES, |flag| self.contains(flag))
    }
}

macro_rules! serde_via_text {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_via_text!(SeparatorSpaceFlags);
serde_via_text!(EntryFlags);
