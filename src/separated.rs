//! Separated-value normalization.
//!
//! [`SeparatedValues`] splits a delimited string into entries and renders a
//! canonical form joined by a consistently spaced separator:
//!
//! ```
//! use levitate_strings::SeparatedValues;
//!
//! let values = SeparatedValues::parse("Foo,Bar,  Baz,,");
//! assert_eq!(values.items(), ["Foo", "Bar", "Baz"]);
//! assert_eq!(values.value(), "Foo, Bar, Baz");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StringError;
use crate::flags::{EntryFlags, SeparatorSpaceFlags};

pub const DEFAULT_SEPARATOR: &str = ",";

/// The separator forms recognized when splitting.
///
/// Always holds the plain separator. With any space flag set it also holds
/// the spaced form, which comes last and is the joiner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    variants: Vec<String>,
}

impl Separators {
    pub fn new(separator: &str, space: SeparatorSpaceFlags) -> Result<Self, StringError> {
        if separator.is_empty() {
            return Err(StringError::invalid("separator", "must not be empty"));
        }
        Ok(Self::resolve(separator, space))
    }

    /// `separator` must be non-empty.
    fn resolve(separator: &str, space: SeparatorSpaceFlags) -> Self {
        let mut variants = vec![separator.to_string()];
        if space.intersects(SeparatorSpaceFlags::ADD_SPACE_AFTER | SeparatorSpaceFlags::ADD_SPACE_BEFORE) {
            let mut spaced = String::with_capacity(separator.len() + 2);
            if space.contains(SeparatorSpaceFlags::ADD_SPACE_BEFORE) {
                spaced.push(' ');
            }
            spaced.push_str(separator);
            if space.contains(SeparatorSpaceFlags::ADD_SPACE_AFTER) {
                spaced.push(' ');
            }
            variants.push(spaced);
        }
        Self { variants }
    }

    /// The separator as given.
    pub fn plain(&self) -> &str {
        &self.variants[0]
    }

    /// The separator used to render joined values: the last variant.
    pub fn joiner(&self) -> &str {
        self.variants.last().map_or(self.plain(), String::as_str)
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Length of the longest variant that `rest` starts with.
    fn match_len(&self, rest: &str) -> Option<usize> {
        self.variants
            .iter()
            .filter(|v| rest.starts_with(v.as_str()))
            .map(String::len)
            .max()
    }

    /// Split `source` on any variant, preferring the longest at each position.
    pub fn split<'a>(&self, source: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut start = 0;
        let mut pos = 0;

        while pos < source.len() {
            let rest = &source[pos..];
            if let Some(len) = self.match_len(rest) {
                pieces.push(&source[start..pos]);
                pos += len;
                start = pos;
            } else {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
        pieces.push(&source[start..]);

        pieces
    }
}

/// Parsing options for [`SeparatedValues`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatedValuesOptions {
    pub separator: String,
    pub space: SeparatorSpaceFlags,
    pub entries: EntryFlags,
}

impl Default for SeparatedValuesOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            space: SeparatorSpaceFlags::default(),
            entries: EntryFlags::default(),
        }
    }
}

impl SeparatedValuesOptions {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_space(mut self, space: SeparatorSpaceFlags) -> Self {
        self.space = space;
        self
    }

    pub fn with_entries(mut self, entries: EntryFlags) -> Self {
        self.entries = entries;
        self
    }
}

/// An immutable list of values parsed from a separated string.
///
/// `value()` is always `items()` joined by [`Separators::joiner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatedValues {
    separators: Separators,
    space: SeparatorSpaceFlags,
    entries: EntryFlags,
    items: Vec<String>,
    value: String,
}

impl SeparatedValues {
    /// Parse `source` on `separator` with explicit flags.
    ///
    /// Fails only if `separator` is empty: an empty separator matches at
    /// every position, so there is no meaningful split to perform.
    pub fn new(
        source: &str,
        separator: &str,
        space: SeparatorSpaceFlags,
        entries: EntryFlags,
    ) -> Result<Self, StringError> {
        let separators = Separators::new(separator, space)?;
        Ok(Self::build(source, separators, space, entries))
    }

    /// Parse with [`SeparatedValuesOptions`].
    pub fn with_options(source: &str, options: &SeparatedValuesOptions) -> Result<Self, StringError> {
        Self::new(source, &options.separator, options.space, options.entries)
    }

    /// Parse on `","` with a space after the separator, trimming entries and
    /// dropping empty ones.
    pub fn parse(source: &str) -> Self {
        let space = SeparatorSpaceFlags::default();
        let separators = Separators::resolve(DEFAULT_SEPARATOR, space);
        Self::build(source, separators, space, EntryFlags::default())
    }

    fn build(
        source: &str,
        separators: Separators,
        space: SeparatorSpaceFlags,
        entries: EntryFlags,
    ) -> Self {
        let remove_empty = entries.contains(EntryFlags::REMOVE_EMPTY_ENTRIES);
        let trim = entries.contains(EntryFlags::TRIM_ENTRIES);

        let items: Vec<String> = separators
            .split(source)
            .into_iter()
            .filter(|piece| !remove_empty || !piece.is_empty())
            .map(|piece| if trim { piece.trim() } else { piece })
            // Second pass: trimming may have emptied a whitespace-only piece.
            .filter(|piece| !remove_empty || !piece.trim().is_empty())
            .map(str::to_string)
            .collect();

        let value = items.join(separators.joiner());

        tracing::trace!(
            items = items.len(),
            joiner = separators.joiner(),
            %space,
            %entries,
            "parsed separated values"
        );

        Self {
            separators,
            space,
            entries,
            items,
            value,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The canonical joined form.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    pub fn space_flags(&self) -> SeparatorSpaceFlags {
        self.space
    }

    pub fn entry_flags(&self) -> EntryFlags {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}

impl fmt::Display for SeparatedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for SeparatedValues {
    type Err = StringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'a> IntoIterator for &'a SeparatedValues {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for SeparatedValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for SeparatedValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
