//! Separated values where every entry must carry a suffix.
//!
//! Useful when the same list may be written with or without a common ending
//! (`"Foo, BarAttribute"`): entries are normalized to the suffixed form and
//! [`SuffixedSeparatedValues::compare_items`] lists both spellings.

use std::fmt;

use crate::error::StringError;
use crate::flags::{EntryFlags, SeparatorSpaceFlags};
use crate::search::{self, Comparison};
use crate::separated::{DEFAULT_SEPARATOR, SeparatedValues};

/// Separated values normalized so that each entry ends with `suffix`.
///
/// Entries are always trimmed and empty ones dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixedSeparatedValues {
    base: SeparatedValues,
    suffix: String,
    items: Vec<String>,
    value: String,
    /// Suffixed items followed by their unsuffixed forms.
    compare_items: Vec<String>,
}

impl SuffixedSeparatedValues {
    pub fn new(
        source: &str,
        suffix: &str,
        separator: &str,
        space: SeparatorSpaceFlags,
    ) -> Result<Self, StringError> {
        let base = SeparatedValues::new(source, separator, space, EntryFlags::default())?;

        let (items, value) = if base.items().iter().all(|item| item.ends_with(suffix)) {
            (base.items().to_vec(), base.value().to_string())
        } else {
            let items: Vec<String> = base
                .items()
                .iter()
                .map(|item| {
                    if item.ends_with(suffix) {
                        item.clone()
                    } else {
                        format!("{item}{suffix}")
                    }
                })
                .collect();
            let value = items.join(base.separators().joiner());
            (items, value)
        };

        let mut compare_items = Vec::with_capacity(items.len() * 2);
        compare_items.extend(items.iter().cloned());
        compare_items.extend(
            items
                .iter()
                .map(|item| search::left_of(item, suffix).unwrap_or(item).to_string()),
        );

        tracing::trace!(
            items = items.len(),
            suffix,
            "parsed suffixed separated values"
        );

        Ok(Self {
            base,
            suffix: suffix.to_string(),
            items,
            value,
            compare_items,
        })
    }

    /// Parse on `","` with a space after the separator.
    pub fn parse(source: &str, suffix: &str) -> Result<Self, StringError> {
        Self::new(source, suffix, DEFAULT_SEPARATOR, SeparatorSpaceFlags::default())
    }

    /// Entries, each ending with the suffix.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Suffixed entries joined by the separator.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Suffixed entries followed by the same entries without the suffix.
    ///
    /// `compare_items()[i]` and `compare_items()[i + len()]` are the same
    /// entry.
    pub fn compare_items(&self) -> &[String] {
        &self.compare_items
    }

    /// Entries with the suffix stripped, in the same order as `items()`.
    pub fn unsuffixed_items(&self) -> &[String] {
        &self.compare_items[self.items.len()..]
    }

    /// The parse before suffixing.
    pub fn base(&self) -> &SeparatedValues {
        &self.base
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `name`, with or without the suffix, is one of the entries.
    pub fn matches(&self, name: &str, comparison: Comparison) -> bool {
        self.compare_items
            .iter()
            .any(|candidate| comparison.equals(candidate, name))
    }
}

impl fmt::Display for SuffixedSeparatedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
