//! Directional substring search and index slicing.
//!
//! All results borrow from the source. "Not found" is `None` and is kept
//! distinct from a match at the boundary, which yields `Some("")`:
//!
//! ```
//! use levitate_strings::search::{left_of, right_of};
//!
//! assert_eq!(left_of("Domain\\Name", "\\"), Some("Domain"));
//! assert_eq!(left_of("Domain\\Name", "Domain"), Some(""));
//! assert_eq!(right_of("Domain\\Name", "\\Namea"), None);
//! ```

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::StringError;

/// Which end of the source to start searching from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    /// First occurrence.
    #[default]
    FromLeft,
    /// Last occurrence.
    FromRight,
}

/// Equality/ordering policy for searches and comparisons.
///
/// The culture variants are accepted for API parity but compare like their
/// ordinal counterparts; no locale data is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    #[default]
    Ordinal,
    OrdinalIgnoreCase,
    CurrentCulture,
    CurrentCultureIgnoreCase,
    InvariantCulture,
    InvariantCultureIgnoreCase,
}

impl Comparison {
    pub fn ignores_case(&self) -> bool {
        matches!(
            self,
            Self::OrdinalIgnoreCase | Self::CurrentCultureIgnoreCase | Self::InvariantCultureIgnoreCase
        )
    }

    /// Compare two strings under this policy.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        if self.ignores_case() {
            a.chars().map(fold).cmp(b.chars().map(fold))
        } else {
            a.cmp(b)
        }
    }

    pub fn equals(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Byte range of the first or last occurrence of `search` in `source`.
    ///
    /// An empty `search` matches at the start (or the end when searching
    /// from the right).
    pub fn find(&self, source: &str, search: &str, direction: SearchDirection) -> Option<Range<usize>> {
        if search.is_empty() {
            let at = match direction {
                SearchDirection::FromLeft => 0,
                SearchDirection::FromRight => source.len(),
            };
            return Some(at..at);
        }

        if !self.ignores_case() {
            let start = match direction {
                SearchDirection::FromLeft => source.find(search),
                SearchDirection::FromRight => source.rfind(search),
            }?;
            return Some(start..start + search.len());
        }

        let mut starts = source.char_indices().map(|(i, _)| i);
        match direction {
            SearchDirection::FromLeft => starts
                .find_map(|i| match_folded(&source[i..], search).map(|len| i..i + len)),
            SearchDirection::FromRight => starts
                .rev()
                .find_map(|i| match_folded(&source[i..], search).map(|len| i..i + len)),
        }
    }
}

/// Single-character case fold. Characters whose lowercase form expands to
/// several characters are left as-is so that byte offsets stay aligned.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// If `haystack` starts with `needle` ignoring case, the matched byte length
/// in `haystack`.
fn match_folded(haystack: &str, needle: &str) -> Option<usize> {
    let mut len = 0;
    let mut hay = haystack.chars();
    for n in needle.chars() {
        let h = hay.next()?;
        if fold(h) != fold(n) {
            return None;
        }
        len += h.len_utf8();
    }
    Some(len)
}

/// The part of `source` left of the first occurrence of `search`.
pub fn left_of<'a>(source: &'a str, search: &str) -> Option<&'a str> {
    left_of_with(source, search, SearchDirection::FromLeft, Comparison::Ordinal)
}

/// The part of `source` left of `search`, found from `direction` under
/// `comparison`. `None` if `search` does not occur.
pub fn left_of_with<'a>(
    source: &'a str,
    search: &str,
    direction: SearchDirection,
    comparison: Comparison,
) -> Option<&'a str> {
    let found = comparison.find(source, search, direction)?;
    Some(&source[..found.start])
}

/// The part of `source` right of the first occurrence of `search`.
pub fn right_of<'a>(source: &'a str, search: &str) -> Option<&'a str> {
    right_of_with(source, search, SearchDirection::FromLeft, Comparison::Ordinal)
}

/// The part of `source` right of `search`, found from `direction` under
/// `comparison`. A match that runs to the end yields `Some("")`.
pub fn right_of_with<'a>(
    source: &'a str,
    search: &str,
    direction: SearchDirection,
    comparison: Comparison,
) -> Option<&'a str> {
    let found = comparison.find(source, search, direction)?;
    Some(&source[found.end..])
}

/// Byte offset of the `index`-th character, or `None` past the end.
fn char_offset(source: &str, index: isize) -> Result<Option<usize>, StringError> {
    let index = usize::try_from(index)
        .map_err(|_| StringError::invalid("index", "an index of less than 0 is not valid"))?;
    Ok(source.char_indices().nth(index).map(|(offset, _)| offset))
}

/// Characters of `source` before `index`. An index at or past the end returns
/// the whole source.
pub fn left_of_index(source: &str, index: isize) -> Result<&str, StringError> {
    Ok(match char_offset(source, index)? {
        Some(offset) => &source[..offset],
        None => source,
    })
}

/// Characters of `source` from `index` (inclusive) to the end. `None` if the
/// index is at or past the end.
pub fn right_of_index(source: &str, index: isize) -> Result<Option<&str>, StringError> {
    Ok(char_offset(source, index)?.map(|offset| &source[offset..]))
}

/// Whether `source` contains `search` under `comparison`.
pub fn contains(source: &str, search: &str, comparison: Comparison) -> bool {
    comparison
        .find(source, search, SearchDirection::FromLeft)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_of() {
        assert_eq!(left_of("Domain\\Name", "\\"), Some("Domain"));
        assert_eq!(left_of("Domain\\", "\\"), Some("Domain"));
        assert_eq!(left_of("Domain\\Name", "\\Name"), Some("Domain"));
        assert_eq!(left_of("Domain\\Name", "\\Namea"), None);
        assert_eq!(left_of("Domain\\Name", "Domain"), Some(""));
        assert_eq!(left_of("Domain\\Domain\\Name", "Domain\\"), Some(""));
        assert_eq!(
            left_of_with(
                "Domain\\Domain\\Name",
                "Domain\\",
                SearchDirection::FromRight,
                Comparison::Ordinal
            ),
            Some("Domain\\")
        );
    }

    #[test]
    fn test_right_of() {
        assert_eq!(right_of("Domain\\Name", "\\"), Some("Name"));
        assert_eq!(right_of("Domain\\", "\\"), Some(""));
        assert_eq!(right_of("Domain\\Name", "Domain\\"), Some("Name"));
        assert_eq!(right_of("Domain\\Name", "\\Namea"), None);
        assert_eq!(right_of("Domain\\Name", "Domain"), Some("\\Name"));
        assert_eq!(
            right_of("Domain\\Name\\Name\\Name", "\\Name"),
            Some("\\Name\\Name")
        );
        assert_eq!(
            right_of_with(
                "Domain\\Name\\Name\\Name",
                "\\Name",
                SearchDirection::FromRight,
                Comparison::Ordinal
            ),
            Some("")
        );
    }

    #[test]
    fn test_ignore_case() {
        let cmp = Comparison::OrdinalIgnoreCase;
        assert_eq!(
            left_of_with("Domain\\Name", "\\NAME", SearchDirection::FromLeft, cmp),
            Some("Domain")
        );
        assert_eq!(
            right_of_with("ÄbcÄBC", "äb", SearchDirection::FromRight, cmp),
            Some("C")
        );
        assert_eq!(
            left_of_with("Domain\\Name", "\\NAME", SearchDirection::FromLeft, Comparison::Ordinal),
            None
        );
        assert!(contains("Domain\\Name", "\\name", Comparison::InvariantCultureIgnoreCase));
        assert!(!contains("Domain\\Name", "\\name", Comparison::CurrentCulture));
    }

    #[test]
    fn test_empty_search() {
        assert_eq!(left_of("abc", ""), Some(""));
        assert_eq!(right_of("abc", ""), Some("abc"));
        assert_eq!(
            right_of_with("abc", "", SearchDirection::FromRight, Comparison::Ordinal),
            Some("")
        );
    }

    #[test]
    fn test_index_slicing() {
        assert_eq!(right_of_index("Domain\\Name", 11).unwrap(), None);
        assert_eq!(right_of_index("Domain\\Name", 10).unwrap(), Some("e"));
        assert_eq!(right_of_index("Domain\\Name", 0).unwrap(), Some("Domain\\Name"));

        assert_eq!(left_of_index("Domain\\Name", 11).unwrap(), "Domain\\Name");
        assert_eq!(left_of_index("Domain\\Name", 10).unwrap(), "Domain\\Nam");
        assert_eq!(left_of_index("Domain\\Name", 0).unwrap(), "");
    }

    #[test]
    fn test_index_counts_chars() {
        assert_eq!(left_of_index("héllo", 2).unwrap(), "hé");
        assert_eq!(right_of_index("héllo", 1).unwrap(), Some("éllo"));
    }

    #[test]
    fn test_negative_index() {
        assert!(matches!(
            left_of_index("abc", -1),
            Err(StringError::InvalidArgument { name: "index", .. })
        ));
        assert!(right_of_index("abc", -5).is_err());
    }

    #[test]
    fn test_compare() {
        assert_eq!(Comparison::Ordinal.compare("a", "B"), Ordering::Greater);
        assert_eq!(Comparison::OrdinalIgnoreCase.compare("a", "B"), Ordering::Less);
        assert!(Comparison::OrdinalIgnoreCase.equals("Attribute", "ATTRIBUTE"));
        assert!(!Comparison::Ordinal.equals("Attribute", "ATTRIBUTE"));
    }
}
