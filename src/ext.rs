//! Method syntax for the helpers.
//!
//! ```
//! use levitate_strings::StrExt;
//!
//! assert_eq!("Domain\\Name".left_of("\\"), Some("Domain"));
//! assert_eq!("Domain\\Name".right_of_index(11).unwrap(), None);
//! assert_eq!("a,b".separated_values().value(), "a, b");
//! ```

use std::str::FromStr;

use crate::convert;
use crate::error::StringError;
use crate::search::{self, Comparison, SearchDirection};
use crate::separated::SeparatedValues;
use crate::suffixed::SuffixedSeparatedValues;

pub trait StrExt {
    fn left_of(&self, search: &str) -> Option<&str>;

    fn left_of_with(
        &self,
        search: &str,
        direction: SearchDirection,
        comparison: Comparison,
    ) -> Option<&str>;

    fn right_of(&self, search: &str) -> Option<&str>;

    fn right_of_with(
        &self,
        search: &str,
        direction: SearchDirection,
        comparison: Comparison,
    ) -> Option<&str>;

    fn left_of_index(&self, index: isize) -> Result<&str, StringError>;

    fn right_of_index(&self, index: isize) -> Result<Option<&str>, StringError>;

    fn contains_with(&self, search: &str, comparison: Comparison) -> bool;

    fn reverse_chars(&self) -> String;

    fn is_blank(&self) -> bool;

    fn try_parse<T: FromStr>(&self) -> Option<T>;

    fn is_parsable<T: FromStr>(&self) -> bool;

    /// Parse with the default separated-value settings.
    fn separated_values(&self) -> SeparatedValues;

    fn suffixed_values(&self, suffix: &str) -> Result<SuffixedSeparatedValues, StringError>;
}

impl StrExt for str {
    fn left_of(&self, search: &str) -> Option<&str> {
        search::left_of(self, search)
    }

    fn left_of_with(
        &self,
        search: &str,
        direction: SearchDirection,
        comparison: Comparison,
    ) -> Option<&str> {
        search::left_of_with(self, search, direction, comparison)
    }

    fn right_of(&self, search: &str) -> Option<&str> {
        search::right_of(self, search)
    }

    fn right_of_with(
        &self,
        search: &str,
        direction: SearchDirection,
        comparison: Comparison,
    ) -> Option<&str> {
        search::right_of_with(self, search, direction, comparison)
    }

    fn left_of_index(&self, index: isize) -> Result<&str, StringError> {
        search::left_of_index(self, index)
    }

    fn right_of_index(&self, index: isize) -> Result<Option<&str>, StringError> {
        search::right_of_index(self, index)
    }

    fn contains_with(&self, search: &str, comparison: Comparison) -> bool {
        search::contains(self, search, comparison)
    }

    fn reverse_chars(&self) -> String {
        convert::reverse(self)
    }

    fn is_blank(&self) -> bool {
        convert::is_blank(self)
    }

    fn try_parse<T: FromStr>(&self) -> Option<T> {
        convert::try_parse(self)
    }

    fn is_parsable<T: FromStr>(&self) -> bool {
        convert::is_parsable::<T>(self)
    }

    fn separated_values(&self) -> SeparatedValues {
        SeparatedValues::parse(self)
    }

    fn suffixed_values(&self, suffix: &str) -> Result<SuffixedSeparatedValues, StringError> {
        SuffixedSeparatedValues::parse(self, suffix)
    }
}
