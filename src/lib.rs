//! String helpers for LevitateOS
//!
//! Three groups of helpers, all pure functions or immutable values:
//!
//! - **Separated values**: [`SeparatedValues`] parses `"a, b,,c"` style lists
//!   into entries and a canonical string. [`SuffixedSeparatedValues`] also
//!   makes every entry end with a suffix and keeps the unsuffixed forms for
//!   comparison.
//! - **Directional search**: [`left_of`], [`right_of`] and their index
//!   counterparts. "Not found" is `None`, a match at the boundary is
//!   `Some("")`.
//! - **Safe parsing**: `try_parse_*` / `is_*` wrappers in [`convert`].
//!
//! # Example
//!
//! ```
//! use levitate_strings::{SeparatedValues, SeparatorSpaceFlags, EntryFlags, StrExt};
//!
//! let values = SeparatedValues::new(
//!     "Foo ,Bar, Baz,,,",
//!     ",",
//!     SeparatorSpaceFlags::NONE,
//!     EntryFlags::TRIM_ENTRIES,
//! )?;
//! assert_eq!(values.items(), ["Foo", "Bar", "Baz", "", "", ""]);
//! assert_eq!(values.value(), "Foo,Bar,Baz,,,");
//!
//! assert_eq!("Domain\\Name".right_of("\\"), Some("Name"));
//! # Ok::<(), levitate_strings::StringError>(())
//! ```
//!
//! # Configuration
//!
//! Named profiles can be kept in `levitate/strings.toml` under the XDG config
//! directories; see [`config`].
//!
//! # Scripting
//!
//! With the `rhai` feature (default), [`script::register_all`] exposes the
//! helpers to Rhai scripts.

pub mod config;
pub mod convert;
mod error;
mod ext;
mod flags;
pub mod search;
mod separated;
mod suffixed;

#[cfg(feature = "rhai")]
pub mod script;

pub use config::{Normalized, NormalizerProfile, ProfileSet};
pub use error::{ConfigError, StringError};
pub use ext::StrExt;
pub use flags::{EntryFlags, SeparatorSpaceFlags};
pub use search::{
    Comparison, SearchDirection, left_of, left_of_index, left_of_with, right_of, right_of_index,
    right_of_with,
};
pub use separated::{DEFAULT_SEPARATOR, SeparatedValues, SeparatedValuesOptions, Separators};
pub use suffixed::SuffixedSeparatedValues;
