//! Rhai bindings.
//!
//! Registers the helpers with a Rhai engine so recipe scripts can use them:
//!
//! ```rhai
//! let domain = left_of(user, "\\");          // () if there is no '\'
//! let libs = separated_values(LIBS);         // ["ssl", "crypto", ...]
//! let attrs = suffixed_values(names, "Attribute");
//! ```
//!
//! "Not found" results are `()`. Invalid arguments raise a script error.

use rhai::{Array, Dynamic, Engine, EvalAltResult, INT};

use crate::convert;
use crate::flags::{EntryFlags, SeparatorSpaceFlags};
use crate::search::{self, Comparison, SearchDirection};
use crate::separated::SeparatedValues;
use crate::suffixed::SuffixedSeparatedValues;

/// Register all string helpers with the Rhai engine
pub fn register_all(engine: &mut Engine) {
    // Directional search
    engine.register_fn("left_of", left_of);
    engine.register_fn("left_of_last", left_of_last);
    engine.register_fn("right_of", right_of);
    engine.register_fn("right_of_last", right_of_last);
    engine.register_fn("left_of_index", left_of_index);
    engine.register_fn("right_of_index", right_of_index);

    // Separated values
    engine.register_fn("separated_values", separated_values);
    engine.register_fn("separated_value", separated_value);
    engine.register_fn("separated_values_with", separated_values_with);
    engine.register_fn("suffixed_values", suffixed_values);
    engine.register_fn("suffixed_compare_values", suffixed_compare_values);

    // Parsing and predicates
    engine.register_fn("try_parse_int", try_parse_int);
    engine.register_fn("try_parse_float", try_parse_float);
    engine.register_fn("try_parse_bool", try_parse_bool);
    engine.register_fn("is_blank", convert::is_blank);
    engine.register_fn("reverse", convert::reverse);
}

fn optional(found: Option<&str>) -> Dynamic {
    found.map_or(Dynamic::UNIT, |s| Dynamic::from(s.to_string()))
}

fn to_array(items: &[String]) -> Array {
    items.iter().map(|s| Dynamic::from(s.clone())).collect()
}

/// Clamp a script integer into `isize`, keeping its sign.
fn to_index(index: INT) -> isize {
    isize::try_from(index).unwrap_or(if index < 0 { isize::MIN } else { isize::MAX })
}

fn left_of(source: &str, search: &str) -> Dynamic {
    optional(search::left_of(source, search))
}

fn left_of_last(source: &str, search: &str) -> Dynamic {
    optional(search::left_of_with(
        source,
        search,
        SearchDirection::FromRight,
        Comparison::Ordinal,
    ))
}

fn right_of(source: &str, search: &str) -> Dynamic {
    optional(search::right_of(source, search))
}

fn right_of_last(source: &str, search: &str) -> Dynamic {
    optional(search::right_of_with(
        source,
        search,
        SearchDirection::FromRight,
        Comparison::Ordinal,
    ))
}

fn left_of_index(source: &str, index: INT) -> Result<String, Box<EvalAltResult>> {
    search::left_of_index(source, to_index(index))
        .map(str::to_string)
        .map_err(|e| e.to_string().into())
}

fn right_of_index(source: &str, index: INT) -> Result<Dynamic, Box<EvalAltResult>> {
    search::right_of_index(source, to_index(index))
        .map(optional)
        .map_err(|e| e.to_string().into())
}

fn separated_values(source: &str) -> Array {
    to_array(SeparatedValues::parse(source).items())
}

fn separated_value(source: &str) -> String {
    SeparatedValues::parse(source).value().to_string()
}

/// `space` and `entries` use the flag text form, e.g. `"after|before"`.
fn separated_values_with(
    source: &str,
    separator: &str,
    space: &str,
    entries: &str,
) -> Result<Array, Box<EvalAltResult>> {
    let space: SeparatorSpaceFlags = space.parse().map_err(|e: crate::ConfigError| e.to_string())?;
    let entries: EntryFlags = entries.parse().map_err(|e: crate::ConfigError| e.to_string())?;
    let values = SeparatedValues::new(source, separator, space, entries)
        .map_err(|e| e.to_string())?;
    Ok(to_array(values.items()))
}

fn suffixed_values(source: &str, suffix: &str) -> Result<Array, Box<EvalAltResult>> {
    let values = SuffixedSeparatedValues::parse(source, suffix).map_err(|e| e.to_string())?;
    Ok(to_array(values.items()))
}

fn suffixed_compare_values(source: &str, suffix: &str) -> Result<Array, Box<EvalAltResult>> {
    let values = SuffixedSeparatedValues::parse(source, suffix).map_err(|e| e.to_string())?;
    Ok(to_array(values.compare_items()))
}

fn try_parse_int(source: &str) -> Dynamic {
    convert::try_parse::<INT>(source).map_or(Dynamic::UNIT, Dynamic::from)
}

fn try_parse_float(source: &str) -> Dynamic {
    convert::try_parse::<rhai::FLOAT>(source).map_or(Dynamic::UNIT, Dynamic::from)
}

fn try_parse_bool(source: &str) -> Dynamic {
    convert::try_parse_bool(source).map_or(Dynamic::UNIT, Dynamic::from)
}
