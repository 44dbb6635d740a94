//! Integration tests for separated-value normalization.

use levitate_strings::{
    EntryFlags, SeparatedValues, SeparatorSpaceFlags, StrExt, SuffixedSeparatedValues,
};

fn all_space_flags() -> [SeparatorSpaceFlags; 4] {
    [
        SeparatorSpaceFlags::NONE,
        SeparatorSpaceFlags::ADD_SPACE_AFTER,
        SeparatorSpaceFlags::ADD_SPACE_BEFORE,
        SeparatorSpaceFlags::ADD_SPACE_AFTER | SeparatorSpaceFlags::ADD_SPACE_BEFORE,
    ]
}

fn all_entry_flags() -> [EntryFlags; 4] {
    [
        EntryFlags::NONE,
        EntryFlags::TRIM_ENTRIES,
        EntryFlags::REMOVE_EMPTY_ENTRIES,
        EntryFlags::TRIM_ENTRIES | EntryFlags::REMOVE_EMPTY_ENTRIES,
    ]
}

const SOURCES: &[&str] = &[
    "Foo,Bar,Baz",
    "Foo ,Bar, Baz,,,",
    " , a",
    "",
    "  ",
    "a , b ,c",
    "x,,y, ,z",
];

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_defaults_scenario() {
    let values = SeparatedValues::parse("Foo,Bar,Baz");
    assert_eq!(values.items(), ["Foo", "Bar", "Baz"]);
    assert_eq!(values.value(), "Foo, Bar, Baz");
}

#[test]
fn test_trim_without_removal_scenario() {
    let values = SeparatedValues::new(
        "Foo ,Bar, Baz,,,",
        ",",
        SeparatorSpaceFlags::NONE,
        EntryFlags::TRIM_ENTRIES,
    )
    .unwrap();
    assert_eq!(values.items(), ["Foo", "Bar", "Baz", "", "", ""]);
    assert_eq!(values.value(), "Foo,Bar,Baz,,,");
}

#[test]
fn test_suffixed_scenario() {
    let values = SuffixedSeparatedValues::new(
        "Foo, Bar,Baz",
        "Attribute",
        ",",
        SeparatorSpaceFlags::ADD_SPACE_AFTER,
    )
    .unwrap();
    assert_eq!(values.value(), "FooAttribute, BarAttribute, BazAttribute");
    assert_eq!(
        values.compare_items(),
        ["FooAttribute", "BarAttribute", "BazAttribute", "Foo", "Bar", "Baz"]
    );
}

// =============================================================================
// Properties over every flag combination
// =============================================================================

#[test]
fn test_value_is_items_joined() {
    for source in SOURCES {
        for space in all_space_flags() {
            for entries in all_entry_flags() {
                let values = SeparatedValues::new(source, ",", space, entries).unwrap();
                assert_eq!(
                    values.items().join(values.separators().joiner()),
                    values.value(),
                    "source={source:?} space={space} entries={entries}"
                );
            }
        }
    }
}

#[test]
fn test_reparse_is_idempotent() {
    for source in SOURCES {
        for space in all_space_flags() {
            for entries in all_entry_flags() {
                let first = SeparatedValues::new(source, ",", space, entries).unwrap();
                let second = SeparatedValues::new(first.value(), ",", space, entries).unwrap();
                assert_eq!(
                    first.items(),
                    second.items(),
                    "source={source:?} space={space} entries={entries}"
                );
                assert_eq!(first.value(), second.value());
            }
        }
    }
}

#[test]
fn test_remove_empty_never_leaves_blank_items() {
    for source in SOURCES {
        for space in all_space_flags() {
            let values =
                SeparatedValues::new(source, ",", space, EntryFlags::REMOVE_EMPTY_ENTRIES).unwrap();
            assert!(values.items().iter().all(|i| !i.trim().is_empty()));
        }
    }
}

#[test]
fn test_trim_and_remove_drops_entries_empty_after_trim() {
    let values = SeparatedValues::new(" , a", ",", SeparatorSpaceFlags::NONE, EntryFlags::default())
        .unwrap();
    assert_eq!(values.items(), ["a"]);
}

#[test]
fn test_suffix_is_idempotent() {
    let first = SuffixedSeparatedValues::parse("Foo, Bar,Baz", "Attribute").unwrap();
    let second = SuffixedSeparatedValues::parse(first.value(), "Attribute").unwrap();
    assert_eq!(first.items(), second.items());
    assert_eq!(first.value(), second.value());
    assert_eq!(first.compare_items(), second.compare_items());
}

#[test]
fn test_compare_items_correspondence() {
    for source in ["a,b", "aX, bX, c", "", "X", "one,two,three,four"] {
        let values = SuffixedSeparatedValues::parse(source, "X").unwrap();
        let count = values.len();
        assert_eq!(values.compare_items().len(), count * 2);
        for i in 0..count {
            let suffixed = &values.compare_items()[i];
            let plain = &values.compare_items()[i + count];
            assert_eq!(suffixed, &format!("{plain}X"), "source={source:?}");
        }
    }
}

#[test]
fn test_suffixed_space_flags() {
    let none = SuffixedSeparatedValues::new("a;b", "!", ";", SeparatorSpaceFlags::NONE).unwrap();
    assert_eq!(none.value(), "a!;b!");

    let before =
        SuffixedSeparatedValues::new("a;b", "!", ";", SeparatorSpaceFlags::ADD_SPACE_BEFORE)
            .unwrap();
    assert_eq!(before.value(), "a! ;b!");
}

#[test]
fn test_extension_trait() {
    let values = "Foo,,Bar".separated_values();
    assert_eq!(values.items(), ["Foo", "Bar"]);

    let suffixed = "Foo".suffixed_values("Attribute").unwrap();
    assert_eq!(suffixed.items(), ["FooAttribute"]);
}

#[test]
fn test_serde_as_canonical_string() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Manifest {
        deps: SeparatedValues,
    }

    let manifest: Manifest = toml::from_str("deps = \"openssl,zlib,, ncurses\"").unwrap();
    assert_eq!(manifest.deps.items(), ["openssl", "zlib", "ncurses"]);

    let text = toml::to_string(&manifest).unwrap();
    assert_eq!(text.trim(), "deps = \"openssl, zlib, ncurses\"");
}
