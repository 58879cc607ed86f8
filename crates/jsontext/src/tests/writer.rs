use pretty_assertions::assert_eq;

use crate::{Formatting, JsonTextWriter, JsonWriter, WriteError, WriterOptions};

fn collect<F>(build: F) -> String
where
    F: FnOnce(&mut JsonTextWriter<&mut String>),
{
    collect_with(WriterOptions::default(), build)
}

fn collect_with<F>(options: WriterOptions, build: F) -> String
where
    F: FnOnce(&mut JsonTextWriter<&mut String>),
{
    let mut out = String::new();
    let mut writer = JsonTextWriter::with_options(&mut out, options);
    build(&mut writer);
    drop(writer);
    out
}

#[test]
fn compact_object() {
    let out = collect(|w| {
        w.write_start_object().unwrap();
        w.write_property_name("name").unwrap();
        w.write_string("value").unwrap();
        w.write_property_name("list").unwrap();
        w.write_start_array().unwrap();
        w.write_i64(1).unwrap();
        w.write_bool(false).unwrap();
        w.write_null().unwrap();
        w.write_end_array().unwrap();
        w.write_end_object().unwrap();
    });
    assert_eq!(out, r#"{"name":"value","list":[1,false,null]}"#);
}

#[test]
fn indented_formatting() {
    let options = WriterOptions {
        formatting: Formatting::Indented,
        ..WriterOptions::default()
    };
    let out = collect_with(options, |w| {
        w.write_start_object().unwrap();
        w.write_property_name("a").unwrap();
        w.write_start_array().unwrap();
        w.write_i64(1).unwrap();
        w.write_i64(2).unwrap();
        w.write_end_array().unwrap();
        w.write_end_object().unwrap();
    });
    assert_eq!(out, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
}

#[test]
fn empty_containers_stay_tight_when_indented() {
    let options = WriterOptions {
        formatting: Formatting::Indented,
        ..WriterOptions::default()
    };
    let out = collect_with(options, |w| {
        w.write_start_object().unwrap();
        w.write_property_name("a").unwrap();
        w.write_start_array().unwrap();
        w.write_end_array().unwrap();
        w.write_end_object().unwrap();
    });
    assert_eq!(out, "{\n  \"a\": []\n}");
}

#[test]
fn constructors_are_never_indented() {
    let options = WriterOptions {
        formatting: Formatting::Indented,
        ..WriterOptions::default()
    };
    let out = collect_with(options, |w| {
        w.write_start_constructor("Date").unwrap();
        w.write_i64(1).unwrap();
        w.write_i64(2).unwrap();
        w.write_end_constructor().unwrap();
    });
    assert_eq!(out, "new Date(1,2)");
}

#[test]
fn string_escaping() {
    let out = collect(|w| {
        w.write_string("line\n\"q\"\ttab\u{2028}").unwrap();
    });
    assert_eq!(out, "\"line\\n\\\"q\\\"\\ttab\\u2028\"");
}

#[test]
fn single_quote_option() {
    let options = WriterOptions {
        quote_char: '\'',
        ..WriterOptions::default()
    };
    let out = collect_with(options, |w| {
        w.write_string("it's").unwrap();
    });
    assert_eq!(out, r"'it\'s'");
}

#[test]
fn bytes_write_as_base64() {
    let out = collect(|w| w.write_bytes(&[1, 2, 3]).unwrap());
    assert_eq!(out, "\"AQID\"");
}

#[test]
fn doubles_round_trippable() {
    let out = collect(|w| {
        w.write_start_array().unwrap();
        w.write_f64(1.0).unwrap();
        w.write_f64(f64::NAN).unwrap();
        w.write_f64(f64::NEG_INFINITY).unwrap();
        w.write_end_array().unwrap();
    });
    assert_eq!(out, "[1.0,NaN,-Infinity]");
}

#[test]
fn value_in_property_position_is_invalid() {
    let mut out = String::new();
    let mut writer = JsonTextWriter::new(&mut out);
    writer.write_start_object().unwrap();
    let err = writer.write_i64(1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Token Integer in state Object would result in an invalid JSON object. Path ''."
    );
    // The writer stays usable.
    writer.write_property_name("a").unwrap();
    writer.write_i64(1).unwrap();
    writer.write_end_object().unwrap();
    drop(writer);
    assert_eq!(out, r#"{"a":1}"#);
}

#[test]
fn closing_after_a_dangling_property_is_invalid() {
    let mut out = String::new();
    let mut writer = JsonTextWriter::new(&mut out);
    writer.write_start_object().unwrap();
    writer.write_property_name("a").unwrap();
    let err = writer.write_end_object().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Token EndObject in state Property would result in an invalid JSON object. Path 'a'."
    );
}

#[test]
fn nothing_to_close_at_the_root() {
    let mut out = String::new();
    let mut writer = JsonTextWriter::new(&mut out);
    let err = writer.write_end().unwrap_err();
    assert!(matches!(err, WriteError::NothingToClose { .. }));
    assert_eq!(err.to_string(), "No token to close. Path ''.");
}

#[test]
fn mismatched_closer_is_invalid() {
    let mut out = String::new();
    let mut writer = JsonTextWriter::new(&mut out);
    writer.write_start_array().unwrap();
    assert!(writer.write_end_object().is_err());
    // A generic end still closes the array.
    writer.write_end().unwrap();
    drop(writer);
    assert_eq!(out, "[]");
}

#[test]
fn closed_writer_rejects_tokens() {
    let mut out = String::new();
    let mut writer = JsonTextWriter::new(&mut out);
    writer.close();
    assert!(writer.write_i64(1).is_err());
    assert!(writer.write_raw("x").is_err());
    drop(writer);
    assert!(out.is_empty());
}

#[test]
fn multiple_root_values_are_allowed() {
    let out = collect(|w| {
        w.write_i64(1).unwrap();
        w.write_string("two").unwrap();
    });
    assert_eq!(out, "1 \"two\"");
}

#[test]
fn adjacent_root_numbers_stay_distinct_tokens() {
    // Without a separator, two root integers would fuse into one literal.
    let out = collect(|w| {
        w.write_i64(1).unwrap();
        w.write_i64(2).unwrap();
        w.write_null().unwrap();
    });
    assert_eq!(out, "1 2 null");
}

#[test]
fn raw_value_participates_in_separators() {
    let out = collect(|w| {
        w.write_start_array().unwrap();
        w.write_i64(1).unwrap();
        w.write_raw_value("0xFF").unwrap();
        w.write_end_array().unwrap();
    });
    assert_eq!(out, "[1,0xFF]");
}

#[test]
fn comments_are_transparent_to_the_grammar() {
    let out = collect(|w| {
        w.write_start_array().unwrap();
        w.write_i64(1).unwrap();
        w.write_comment("c").unwrap();
        w.write_i64(2).unwrap();
        w.write_end_array().unwrap();
    });
    assert_eq!(out, "[1/*c*/,2]");
}

#[test]
fn writer_path_tracks_position() {
    let mut out = String::new();
    let mut writer = JsonTextWriter::new(&mut out);
    writer.write_start_object().unwrap();
    writer.write_property_name("a").unwrap();
    writer.write_start_array().unwrap();
    writer.write_i64(1).unwrap();
    writer.write_i64(2).unwrap();
    assert_eq!(writer.path(), "a[1]");
}
