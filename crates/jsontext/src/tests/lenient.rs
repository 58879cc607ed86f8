use pretty_assertions::assert_eq;

use super::read_tokens;
use crate::{JsonToken, JsonValue};

#[test]
fn comments_are_tokens_not_noise() {
    let tokens = read_tokens("[1,/*mid*/2]//end");
    assert_eq!(
        tokens,
        vec![
            (JsonToken::StartArray, JsonValue::None),
            (JsonToken::Integer, JsonValue::Int(1)),
            (JsonToken::Comment, JsonValue::Str("mid".into())),
            (JsonToken::Integer, JsonValue::Int(2)),
            (JsonToken::EndArray, JsonValue::None),
            (JsonToken::Comment, JsonValue::Str("end".into())),
        ]
    );
}

#[test]
fn leading_line_comment() {
    let tokens = read_tokens("// header\n{}");
    assert_eq!(tokens[0], (JsonToken::Comment, JsonValue::Str(" header".into())));
    assert_eq!(tokens[1].0, JsonToken::StartObject);
}

#[test]
fn block_comment_spans_lines() {
    let tokens = read_tokens("/* a\n b */ null");
    assert_eq!(tokens[0].1, JsonValue::Str(" a\n b ".into()));
    assert_eq!(tokens[1].0, JsonToken::Null);
}

#[test]
fn comment_between_property_and_value() {
    let tokens = read_tokens("{\"a\": /*v*/ 1}");
    assert_eq!(tokens[2].0, JsonToken::Comment);
    assert_eq!(tokens[3].1, JsonValue::Int(1));
}

#[test]
fn single_quoted_strings_and_names() {
    let tokens = read_tokens("{'a':'b\\'c'}");
    assert_eq!(tokens[1].1, JsonValue::Str("a".into()));
    assert_eq!(tokens[2].1, JsonValue::Str("b'c".into()));
}

#[test]
fn unquoted_property_names() {
    let tokens = read_tokens("{a:1, $b_1:2, _c : 3}");
    let names: Vec<_> = tokens
        .iter()
        .filter(|(t, _)| *t == JsonToken::PropertyName)
        .map(|(_, v)| v.as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, vec!["a", "$b_1", "_c"]);
}

#[test]
fn constructor_tokens() {
    let tokens = read_tokens("new Date(0)");
    assert_eq!(
        tokens,
        vec![
            (JsonToken::StartConstructor, JsonValue::Str("Date".into())),
            (JsonToken::Integer, JsonValue::Int(0)),
            (JsonToken::EndConstructor, JsonValue::None),
        ]
    );
}

#[test]
fn constructor_nested_in_object() {
    let tokens = read_tokens("{\"d\": new Date(12, 'x')}");
    assert_eq!(
        tokens[2],
        (JsonToken::StartConstructor, JsonValue::Str("Date".into()))
    );
    assert_eq!(tokens[3].1, JsonValue::Int(12));
    assert_eq!(tokens[4].1, JsonValue::Str("x".into()));
    assert_eq!(tokens[5].0, JsonToken::EndConstructor);
    assert_eq!(tokens[6].0, JsonToken::EndObject);
}

#[test]
fn constructor_paths_use_argument_indices() {
    let mut reader = crate::JsonTextReader::from_str("new Thing(1,2)");
    use crate::JsonReader;
    assert!(reader.read().unwrap());
    assert!(reader.read().unwrap());
    assert_eq!(reader.path(), "[0]");
    assert!(reader.read().unwrap());
    assert_eq!(reader.path(), "[1]");
}
