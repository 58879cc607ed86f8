use pretty_assertions::assert_eq;

use super::{first_error, read_tokens_with};
use crate::{JsonReader, JsonTextReader, JsonToken, JsonValue, ReaderOptions};

fn max_depth(depth: u32) -> ReaderOptions {
    ReaderOptions {
        max_depth: Some(depth),
        ..ReaderOptions::default()
    }
}

#[test]
fn max_depth_reported_once_per_offending_container() {
    let mut reader = JsonTextReader::from_str_with("[[[[]]],[[]]]", max_depth(1));
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    loop {
        match reader.read() {
            Ok(true) => tokens.push(reader.token_type()),
            Ok(false) => break,
            Err(e) => {
                // The container token is still applied; parsing continues
                // inside it.
                tokens.push(reader.token_type());
                errors.push(e.to_string());
            }
        }
    }
    assert_eq!(tokens.len(), 12);
    assert_eq!(
        errors,
        vec![
            "The reader's MaxDepth of 1 has been exceeded. Path '[0]', line 1, position 2."
                .to_owned(),
            "The reader's MaxDepth of 1 has been exceeded. Path '[1]', line 1, position 9."
                .to_owned(),
        ]
    );
}

#[test]
fn max_depth_not_hit_at_the_limit() {
    let tokens = read_tokens_with("[[],[]]", max_depth(2));
    assert_eq!(tokens.len(), 6);
}

#[test]
fn unlimited_depth() {
    let options = ReaderOptions {
        max_depth: None,
        ..ReaderOptions::default()
    };
    let deep: String = "[".repeat(200) + &"]".repeat(200);
    let tokens = read_tokens_with(&deep, options);
    assert_eq!(tokens.len(), 400);
}

#[test]
fn additional_text_is_rejected_by_default() {
    assert_eq!(
        first_error("1 2"),
        "Additional text encountered after finished reading JSON content: 2. Path '', line 1, position 2."
    );
}

#[test]
fn multiple_content_reads_concatenated_values() {
    let options = ReaderOptions {
        support_multiple_content: true,
        ..ReaderOptions::default()
    };
    let tokens = read_tokens_with("1 2 3", options);
    assert_eq!(
        tokens,
        vec![
            (JsonToken::Integer, JsonValue::Int(1)),
            (JsonToken::Integer, JsonValue::Int(2)),
            (JsonToken::Integer, JsonValue::Int(3)),
        ]
    );
}

#[test]
fn multiple_content_reads_json_lines() {
    let options = ReaderOptions {
        support_multiple_content: true,
        ..ReaderOptions::default()
    };
    let types: Vec<_> = read_tokens_with("{\"a\":1}\n{\"a\":2}", options)
        .into_iter()
        .map(|(t, _)| t)
        .collect();
    assert_eq!(
        types,
        vec![
            JsonToken::StartObject,
            JsonToken::PropertyName,
            JsonToken::Integer,
            JsonToken::EndObject,
            JsonToken::StartObject,
            JsonToken::PropertyName,
            JsonToken::Integer,
            JsonToken::EndObject,
        ]
    );
}
