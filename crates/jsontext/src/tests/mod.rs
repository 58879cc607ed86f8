mod lenient;
mod limits;
mod parse_bad;
mod recovery;
mod writer;

use crate::{JsonReader, JsonTextReader, JsonToken, JsonValue, ReaderOptions};

/// Reads every token of `input`, panicking on any fault.
fn read_tokens(input: &str) -> Vec<(JsonToken, JsonValue)> {
    read_tokens_with(input, ReaderOptions::default())
}

fn read_tokens_with(input: &str, options: ReaderOptions) -> Vec<(JsonToken, JsonValue)> {
    let mut reader = JsonTextReader::from_str_with(input, options);
    let mut out = Vec::new();
    loop {
        match reader.read() {
            Ok(true) => out.push((reader.token_type(), reader.value().clone())),
            Ok(false) => return out,
            Err(e) => panic!("unexpected fault in {input:?}: {e}"),
        }
    }
}

/// The first fault produced while reading `input` to completion.
fn first_error(input: &str) -> String {
    first_error_with(input, ReaderOptions::default())
}

fn first_error_with(input: &str, options: ReaderOptions) -> String {
    let mut reader = JsonTextReader::from_str_with(input, options);
    loop {
        match reader.read() {
            Ok(true) => {}
            Ok(false) => panic!("no fault in {input:?}"),
            Err(e) => return e.to_string(),
        }
    }
}
