use rstest::rstest;

use super::first_error;
use crate::{CurrentState, JsonReader, JsonTextReader};

#[rstest]
#[case(
    "{}x",
    "Additional text encountered after finished reading JSON content: x. Path '', line 1, position 2."
)]
#[case(
    "[1 2]",
    "After parsing a value an unexpected character was encountered: 2. Path '[0]', line 1, position 3."
)]
#[case(
    "{\"a\" 1}",
    "Invalid character after parsing property name. Expected ':' but got: 1. Path '', line 1, position 5."
)]
#[case("{!}", "Invalid property identifier character: !. Path '', line 1, position 1.")]
#[case(
    "[}",
    "Unexpected character encountered while parsing value: }. Path '', line 1, position 1."
)]
#[case("\"abc", "Unterminated string. Expected delimiter: \". Path '', line 1, position 4.")]
#[case("'abc", "Unterminated string. Expected delimiter: '. Path '', line 1, position 4.")]
#[case("tru", "Unexpected end when reading JSON. Path '', line 1, position 3.")]
#[case("truE", "Error parsing boolean value. Path '', line 1, position 3.")]
#[case("nulz", "Error parsing null value. Path '', line 1, position 3.")]
#[case("/x", "Error parsing comment. Expected: *, got x. Path '', line 1, position 1.")]
#[case("/* comment", "Unexpected end while parsing comment. Path '', line 1, position 10.")]
#[case("new", "Unexpected end while parsing constructor. Path '', line 1, position 3.")]
#[case("new Date", "Unexpected end while parsing constructor. Path '', line 1, position 8.")]
#[case(
    "new Da+e(1)",
    "Unexpected character while parsing constructor: +. Path '', line 1, position 6."
)]
#[case(
    "{\"h\":\"\\u123!\"}",
    "Invalid Unicode escape sequence: \\u123!. Path 'h', line 1, position 12."
)]
#[case("\"a\\qb\"", "Bad JSON escape sequence: \\q. Path '', line 1, position 4.")]
#[case("\"a\\u12", "Unexpected end while parsing Unicode escape sequence. Path '', line 1, position 6.")]
#[case("09", "Input string '09' is not a valid number. Path '', line 1, position 2.")]
#[case("1.2.3", "Input string '1.2.3' is not a valid number. Path '', line 1, position 5.")]
#[case(
    "0aq2",
    "Unexpected character encountered while parsing number: q. Path '', line 1, position 2."
)]
#[case("{a!:1}", "Invalid JavaScript property identifier character: !. Path '', line 1, position 2.")]
fn exact_messages(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(first_error(input), expected);
}

#[test]
fn faults_are_repeatable() {
    let mut reader = JsonTextReader::from_str("[1 2]");
    assert!(reader.read().unwrap());
    assert!(reader.read().unwrap());
    let first = reader.read().unwrap_err().to_string();
    let second = reader.read().unwrap_err().to_string();
    assert_eq!(first, second);
}

#[test]
fn error_state_is_reported_then_cleared() {
    let mut reader = JsonTextReader::from_str("{}x");
    assert!(reader.read().unwrap());
    assert!(reader.read().unwrap());
    assert_eq!(reader.current_state(), CurrentState::Finished);
    assert!(reader.read().is_err());
    assert_eq!(reader.current_state(), CurrentState::Error);
}

#[test]
fn truncated_object_is_exhausted_at_token_boundary() {
    // End of input between tokens is not a parse fault; `read` reports
    // exhaustion and leaves the container open.
    let mut reader = JsonTextReader::from_str("{\"a\":1,");
    assert!(reader.read().unwrap());
    assert!(reader.read().unwrap());
    assert!(reader.read().unwrap());
    assert!(!reader.read().unwrap());
    assert_eq!(reader.depth(), 1);
}
