//! Writing side: the token-writing surface and its text implementation.

mod text;

pub use text::JsonTextWriter;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::error::WriteError;
use crate::token::{JsonToken, JsonValue};

/// The token-writing surface, mirroring [`crate::JsonReader`].
///
/// Structural methods enforce the token grammar: a token that is illegal in
/// the writer's current state fails with [`WriteError::InvalidState`] and
/// writes nothing. The typed `write_*` value methods are provided on top of
/// [`JsonWriter::write_value`], and [`JsonWriter::write_token`] replays a
/// token/value pair as produced by a reader.
pub trait JsonWriter {
    /// Writes `{` and enters the object.
    fn write_start_object(&mut self) -> Result<(), WriteError>;

    /// Writes `}`.
    fn write_end_object(&mut self) -> Result<(), WriteError>;

    /// Writes `[` and enters the array.
    fn write_start_array(&mut self) -> Result<(), WriteError>;

    /// Writes `]`.
    fn write_end_array(&mut self) -> Result<(), WriteError>;

    /// Writes `new <name>(` and enters the constructor.
    fn write_start_constructor(&mut self, name: &str) -> Result<(), WriteError>;

    /// Writes `)`.
    fn write_end_constructor(&mut self) -> Result<(), WriteError>;

    /// Closes the innermost open container, whatever its kind.
    fn write_end(&mut self) -> Result<(), WriteError>;

    /// Writes a property name and its `:` separator.
    fn write_property_name(&mut self, name: &str) -> Result<(), WriteError>;

    /// Writes a scalar value in its canonical text form.
    fn write_value(&mut self, value: &JsonValue) -> Result<(), WriteError>;

    /// Writes `undefined`.
    fn write_undefined(&mut self) -> Result<(), WriteError>;

    /// Writes a `/* */` comment. Comments are legal anywhere and do not
    /// change the writer's state.
    fn write_comment(&mut self, text: &str) -> Result<(), WriteError>;

    /// Appends verbatim text with no validation and no state change.
    fn write_raw(&mut self, json: &str) -> Result<(), WriteError>;

    /// Writes verbatim text in a value position.
    fn write_raw_value(&mut self, json: &str) -> Result<(), WriteError>;

    /// JSONPath-style path to the last written token.
    fn path(&self) -> String;

    /// Marks the writer closed. Open containers are not auto-completed.
    fn close(&mut self);

    /// Writes `null`.
    fn write_null(&mut self) -> Result<(), WriteError> {
        self.write_value(&JsonValue::None)
    }

    /// Writes a boolean value.
    fn write_bool(&mut self, value: bool) -> Result<(), WriteError> {
        self.write_value(&JsonValue::Bool(value))
    }

    /// Writes a 64-bit integer value.
    fn write_i64(&mut self, value: i64) -> Result<(), WriteError> {
        self.write_value(&JsonValue::Int(value))
    }

    /// Writes an arbitrary-precision integer value.
    fn write_bigint(&mut self, value: &BigInt) -> Result<(), WriteError> {
        self.write_value(&JsonValue::BigInt(value.clone()))
    }

    /// Writes a double value. Fraction-less finite doubles keep a `.0`
    /// suffix so they read back as `Float`, and non-finite doubles are
    /// written as bare `NaN`/`Infinity`/`-Infinity` literals.
    fn write_f64(&mut self, value: f64) -> Result<(), WriteError> {
        self.write_value(&JsonValue::Float(value))
    }

    /// Writes a fixed-point decimal value.
    fn write_decimal(&mut self, value: Decimal) -> Result<(), WriteError> {
        self.write_value(&JsonValue::Decimal(value))
    }

    /// Writes an escaped, quoted string value.
    fn write_string(&mut self, value: &str) -> Result<(), WriteError> {
        self.write_value(&JsonValue::Str(value.to_owned()))
    }

    /// Writes a date-time as a quoted ISO 8601 string.
    fn write_datetime(&mut self, value: NaiveDateTime) -> Result<(), WriteError> {
        self.write_value(&JsonValue::DateTime(value))
    }

    /// Writes an offset date-time as a quoted ISO 8601 string.
    fn write_datetime_offset(&mut self, value: DateTime<FixedOffset>) -> Result<(), WriteError> {
        self.write_value(&JsonValue::DateTimeOffset(value))
    }

    /// Writes a byte sequence as a quoted base64 string.
    fn write_bytes(&mut self, value: &[u8]) -> Result<(), WriteError> {
        self.write_value(&JsonValue::Bytes(value.to_vec()))
    }

    /// Replays a token/value pair as produced by a reader.
    fn write_token(&mut self, token: JsonToken, value: &JsonValue) -> Result<(), WriteError> {
        match token {
            JsonToken::None => Ok(()),
            JsonToken::StartObject => self.write_start_object(),
            JsonToken::EndObject => self.write_end_object(),
            JsonToken::StartArray => self.write_start_array(),
            JsonToken::EndArray => self.write_end_array(),
            JsonToken::StartConstructor => {
                self.write_start_constructor(value.as_str().unwrap_or(""))
            }
            JsonToken::EndConstructor => self.write_end_constructor(),
            JsonToken::PropertyName => self.write_property_name(value.as_str().unwrap_or("")),
            JsonToken::Comment => self.write_comment(value.as_str().unwrap_or("")),
            JsonToken::Raw => self.write_raw(value.as_str().unwrap_or("")),
            JsonToken::Null => self.write_null(),
            JsonToken::Undefined => self.write_undefined(),
            JsonToken::Integer
            | JsonToken::Float
            | JsonToken::String
            | JsonToken::Boolean
            | JsonToken::Date
            | JsonToken::Bytes => self.write_value(value),
        }
    }
}
