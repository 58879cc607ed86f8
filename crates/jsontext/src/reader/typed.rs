//! Typed accessors, layered entirely on the [`JsonReader`] trait surface.
//!
//! Each accessor advances past comment tokens, maps `null`, `undefined`, a
//! closing `]`, and exhausted input to `None`, and otherwise coerces the
//! token to the target type. Coercion failures carry the reader's current
//! path and position and leave the reader usable.

use num_bigint::BigInt;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use super::JsonReader;
use super::dates::parse_offset;
use crate::error::{ErrorKind, ParseError, ReadError};
use crate::escape::from_base64;
use crate::options::Culture;
use crate::token::{JsonToken, JsonValue};

fn positioned<R: JsonReader + ?Sized>(r: &R, kind: ErrorKind) -> ReadError {
    ReadError::Parse(ParseError {
        kind,
        path: r.path(),
        line: r.line_number().max(1),
        position: r.line_position(),
    })
}

fn unexpected<R: JsonReader + ?Sized>(r: &R, target: &'static str) -> ReadError {
    positioned(
        r,
        ErrorKind::UnexpectedToken {
            target,
            token: r.token_type(),
        },
    )
}

/// Advances past comments to the next content token.
fn read_content<R: JsonReader + ?Sized>(r: &mut R) -> Result<bool, ReadError> {
    loop {
        if !r.read()? {
            return Ok(false);
        }
        if r.token_type() != JsonToken::Comment {
            return Ok(true);
        }
    }
}

fn is_null_like(token: JsonToken) -> bool {
    matches!(
        token,
        JsonToken::Null | JsonToken::Undefined | JsonToken::None | JsonToken::EndArray
    )
}

/// Strips group separators and maps the culture's decimal separator to `.`.
fn normalize_numeric(text: &str, culture: Culture) -> String {
    text.trim()
        .chars()
        .filter(|&c| c != culture.group_separator)
        .map(|c| {
            if c == culture.decimal_separator {
                '.'
            } else {
                c
            }
        })
        .collect()
}

pub(super) fn read_as_i32<R: JsonReader + ?Sized>(r: &mut R) -> Result<Option<i32>, ReadError> {
    if !read_content(r)? {
        return Ok(None);
    }
    if is_null_like(r.token_type()) {
        return Ok(None);
    }
    match (r.token_type(), r.value().clone()) {
        (JsonToken::Integer, JsonValue::Int(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| positioned(r, ErrorKind::IntegerTooLargeForInt32(n.to_string()))),
        (JsonToken::Integer, JsonValue::BigInt(n)) => {
            Err(positioned(r, ErrorKind::IntegerTooLargeForInt32(n.to_string())))
        }
        (JsonToken::String, JsonValue::Str(s)) => {
            let text = normalize_numeric(&s, r.culture());
            if text.is_empty() {
                return Ok(None);
            }
            match text.parse::<i64>() {
                Ok(wide) => i32::try_from(wide)
                    .map(Some)
                    .map_err(|_| positioned(r, ErrorKind::IntegerTooLargeForInt32(s))),
                Err(_) => Err(positioned(r, ErrorKind::InvalidInteger(s))),
            }
        }
        _ => Err(unexpected(r, "integer")),
    }
}

pub(super) fn read_as_f64<R: JsonReader + ?Sized>(r: &mut R) -> Result<Option<f64>, ReadError> {
    if !read_content(r)? {
        return Ok(None);
    }
    if is_null_like(r.token_type()) {
        return Ok(None);
    }
    match (r.token_type(), r.value().clone()) {
        (JsonToken::Integer, JsonValue::Int(n)) => {
            #[allow(clippy::cast_precision_loss)]
            Ok(Some(n as f64))
        }
        (JsonToken::Integer, JsonValue::BigInt(n)) => match n.to_f64() {
            Some(x) => Ok(Some(x)),
            None => Err(positioned(r, ErrorKind::InvalidNumber(n.to_string()))),
        },
        (JsonToken::Float, JsonValue::Float(x)) => Ok(Some(x)),
        (JsonToken::Float, JsonValue::Decimal(d)) => match d.to_f64() {
            Some(x) => Ok(Some(x)),
            None => Err(positioned(r, ErrorKind::InvalidNumber(d.to_string()))),
        },
        (JsonToken::String, JsonValue::Str(s)) => {
            let text = normalize_numeric(&s, r.culture());
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map(Some)
                .map_err(|_| positioned(r, ErrorKind::InvalidNumber(s)))
        }
        _ => Err(unexpected(r, "double")),
    }
}

pub(super) fn read_as_decimal<R: JsonReader + ?Sized>(
    r: &mut R,
) -> Result<Option<Decimal>, ReadError> {
    if !read_content(r)? {
        return Ok(None);
    }
    if is_null_like(r.token_type()) {
        return Ok(None);
    }
    match (r.token_type(), r.value().clone()) {
        (JsonToken::Integer, JsonValue::Int(n)) => Ok(Some(Decimal::from(n))),
        (JsonToken::Integer, JsonValue::BigInt(n)) => n
            .to_string()
            .parse::<Decimal>()
            .map(Some)
            .map_err(|_| positioned(r, ErrorKind::InvalidDecimal(n.to_string()))),
        (JsonToken::Float, JsonValue::Decimal(d)) => Ok(Some(d)),
        (JsonToken::Float, JsonValue::Float(x)) => Decimal::from_f64(x)
            .map(Some)
            .ok_or_else(|| positioned(r, ErrorKind::InvalidDecimal(x.to_string()))),
        (JsonToken::String, JsonValue::Str(s)) => {
            let text = normalize_numeric(&s, r.culture());
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<Decimal>()
                .map(Some)
                .map_err(|_| positioned(r, ErrorKind::InvalidDecimal(s)))
        }
        _ => Err(unexpected(r, "decimal")),
    }
}

pub(super) fn read_as_string<R: JsonReader + ?Sized>(
    r: &mut R,
) -> Result<Option<String>, ReadError> {
    if !read_content(r)? {
        return Ok(None);
    }
    if is_null_like(r.token_type()) {
        return Ok(None);
    }
    match r.token_type() {
        JsonToken::String => Ok(r.value().as_str().map(ToOwned::to_owned)),
        // Primitives stringify through the value's display form.
        JsonToken::Integer
        | JsonToken::Float
        | JsonToken::Boolean
        | JsonToken::Date
        | JsonToken::Bytes => Ok(Some(r.value().to_string())),
        _ => Err(unexpected(r, "string")),
    }
}

pub(super) fn read_as_bool<R: JsonReader + ?Sized>(r: &mut R) -> Result<Option<bool>, ReadError> {
    if !read_content(r)? {
        return Ok(None);
    }
    if is_null_like(r.token_type()) {
        return Ok(None);
    }
    match (r.token_type(), r.value().clone()) {
        (JsonToken::Boolean, JsonValue::Bool(b)) => Ok(Some(b)),
        (JsonToken::Integer, JsonValue::Int(n)) => Ok(Some(n != 0)),
        (JsonToken::Integer, JsonValue::BigInt(n)) => Ok(Some(n != BigInt::from(0))),
        (JsonToken::Float, JsonValue::Float(x)) => Ok(Some(x != 0.0)),
        (JsonToken::Float, JsonValue::Decimal(d)) => Ok(Some(!d.is_zero())),
        (JsonToken::String, JsonValue::Str(s)) => {
            let text = s.trim();
            if text.is_empty() {
                Ok(None)
            } else if text.eq_ignore_ascii_case("true") {
                Ok(Some(true))
            } else if text.eq_ignore_ascii_case("false") {
                Ok(Some(false))
            } else {
                Err(positioned(r, ErrorKind::StringNotBoolean(s)))
            }
        }
        _ => Err(unexpected(r, "boolean")),
    }
}

pub(super) fn read_as_bytes<R: JsonReader + ?Sized>(
    r: &mut R,
) -> Result<Option<Vec<u8>>, ReadError> {
    if !read_content(r)? {
        return Ok(None);
    }
    if is_null_like(r.token_type()) {
        return Ok(None);
    }
    match (r.token_type(), r.value().clone()) {
        (JsonToken::String, JsonValue::Str(s)) => {
            if s.is_empty() {
                return Ok(Some(Vec::new()));
            }
            from_base64(&s).map(Some).map_err(|k| positioned(r, k))
        }
        (JsonToken::Bytes, JsonValue::Bytes(b)) => Ok(Some(b)),
        (JsonToken::StartArray, _) => read_byte_array(r).map(Some),
        _ => Err(unexpected(r, "bytes")),
    }
}

/// Collects an array of byte-sized integers after its `[` has been read.
fn read_byte_array<R: JsonReader + ?Sized>(r: &mut R) -> Result<Vec<u8>, ReadError> {
    let mut out = Vec::new();
    loop {
        if !read_content(r)? {
            return Err(positioned(r, ErrorKind::UnexpectedEnd));
        }
        match (r.token_type(), r.value().clone()) {
            (JsonToken::EndArray, _) => return Ok(out),
            (JsonToken::Integer, JsonValue::Int(n)) => {
                let byte = u8::try_from(n)
                    .map_err(|_| positioned(r, ErrorKind::InvalidInteger(n.to_string())))?;
                out.push(byte);
            }
            (JsonToken::Integer, JsonValue::BigInt(n)) => {
                return Err(positioned(r, ErrorKind::InvalidInteger(n.to_string())));
            }
            _ => return Err(unexpected(r, "bytes")),
        }
    }
}

pub(super) fn read_as_datetime<R: JsonReader + ?Sized>(
    r: &mut R,
) -> Result<Option<NaiveDateTime>, ReadError> {
    if !read_content(r)? {
        return Ok(None);
    }
    if is_null_like(r.token_type()) {
        return Ok(None);
    }
    match (r.token_type(), r.value().clone()) {
        (JsonToken::Date, JsonValue::DateTime(d)) => Ok(Some(d)),
        (JsonToken::Date, JsonValue::DateTimeOffset(o)) => Ok(Some(o.naive_local())),
        (JsonToken::String, JsonValue::Str(s)) => {
            let text = s.trim();
            if text.is_empty() {
                return Ok(None);
            }
            match parse_offset(text) {
                Some(d) => Ok(Some(d.naive_local())),
                None => Err(positioned(r, ErrorKind::StringNotDateTime(s))),
            }
        }
        _ => Err(unexpected(r, "date")),
    }
}

pub(super) fn read_as_datetime_offset<R: JsonReader + ?Sized>(
    r: &mut R,
) -> Result<Option<DateTime<FixedOffset>>, ReadError> {
    if !read_content(r)? {
        return Ok(None);
    }
    if is_null_like(r.token_type()) {
        return Ok(None);
    }
    match (r.token_type(), r.value().clone()) {
        (JsonToken::Date, JsonValue::DateTimeOffset(o)) => Ok(Some(o)),
        (JsonToken::Date, JsonValue::DateTime(d)) => Ok(Some(d.and_utc().fixed_offset())),
        (JsonToken::String, JsonValue::Str(s)) => {
            let text = s.trim();
            if text.is_empty() {
                return Ok(None);
            }
            match parse_offset(text) {
                Some(d) => Ok(Some(d)),
                None => Err(positioned(r, ErrorKind::StringNotDateTime(s))),
            }
        }
        _ => Err(unexpected(r, "date")),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_numeric;
    use crate::options::Culture;

    #[test]
    fn invariant_normalization() {
        let c = Culture::invariant();
        assert_eq!(normalize_numeric(" 1,234.5 ", c), "1234.5");
    }

    #[test]
    fn european_separators() {
        let c = Culture {
            decimal_separator: ',',
            group_separator: '.',
        };
        assert_eq!(normalize_numeric("1.234,5", c), "1234.5");
    }
}
