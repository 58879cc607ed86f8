//! Token vocabulary shared by the reader and the writer.

use core::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use num_bigint::BigInt;
use rust_decimal::Decimal;

/// The kind of the most recently read (or written) lexical unit.
///
/// `Integer` and `Float` carry their concrete numeric subtype in the
/// accompanying [`JsonValue`]: a 64-bit integer or an arbitrary-precision
/// integer for `Integer`, a double or a fixed-point decimal for `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonToken {
    /// No token has been read yet, or the input is exhausted.
    None,
    /// `{`
    StartObject,
    /// `}`
    EndObject,
    /// `[`
    StartArray,
    /// `]`
    EndArray,
    /// `new <name>(` — lenient constructor syntax.
    StartConstructor,
    /// `)` closing a constructor.
    EndConstructor,
    /// An object member name, including the consumed `:` separator.
    PropertyName,
    /// A `//` line comment or `/* */` block comment.
    Comment,
    /// Verbatim text emitted through the writer; never produced by the reader.
    Raw,
    /// An integer literal (decimal, hex, or octal).
    Integer,
    /// A floating-point literal, or `NaN`/`Infinity`/`-Infinity`.
    Float,
    /// A quoted string.
    String,
    /// `true` or `false`.
    Boolean,
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// A string value recognized as a date under `DateParseHandling`.
    Date,
    /// A byte sequence produced by the byte accessor or written as base64.
    Bytes,
}

impl JsonToken {
    /// Returns `true` for tokens that begin a container.
    #[must_use]
    pub fn is_start_token(self) -> bool {
        matches!(
            self,
            Self::StartObject | Self::StartArray | Self::StartConstructor
        )
    }

    /// Returns `true` for tokens that close a container.
    #[must_use]
    pub fn is_end_token(self) -> bool {
        matches!(self, Self::EndObject | Self::EndArray | Self::EndConstructor)
    }

    /// Returns `true` for scalar value tokens (not structure, names, or
    /// comments).
    #[must_use]
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Integer
                | Self::Float
                | Self::String
                | Self::Boolean
                | Self::Null
                | Self::Undefined
                | Self::Date
                | Self::Bytes
        )
    }
}

impl fmt::Display for JsonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::StartObject => "StartObject",
            Self::EndObject => "EndObject",
            Self::StartArray => "StartArray",
            Self::EndArray => "EndArray",
            Self::StartConstructor => "StartConstructor",
            Self::EndConstructor => "EndConstructor",
            Self::PropertyName => "PropertyName",
            Self::Comment => "Comment",
            Self::Raw => "Raw",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Null => "Null",
            Self::Undefined => "Undefined",
            Self::Date => "Date",
            Self::Bytes => "Bytes",
        };
        f.write_str(name)
    }
}

/// The decoded value attached to the current token, carrying its concrete
/// subtype.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// No value (structural tokens, `null`, `undefined`, exhausted input).
    None,
    /// Boolean subtype.
    Bool(bool),
    /// 64-bit integer subtype.
    Int(i64),
    /// Arbitrary-precision integer subtype, used when a literal exceeds the
    /// signed 64-bit range.
    BigInt(BigInt),
    /// Double-precision float subtype.
    Float(f64),
    /// Fixed-point decimal subtype (`FloatParseHandling::FixedDecimal`).
    Decimal(Decimal),
    /// Textual subtype: strings, property names, constructor names, comment
    /// bodies, and raw fragments.
    Str(String),
    /// Local date-time subtype (`DateParseHandling::DateTime`).
    DateTime(NaiveDateTime),
    /// Offset date-time subtype (`DateParseHandling::DateTimeOffset`).
    DateTimeOffset(DateTime<FixedOffset>),
    /// Byte-sequence subtype.
    Bytes(Vec<u8>),
}

impl JsonValue {
    /// Textual content, if this value has a textual subtype.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// 64-bit integer content, if this value has that subtype.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Double content, if this value has that subtype.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` when no value is attached.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::BigInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Str(s) => f.write_str(s),
            Self::DateTime(d) => write!(f, "{d}"),
            Self::DateTimeOffset(d) => write!(f, "{d}"),
            Self::Bytes(b) => write!(f, "{}", crate::escape::to_base64(b)),
        }
    }
}
