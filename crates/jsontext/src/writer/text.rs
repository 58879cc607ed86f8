//! The text writer: the reader's state machine mirrored for output.

use core::fmt;

use chrono::SecondsFormat;

use crate::error::WriteError;
use crate::escape::{escape_into, to_base64};
use crate::frames::{ContainerKind, FrameStack};
use crate::options::{Formatting, WriterOptions};
use crate::token::{JsonToken, JsonValue};

use super::JsonWriter;

/// Position between written tokens; named states appear in
/// [`WriteError::InvalidState`] messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteState {
    Start,
    ObjectStart,
    Object,
    Property,
    ArrayStart,
    Array,
    ConstructorStart,
    Constructor,
    /// A root value is complete; another may follow after a separator.
    Finished,
    Closed,
}

impl WriteState {
    fn name(self) -> &'static str {
        match self {
            Self::Start | Self::Finished => "Start",
            Self::ObjectStart | Self::Object => "Object",
            Self::Property => "Property",
            Self::ArrayStart | Self::Array => "Array",
            Self::ConstructorStart | Self::Constructor => "Constructor",
            Self::Closed => "Closed",
        }
    }
}

/// Writes JSON text token by token, validating each against the grammar.
///
/// An illegal token fails with [`WriteError::InvalidState`] and writes
/// nothing; the writer stays usable. After a root value completes, further
/// root values may follow; they are separated with a single space so the
/// output always tokenizes back to the same sequence.
///
/// ```rust
/// use jsontext::{JsonTextWriter, JsonWriter};
///
/// let mut out = String::new();
/// let mut writer = JsonTextWriter::new(&mut out);
/// writer.write_start_object().unwrap();
/// writer.write_property_name("answer").unwrap();
/// writer.write_i64(42).unwrap();
/// writer.write_end_object().unwrap();
/// drop(writer);
/// assert_eq!(out, r#"{"answer":42}"#);
/// ```
#[derive(Debug)]
pub struct JsonTextWriter<W: fmt::Write> {
    sink: W,
    state: WriteState,
    frames: FrameStack,
    options: WriterOptions,
}

impl<W: fmt::Write> JsonTextWriter<W> {
    /// Creates a writer with default options.
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    /// Creates a writer with explicit options.
    pub fn with_options(sink: W, options: WriterOptions) -> Self {
        Self {
            sink,
            state: WriteState::Start,
            frames: FrameStack::new(),
            options,
        }
    }

    /// Consumes the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn invalid(&self, token: JsonToken) -> WriteError {
        WriteError::InvalidState {
            token,
            state: self.state.name(),
            path: self.frames.path(),
        }
    }

    fn newline_indent(&mut self, depth: usize) -> fmt::Result {
        self.sink.write_char('\n')?;
        for _ in 0..depth * self.options.indentation {
            self.sink.write_char(' ')?;
        }
        Ok(())
    }

    /// Validates a value position and writes the separator that leads into
    /// it. Constructor arguments are comma-separated but never indented;
    /// root values after the first are space-separated so adjacent tokens
    /// never fuse.
    fn begin_value(&mut self, token: JsonToken) -> Result<(), WriteError> {
        match self.state {
            WriteState::Start
            | WriteState::Property
            | WriteState::ArrayStart
            | WriteState::ConstructorStart => {}
            WriteState::Finished => self.sink.write_char(' ')?,
            WriteState::Array | WriteState::Constructor => self.sink.write_char(',')?,
            WriteState::ObjectStart | WriteState::Object | WriteState::Closed => {
                return Err(self.invalid(token));
            }
        }
        if self.options.formatting == Formatting::Indented
            && matches!(self.state, WriteState::ArrayStart | WriteState::Array)
        {
            self.newline_indent(self.frames.depth())?;
        }
        self.frames.begin_value();
        Ok(())
    }

    /// Returns to the between-tokens state of the enclosing container.
    fn end_value(&mut self) {
        self.state = match self.frames.top().map(|f| f.kind) {
            None => WriteState::Finished,
            Some(ContainerKind::Object) => WriteState::Object,
            Some(ContainerKind::Array) => WriteState::Array,
            Some(ContainerKind::Constructor) => WriteState::Constructor,
        };
    }

    fn write_close(&mut self, expected: ContainerKind, token: JsonToken) -> Result<(), WriteError> {
        let Some(top) = self.frames.top().map(|f| f.kind) else {
            return Err(WriteError::NothingToClose {
                path: self.frames.path(),
            });
        };
        if top != expected || matches!(self.state, WriteState::Property | WriteState::Closed) {
            return Err(self.invalid(token));
        }
        self.close_top(top)
    }

    fn close_top(&mut self, kind: ContainerKind) -> Result<(), WriteError> {
        let had_children = matches!(
            self.state,
            WriteState::Object | WriteState::Array | WriteState::Constructor
        );
        self.frames.pop();
        if self.options.formatting == Formatting::Indented
            && had_children
            && kind != ContainerKind::Constructor
        {
            self.newline_indent(self.frames.depth())?;
        }
        self.sink.write_char(match kind {
            ContainerKind::Object => '}',
            ContainerKind::Array => ']',
            ContainerKind::Constructor => ')',
        })?;
        self.end_value();
        Ok(())
    }

    fn render_value(&mut self, value: &JsonValue) -> fmt::Result {
        let quote = self.options.quote_char;
        match value {
            JsonValue::None => self.sink.write_str("null"),
            JsonValue::Bool(b) => write!(self.sink, "{b}"),
            JsonValue::Int(n) => write!(self.sink, "{n}"),
            JsonValue::BigInt(n) => write!(self.sink, "{n}"),
            JsonValue::Float(x) => render_f64(&mut self.sink, *x),
            JsonValue::Decimal(d) => write!(self.sink, "{d}"),
            JsonValue::Str(s) => escape_into(&mut self.sink, s, quote),
            JsonValue::DateTime(d) => {
                self.sink.write_char(quote)?;
                write!(self.sink, "{}", d.format("%Y-%m-%dT%H:%M:%S%.f"))?;
                self.sink.write_char(quote)
            }
            JsonValue::DateTimeOffset(d) => {
                self.sink.write_char(quote)?;
                self.sink
                    .write_str(&d.to_rfc3339_opts(SecondsFormat::AutoSi, true))?;
                self.sink.write_char(quote)
            }
            JsonValue::Bytes(b) => {
                self.sink.write_char(quote)?;
                self.sink.write_str(&to_base64(b))?;
                self.sink.write_char(quote)
            }
        }
    }
}

/// Fraction-less finite doubles keep a `.0` suffix so they read back as
/// floats; non-finite doubles are written as bare literals. `Display` for
/// `f64` never uses exponent notation, so fraction-less magnitudes past the
/// integer-exact range switch to `{:e}` instead of spelling out every digit.
fn render_f64<W: fmt::Write>(w: &mut W, x: f64) -> fmt::Result {
    if x.is_nan() {
        return w.write_str("NaN");
    }
    if x.is_infinite() {
        return w.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }
    let text = format!("{x}");
    if text.contains(['.', 'e', 'E']) {
        w.write_str(&text)
    } else if x.abs() >= 1e17 {
        write!(w, "{x:e}")
    } else {
        write!(w, "{text}.0")
    }
}

impl<W: fmt::Write> JsonWriter for JsonTextWriter<W> {
    fn write_start_object(&mut self) -> Result<(), WriteError> {
        self.begin_value(JsonToken::StartObject)?;
        self.sink.write_char('{')?;
        self.frames.push(ContainerKind::Object);
        self.state = WriteState::ObjectStart;
        Ok(())
    }

    fn write_end_object(&mut self) -> Result<(), WriteError> {
        self.write_close(ContainerKind::Object, JsonToken::EndObject)
    }

    fn write_start_array(&mut self) -> Result<(), WriteError> {
        self.begin_value(JsonToken::StartArray)?;
        self.sink.write_char('[')?;
        self.frames.push(ContainerKind::Array);
        self.state = WriteState::ArrayStart;
        Ok(())
    }

    fn write_end_array(&mut self) -> Result<(), WriteError> {
        self.write_close(ContainerKind::Array, JsonToken::EndArray)
    }

    fn write_start_constructor(&mut self, name: &str) -> Result<(), WriteError> {
        self.begin_value(JsonToken::StartConstructor)?;
        write!(self.sink, "new {name}(")?;
        self.frames.push(ContainerKind::Constructor);
        self.state = WriteState::ConstructorStart;
        Ok(())
    }

    fn write_end_constructor(&mut self) -> Result<(), WriteError> {
        self.write_close(ContainerKind::Constructor, JsonToken::EndConstructor)
    }

    fn write_end(&mut self) -> Result<(), WriteError> {
        let Some(top) = self.frames.top().map(|f| f.kind) else {
            return Err(WriteError::NothingToClose {
                path: self.frames.path(),
            });
        };
        if matches!(self.state, WriteState::Property | WriteState::Closed) {
            let token = match top {
                ContainerKind::Object => JsonToken::EndObject,
                ContainerKind::Array => JsonToken::EndArray,
                ContainerKind::Constructor => JsonToken::EndConstructor,
            };
            return Err(self.invalid(token));
        }
        self.close_top(top)
    }

    fn write_property_name(&mut self, name: &str) -> Result<(), WriteError> {
        match self.state {
            WriteState::ObjectStart => {}
            WriteState::Object => self.sink.write_char(',')?,
            _ => return Err(self.invalid(JsonToken::PropertyName)),
        }
        if self.options.formatting == Formatting::Indented {
            self.newline_indent(self.frames.depth())?;
        }
        escape_into(&mut self.sink, name, self.options.quote_char)?;
        self.sink.write_char(':')?;
        if self.options.formatting == Formatting::Indented {
            self.sink.write_char(' ')?;
        }
        self.frames.set_property_name(name);
        self.state = WriteState::Property;
        Ok(())
    }

    fn write_value(&mut self, value: &JsonValue) -> Result<(), WriteError> {
        let token = match value {
            JsonValue::None => JsonToken::Null,
            JsonValue::Bool(_) => JsonToken::Boolean,
            JsonValue::Int(_) | JsonValue::BigInt(_) => JsonToken::Integer,
            JsonValue::Float(_) | JsonValue::Decimal(_) => JsonToken::Float,
            JsonValue::Str(_) => JsonToken::String,
            JsonValue::DateTime(_) | JsonValue::DateTimeOffset(_) => JsonToken::Date,
            JsonValue::Bytes(_) => JsonToken::Bytes,
        };
        self.begin_value(token)?;
        self.render_value(value)?;
        self.end_value();
        Ok(())
    }

    fn write_undefined(&mut self) -> Result<(), WriteError> {
        self.begin_value(JsonToken::Undefined)?;
        self.sink.write_str("undefined")?;
        self.end_value();
        Ok(())
    }

    fn write_comment(&mut self, text: &str) -> Result<(), WriteError> {
        if self.state == WriteState::Closed {
            return Err(self.invalid(JsonToken::Comment));
        }
        write!(self.sink, "/*{text}*/")?;
        Ok(())
    }

    fn write_raw(&mut self, json: &str) -> Result<(), WriteError> {
        if self.state == WriteState::Closed {
            return Err(self.invalid(JsonToken::Raw));
        }
        self.sink.write_str(json)?;
        Ok(())
    }

    fn write_raw_value(&mut self, json: &str) -> Result<(), WriteError> {
        self.begin_value(JsonToken::Raw)?;
        self.sink.write_str(json)?;
        self.end_value();
        Ok(())
    }

    fn path(&self) -> String {
        self.frames.path()
    }

    fn close(&mut self) {
        self.state = WriteState::Closed;
    }
}
