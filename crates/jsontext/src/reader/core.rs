//! The tokenizer core: a forward-only, resumable state machine.
//!
//! The core never touches a character source. It consumes from its buffer
//! manager and, when the buffer runs dry mid-decision, suspends by returning
//! [`Poll::NeedData`] with all scan progress preserved in the active lex
//! state. The pull reader refills and re-polls; the feed-driven reader
//! surfaces the suspension to its caller. Both therefore produce
//! byte-for-byte identical token sequences.
//!
//! Grammar state lives in two layers:
//! - `State`: where we are between tokens (value expected, property name
//!   expected, after a value, finished, ...).
//! - `Lex`: the scanner for the token currently in flight, if any.
//!
//! Errors do not consume the offending character and never invalidate the
//! core; the one deliberate exception is a MaxDepth violation, where the
//! container token is already applied so that parsing continues inside it,
//! and the violation is reported once per offending container.

use core::mem;

use crate::buffer::{Buffer, INITIAL_BUFFER_LENGTH};
use crate::error::{ErrorKind, ParseError};
use crate::frames::{ContainerKind, FrameStack};
use crate::options::{FloatParseHandling, ReaderOptions};
use crate::pool::SharedPool;
use crate::source::CharSource;
use crate::token::{JsonToken, JsonValue};

use super::CurrentState;
use super::ScanStep;
use super::dates::try_parse_date;
use super::scan_comment::CommentScanner;
use super::scan_constructor::ConstructorScanner;
use super::scan_literal::{LiteralKind, LiteralScanner};
use super::scan_number::{NumberScanner, decode_number};
use super::scan_string::{StringScanner, UnquotedNameScanner, is_identifier_start};

/// Outcome of one polling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Poll {
    /// A token is available via the accessors.
    Token,
    /// The buffer is drained mid-decision; more input is required.
    NeedData,
    /// Input is exhausted at a token boundary; no more tokens.
    Eof,
}

/// Position between tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    /// After `{`: property name or `}`.
    ObjectStart,
    /// After `,` in an object: property name required.
    ObjectName,
    /// After a property name and `:`: value required.
    Property,
    /// After `[`: value or `]`.
    ArrayStart,
    /// After `,` in an array or constructor: value required.
    ElementRequired,
    /// After `new Name(`: value or `)`.
    ConstructorStart,
    /// After a value inside a container: separator or closer.
    PostValue,
    /// A top-level value is complete.
    Finished,
    Closed,
}

/// Scanner for the token in flight.
#[derive(Debug)]
enum Lex {
    Default,
    Literal(LiteralScanner),
    Number(NumberScanner),
    Str { scanner: StringScanner, name: bool },
    UnquotedName(UnquotedNameScanner),
    /// Property name scanned; skipping whitespace up to `:`.
    NameSeparator(String),
    Comment(CommentScanner),
    ConstructorName(ConstructorScanner),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexKind {
    Default,
    Literal,
    Number,
    Str,
    UnquotedName,
    NameSeparator,
    Comment,
    ConstructorName,
}

impl Lex {
    fn kind(&self) -> LexKind {
        match self {
            Self::Default => LexKind::Default,
            Self::Literal(_) => LexKind::Literal,
            Self::Number(_) => LexKind::Number,
            Self::Str { .. } => LexKind::Str,
            Self::UnquotedName(_) => LexKind::UnquotedName,
            Self::NameSeparator(_) => LexKind::NameSeparator,
            Self::Comment(_) => LexKind::Comment,
            Self::ConstructorName(_) => LexKind::ConstructorName,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ReaderCore {
    buffer: Buffer,
    end_of_input: bool,

    /// 0 until the first character is consumed, 1-based thereafter.
    line: usize,
    /// Characters consumed on the current line.
    line_pos: usize,
    prev_was_cr: bool,

    state: State,
    lex: Lex,
    frames: FrameStack,
    /// Set when a MaxDepth violation has been reported for the current
    /// over-deep region; cleared once depth returns within bounds.
    depth_exceeded: bool,

    token: JsonToken,
    value: JsonValue,
    quote_char: char,
    errored: bool,

    pub(crate) options: ReaderOptions,
}

impl ReaderCore {
    pub(crate) fn new(options: ReaderOptions, pool: SharedPool) -> Self {
        Self {
            buffer: Buffer::new(pool, INITIAL_BUFFER_LENGTH),
            end_of_input: false,
            line: 0,
            line_pos: 0,
            prev_was_cr: false,
            state: State::Start,
            lex: Lex::Default,
            frames: FrameStack::new(),
            depth_exceeded: false,
            token: JsonToken::None,
            value: JsonValue::None,
            quote_char: '"',
            errored: false,
            options,
        }
    }

    // ----------------------------------------------------------------------
    // Input plumbing
    // ----------------------------------------------------------------------

    /// Refills the buffer from a source. A source fault propagates without
    /// consuming anything, so a retry resumes at the same position.
    pub(crate) fn fill_from<S: CharSource>(&mut self, source: &mut S) -> std::io::Result<()> {
        let tail = self.buffer.writable_tail();
        let read = source.read_chars(tail)?;
        self.buffer.commit(read);
        if read == 0 {
            self.end_of_input = true;
        }
        Ok(())
    }

    /// Appends fed text (feed-driven mode).
    pub(crate) fn feed(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn set_end_of_input(&mut self) {
        self.end_of_input = true;
    }

    pub(crate) fn release_buffer(&mut self) {
        self.buffer.release();
    }

    pub(crate) fn mark_closed(&mut self) {
        self.state = State::Closed;
        self.token = JsonToken::None;
        self.value = JsonValue::None;
        self.frames.clear();
    }

    // ----------------------------------------------------------------------
    // Token accessors
    // ----------------------------------------------------------------------

    pub(crate) fn token_type(&self) -> JsonToken {
        self.token
    }

    pub(crate) fn value(&self) -> &JsonValue {
        &self.value
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.depth()
    }

    pub(crate) fn path(&self) -> String {
        self.frames.path()
    }

    pub(crate) fn line_number(&self) -> usize {
        self.line
    }

    pub(crate) fn line_position(&self) -> usize {
        self.line_pos
    }

    pub(crate) fn quote_char(&self) -> char {
        self.quote_char
    }

    pub(crate) fn current_state(&self) -> CurrentState {
        if self.errored {
            return CurrentState::Error;
        }
        match self.state {
            State::Start => CurrentState::Start,
            State::ObjectStart => CurrentState::ObjectStart,
            State::ObjectName => CurrentState::Object,
            State::Property => CurrentState::PropertyName,
            State::ArrayStart => CurrentState::ArrayStart,
            State::ConstructorStart => CurrentState::ConstructorStart,
            State::ElementRequired | State::PostValue => match self.frames.top().map(|f| f.kind) {
                Some(ContainerKind::Object) => CurrentState::Object,
                Some(ContainerKind::Constructor) => CurrentState::Constructor,
                _ => CurrentState::Array,
            },
            State::Finished => CurrentState::Finished,
            State::Closed => CurrentState::Closed,
        }
    }

    // ----------------------------------------------------------------------
    // Character consumption and positions
    // ----------------------------------------------------------------------

    #[inline]
    fn peek(&self) -> Option<char> {
        self.buffer.peek()
    }

    /// Consumes the peeked character, maintaining line/position counters.
    /// `\r\n` counts as a single line break.
    #[inline]
    fn consume(&mut self) -> char {
        let c = self.buffer.peek().unwrap_or('\0');
        self.buffer.bump();
        if self.line == 0 {
            self.line = 1;
        }
        match c {
            '\n' => {
                if self.prev_was_cr {
                    self.prev_was_cr = false;
                } else {
                    self.line += 1;
                }
                self.line_pos = 0;
            }
            '\r' => {
                self.line += 1;
                self.line_pos = 0;
                self.prev_was_cr = true;
            }
            _ => {
                self.line_pos += 1;
                self.prev_was_cr = false;
            }
        }
        c
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError {
            kind,
            path: self.frames.path(),
            line: self.line.max(1),
            position: self.line_pos,
        }
    }

    // ----------------------------------------------------------------------
    // Polling
    // ----------------------------------------------------------------------

    /// Drives the state machine until it produces a token, suspends, or
    /// exhausts input.
    pub(crate) fn poll_token(&mut self) -> Result<Poll, ParseError> {
        self.errored = false;
        let result = self.poll_inner();
        if result.is_err() {
            self.errored = true;
        }
        result
    }

    fn poll_inner(&mut self) -> Result<Poll, ParseError> {
        loop {
            let step = match self.lex.kind() {
                LexKind::Default => self.step_default()?,
                LexKind::Literal => self.step_literal()?,
                LexKind::Number => self.step_number()?,
                LexKind::Str => self.step_string()?,
                LexKind::UnquotedName => self.step_unquoted_name()?,
                LexKind::NameSeparator => self.step_name_separator()?,
                LexKind::Comment => self.step_comment()?,
                LexKind::ConstructorName => self.step_constructor_name()?,
            };
            if let Some(poll) = step {
                return Ok(poll);
            }
        }
    }

    // ----------------------------------------------------------------------
    // Between tokens
    // ----------------------------------------------------------------------

    fn step_default(&mut self) -> Result<Option<Poll>, ParseError> {
        let Some(c) = self.peek() else {
            if !self.end_of_input {
                return Ok(Some(Poll::NeedData));
            }
            self.token = JsonToken::None;
            self.value = JsonValue::None;
            return Ok(Some(Poll::Eof));
        };

        if c.is_whitespace() {
            self.consume();
            return Ok(None);
        }

        match self.state {
            State::Start
            | State::Property
            | State::ArrayStart
            | State::ElementRequired
            | State::ConstructorStart => self.dispatch_value(c),
            State::ObjectStart | State::ObjectName => self.dispatch_property(c),
            State::PostValue => self.dispatch_post_value(c),
            State::Finished => self.dispatch_finished(c),
            State::Closed => {
                self.token = JsonToken::None;
                self.value = JsonValue::None;
                Ok(Some(Poll::Eof))
            }
        }
    }

    fn dispatch_value(&mut self, c: char) -> Result<Option<Poll>, ParseError> {
        match c {
            '{' => {
                self.consume();
                self.open_container(ContainerKind::Object, JsonValue::None)
                    .map(Some)
            }
            '[' => {
                self.consume();
                self.open_container(ContainerKind::Array, JsonValue::None)
                    .map(Some)
            }
            ']' if self.state == State::ArrayStart => {
                self.consume();
                Ok(Some(self.close_container()))
            }
            ')' if self.state == State::ConstructorStart => {
                self.consume();
                Ok(Some(self.close_container()))
            }
            '"' | '\'' => {
                self.consume();
                self.quote_char = c;
                self.lex = Lex::Str {
                    scanner: StringScanner::new(c),
                    name: false,
                };
                Ok(None)
            }
            '-' | '0'..='9' => {
                self.consume();
                self.lex = Lex::Number(NumberScanner::new(c));
                Ok(None)
            }
            '/' => {
                self.consume();
                self.lex = Lex::Comment(CommentScanner::new());
                Ok(None)
            }
            't' | 'f' | 'n' | 'u' | 'N' | 'I' => {
                self.consume();
                // The character set above is exactly what LiteralScanner
                // accepts as a first character.
                let scanner = LiteralScanner::new(c).expect("literal start");
                self.lex = Lex::Literal(scanner);
                Ok(None)
            }
            other => Err(self.error(ErrorKind::UnexpectedCharacterValue(other))),
        }
    }

    fn dispatch_property(&mut self, c: char) -> Result<Option<Poll>, ParseError> {
        match c {
            '}' if self.state == State::ObjectStart => {
                self.consume();
                Ok(Some(self.close_container()))
            }
            '"' | '\'' => {
                self.consume();
                self.quote_char = c;
                self.lex = Lex::Str {
                    scanner: StringScanner::new(c),
                    name: true,
                };
                Ok(None)
            }
            '/' => {
                self.consume();
                self.lex = Lex::Comment(CommentScanner::new());
                Ok(None)
            }
            c if is_identifier_start(c) => {
                self.consume();
                self.lex = Lex::UnquotedName(UnquotedNameScanner::new(c));
                Ok(None)
            }
            other => Err(self.error(ErrorKind::InvalidPropertyIdentifierCharacter(other))),
        }
    }

    fn dispatch_post_value(&mut self, c: char) -> Result<Option<Poll>, ParseError> {
        let kind = self.frames.top().map(|f| f.kind);
        match (kind, c) {
            (Some(ContainerKind::Object), ',') => {
                self.consume();
                self.state = State::ObjectName;
                Ok(None)
            }
            (Some(ContainerKind::Object), '}')
            | (Some(ContainerKind::Array), ']')
            | (Some(ContainerKind::Constructor), ')') => {
                self.consume();
                Ok(Some(self.close_container()))
            }
            (Some(ContainerKind::Array | ContainerKind::Constructor), ',') => {
                self.consume();
                self.state = State::ElementRequired;
                Ok(None)
            }
            (_, '/') => {
                self.consume();
                self.lex = Lex::Comment(CommentScanner::new());
                Ok(None)
            }
            (_, other) => Err(self.error(ErrorKind::AfterParsingValue(other))),
        }
    }

    fn dispatch_finished(&mut self, c: char) -> Result<Option<Poll>, ParseError> {
        if c == '/' {
            self.consume();
            self.lex = Lex::Comment(CommentScanner::new());
            return Ok(None);
        }
        if self.options.support_multiple_content {
            self.state = State::Start;
            return Ok(None);
        }
        Err(self.error(ErrorKind::AdditionalText(c)))
    }

    // ----------------------------------------------------------------------
    // Token completion
    // ----------------------------------------------------------------------

    /// Applies a container-start token, then enforces MaxDepth. The token is
    /// applied *before* the depth check so that parsing continues inside the
    /// container after the error, and the violation is reported only once
    /// per offending container.
    fn open_container(
        &mut self,
        kind: ContainerKind,
        value: JsonValue,
    ) -> Result<Poll, ParseError> {
        self.frames.begin_value();
        self.frames.push(kind);
        let (token, state) = match kind {
            ContainerKind::Object => (JsonToken::StartObject, State::ObjectStart),
            ContainerKind::Array => (JsonToken::StartArray, State::ArrayStart),
            ContainerKind::Constructor => (JsonToken::StartConstructor, State::ConstructorStart),
        };
        self.token = token;
        self.value = value;
        self.state = state;

        if let Some(max) = self.options.max_depth {
            if self.frames.depth() > max as usize && !self.depth_exceeded {
                self.depth_exceeded = true;
                return Err(self.error(ErrorKind::MaxDepthExceeded(max)));
            }
        }
        Ok(Poll::Token)
    }

    fn close_container(&mut self) -> Poll {
        let kind = self.frames.pop();
        self.token = match kind {
            Some(ContainerKind::Object) => JsonToken::EndObject,
            Some(ContainerKind::Array) => JsonToken::EndArray,
            Some(ContainerKind::Constructor) => JsonToken::EndConstructor,
            None => JsonToken::None,
        };
        self.value = JsonValue::None;
        if let Some(max) = self.options.max_depth {
            if self.frames.depth() <= max as usize {
                self.depth_exceeded = false;
            }
        }
        self.state = if self.frames.depth() == 0 {
            State::Finished
        } else {
            State::PostValue
        };
        Poll::Token
    }

    fn emit_scalar(&mut self, token: JsonToken, value: JsonValue) -> Poll {
        self.frames.begin_value();
        self.token = token;
        self.value = value;
        self.state = if self.frames.depth() == 0 {
            State::Finished
        } else {
            State::PostValue
        };
        Poll::Token
    }

    fn emit_property_name(&mut self, name: String) -> Poll {
        self.frames.set_property_name(&name);
        self.token = JsonToken::PropertyName;
        self.value = JsonValue::Str(name);
        self.state = State::Property;
        Poll::Token
    }

    fn emit_comment(&mut self, text: String) -> Poll {
        // Comments do not disturb the grammar state.
        self.token = JsonToken::Comment;
        self.value = JsonValue::Str(text);
        Poll::Token
    }

    // ----------------------------------------------------------------------
    // In-flight token scanners
    // ----------------------------------------------------------------------

    fn step_literal(&mut self) -> Result<Option<Poll>, ParseError> {
        let Lex::Literal(mut scanner) = mem::replace(&mut self.lex, Lex::Default) else {
            unreachable!();
        };
        loop {
            let Some(c) = self.peek() else {
                if !self.end_of_input {
                    self.lex = Lex::Literal(scanner);
                    return Ok(Some(Poll::NeedData));
                }
                scanner.end_of_input().map_err(|k| self.error(k))?;
                return self.complete_literal(scanner.kind()).map(Some);
            };
            match scanner.step(c) {
                Ok(ScanStep::More) => {
                    self.consume();
                }
                Ok(ScanStep::Done | ScanStep::DoneUnconsumed) => {
                    if scanner.kind() == LiteralKind::New {
                        self.lex = Lex::ConstructorName(ConstructorScanner::new());
                        return Ok(None);
                    }
                    return self.complete_literal(scanner.kind()).map(Some);
                }
                Err(kind) => return Err(self.error(kind)),
            }
        }
    }

    fn complete_literal(&mut self, kind: LiteralKind) -> Result<Poll, ParseError> {
        let fixed = self.options.float_parse_handling == FloatParseHandling::FixedDecimal;
        let (token, value) = match kind {
            LiteralKind::True => (JsonToken::Boolean, JsonValue::Bool(true)),
            LiteralKind::False => (JsonToken::Boolean, JsonValue::Bool(false)),
            LiteralKind::Null => (JsonToken::Null, JsonValue::None),
            LiteralKind::Undefined => (JsonToken::Undefined, JsonValue::None),
            LiteralKind::NaN => {
                if fixed {
                    return Err(self.error(ErrorKind::CannotReadNaN));
                }
                (JsonToken::Float, JsonValue::Float(f64::NAN))
            }
            LiteralKind::Infinity => {
                if fixed {
                    return Err(self.error(ErrorKind::CannotReadInfinity));
                }
                (JsonToken::Float, JsonValue::Float(f64::INFINITY))
            }
            LiteralKind::NegativeInfinity => {
                if fixed {
                    return Err(self.error(ErrorKind::CannotReadInfinity));
                }
                (JsonToken::Float, JsonValue::Float(f64::NEG_INFINITY))
            }
            LiteralKind::New => unreachable!(),
        };
        Ok(self.emit_scalar(token, value))
    }

    fn step_number(&mut self) -> Result<Option<Poll>, ParseError> {
        let Lex::Number(mut scanner) = mem::replace(&mut self.lex, Lex::Default) else {
            unreachable!();
        };
        loop {
            let Some(c) = self.peek() else {
                if !self.end_of_input {
                    self.lex = Lex::Number(scanner);
                    return Ok(Some(Poll::NeedData));
                }
                return self.complete_number(&scanner.finish()).map(Some);
            };
            if scanner.text() == "-" && c == 'I' {
                self.consume();
                self.lex = Lex::Literal(LiteralScanner::negative_infinity());
                return Ok(None);
            }
            match scanner.step(c) {
                Ok(ScanStep::More) => {
                    self.consume();
                }
                Ok(ScanStep::Done | ScanStep::DoneUnconsumed) => {
                    return self.complete_number(&scanner.finish()).map(Some);
                }
                Err(kind) => return Err(self.error(kind)),
            }
        }
    }

    fn complete_number(&mut self, text: &str) -> Result<Poll, ParseError> {
        let value =
            decode_number(text, self.options.float_parse_handling).map_err(|k| self.error(k))?;
        let token = match value {
            JsonValue::Int(_) | JsonValue::BigInt(_) => JsonToken::Integer,
            _ => JsonToken::Float,
        };
        Ok(self.emit_scalar(token, value))
    }

    fn step_string(&mut self) -> Result<Option<Poll>, ParseError> {
        let Lex::Str { mut scanner, name } = mem::replace(&mut self.lex, Lex::Default) else {
            unreachable!();
        };
        loop {
            let Some(_) = self.peek() else {
                if !self.end_of_input {
                    self.lex = Lex::Str { scanner, name };
                    return Ok(Some(Poll::NeedData));
                }
                return Err(self.error(scanner.end_of_input_error()));
            };
            let c = self.consume();
            match scanner.step(c) {
                Ok(ScanStep::More) => {}
                Ok(ScanStep::Done | ScanStep::DoneUnconsumed) => {
                    let text = scanner.finish();
                    if name {
                        self.lex = Lex::NameSeparator(text);
                        return Ok(None);
                    }
                    return Ok(Some(self.complete_string_value(text)));
                }
                Err(kind) => return Err(self.error(kind)),
            }
        }
    }

    fn complete_string_value(&mut self, text: String) -> Poll {
        if let Some(date) = try_parse_date(&text, self.options.date_parse_handling) {
            return self.emit_scalar(JsonToken::Date, date);
        }
        self.emit_scalar(JsonToken::String, JsonValue::Str(text))
    }

    fn step_unquoted_name(&mut self) -> Result<Option<Poll>, ParseError> {
        let Lex::UnquotedName(mut scanner) = mem::replace(&mut self.lex, Lex::Default) else {
            unreachable!();
        };
        loop {
            let Some(c) = self.peek() else {
                if !self.end_of_input {
                    self.lex = Lex::UnquotedName(scanner);
                    return Ok(Some(Poll::NeedData));
                }
                return Err(self.error(ErrorKind::UnexpectedEndUnquotedName));
            };
            match scanner.step(c) {
                Ok(ScanStep::More) => {
                    self.consume();
                }
                Ok(ScanStep::Done) => {
                    // The colon is part of the name production.
                    self.consume();
                    return Ok(Some(self.emit_property_name(scanner.finish())));
                }
                Ok(ScanStep::DoneUnconsumed) => {
                    self.lex = Lex::NameSeparator(scanner.finish());
                    return Ok(None);
                }
                Err(kind) => return Err(self.error(kind)),
            }
        }
    }

    fn step_name_separator(&mut self) -> Result<Option<Poll>, ParseError> {
        let Lex::NameSeparator(name) = mem::replace(&mut self.lex, Lex::Default) else {
            unreachable!();
        };
        loop {
            let Some(c) = self.peek() else {
                if !self.end_of_input {
                    self.lex = Lex::NameSeparator(name);
                    return Ok(Some(Poll::NeedData));
                }
                return Err(self.error(ErrorKind::UnexpectedEnd));
            };
            if c.is_whitespace() {
                self.consume();
                continue;
            }
            if c == ':' {
                self.consume();
                return Ok(Some(self.emit_property_name(name)));
            }
            return Err(self.error(ErrorKind::InvalidCharacterAfterPropertyName(c)));
        }
    }

    fn step_comment(&mut self) -> Result<Option<Poll>, ParseError> {
        let Lex::Comment(mut scanner) = mem::replace(&mut self.lex, Lex::Default) else {
            unreachable!();
        };
        loop {
            let Some(c) = self.peek() else {
                if !self.end_of_input {
                    self.lex = Lex::Comment(scanner);
                    return Ok(Some(Poll::NeedData));
                }
                scanner.end_of_input().map_err(|k| self.error(k))?;
                return Ok(Some(self.emit_comment(scanner.finish())));
            };
            match scanner.step(c) {
                Ok(ScanStep::More) => {
                    self.consume();
                }
                Ok(ScanStep::Done) => {
                    self.consume();
                    return Ok(Some(self.emit_comment(scanner.finish())));
                }
                Ok(ScanStep::DoneUnconsumed) => {
                    return Ok(Some(self.emit_comment(scanner.finish())));
                }
                Err(kind) => return Err(self.error(kind)),
            }
        }
    }

    fn step_constructor_name(&mut self) -> Result<Option<Poll>, ParseError> {
        let Lex::ConstructorName(mut scanner) = mem::replace(&mut self.lex, Lex::Default) else {
            unreachable!();
        };
        loop {
            let Some(c) = self.peek() else {
                if !self.end_of_input {
                    self.lex = Lex::ConstructorName(scanner);
                    return Ok(Some(Poll::NeedData));
                }
                return Err(self.error(scanner.end_of_input_error()));
            };
            match scanner.step(c) {
                Ok(ScanStep::More) => {
                    self.consume();
                }
                Ok(ScanStep::Done) => {
                    self.consume();
                    let name = scanner.finish();
                    return self
                        .open_container(ContainerKind::Constructor, JsonValue::Str(name))
                        .map(Some);
                }
                Ok(ScanStep::DoneUnconsumed) => unreachable!(),
                Err(kind) => return Err(self.error(kind)),
            }
        }
    }
}
