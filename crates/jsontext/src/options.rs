//! Configuration for the reader and the writer.

/// How string values that look like dates are surfaced by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateParseHandling {
    /// Date-like strings stay `String` tokens.
    #[default]
    None,
    /// Date-like strings become `Date` tokens with a local date-time value.
    DateTime,
    /// Date-like strings become `Date` tokens with an offset date-time value.
    DateTimeOffset,
}

/// Which numeric subtype floating-point literals decode to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatParseHandling {
    /// Decode to `f64`.
    #[default]
    Double,
    /// Decode to a fixed-point decimal at full precision. `NaN` and
    /// `Infinity` literals are rejected in this mode.
    FixedDecimal,
}

/// Whitespace emitted by the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formatting {
    /// No inserted whitespace.
    #[default]
    None,
    /// Child tokens on new lines, indented per [`WriterOptions::indentation`].
    Indented,
}

/// Numeric text conventions used when typed accessors coerce strings.
///
/// Only the separators matter to this crate: group separators are stripped
/// and the decimal separator is mapped to `.` before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culture {
    /// Character separating the integral and fractional parts.
    pub decimal_separator: char,
    /// Thousands-group separator accepted (and ignored) in numeric text.
    pub group_separator: char,
}

impl Culture {
    /// The invariant culture: `.` decimal separator, `,` group separator.
    #[must_use]
    pub const fn invariant() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
        }
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

/// Configuration options for the JSON reader.
///
/// # Examples
///
/// ```rust
/// use jsontext::{JsonTextReader, ReaderOptions};
///
/// let options = ReaderOptions {
///     support_multiple_content: true,
///     ..ReaderOptions::default()
/// };
/// let mut reader = JsonTextReader::from_str_with("1 2 3", options);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReaderOptions {
    /// Maximum allowed container nesting depth, or `None` for unlimited.
    ///
    /// A violation is reported once per offending container: the failing
    /// `read` returns an error, the container is still entered, and parsing
    /// continues normally afterward.
    ///
    /// # Default
    ///
    /// `Some(64)`
    pub max_depth: Option<u32>,

    /// Whether date-like string values become `Date` tokens.
    ///
    /// # Default
    ///
    /// [`DateParseHandling::None`]
    pub date_parse_handling: DateParseHandling,

    /// Whether float literals decode to doubles or fixed-point decimals.
    ///
    /// # Default
    ///
    /// [`FloatParseHandling::Double`]
    pub float_parse_handling: FloatParseHandling,

    /// Numeric text conventions for string coercion in typed accessors.
    ///
    /// # Default
    ///
    /// [`Culture::invariant`]
    pub culture: Culture,

    /// Whether to parse multiple whitespace-delimited JSON values from one
    /// stream (JSON Lines, concatenated values).
    ///
    /// When `false`, non-whitespace content after a fully-closed top-level
    /// value is an error.
    ///
    /// # Default
    ///
    /// `false`
    pub support_multiple_content: bool,

    /// Whether closing the reader also closes the underlying character
    /// source.
    ///
    /// # Default
    ///
    /// `true`
    pub close_input: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(64),
            date_parse_handling: DateParseHandling::default(),
            float_parse_handling: FloatParseHandling::default(),
            culture: Culture::invariant(),
            support_multiple_content: false,
            close_input: true,
        }
    }
}

/// Configuration options for the JSON writer.
#[derive(Debug, Clone, Copy)]
pub struct WriterOptions {
    /// Whitespace mode.
    ///
    /// # Default
    ///
    /// [`Formatting::None`]
    pub formatting: Formatting,

    /// Spaces per nesting level in [`Formatting::Indented`] mode.
    ///
    /// # Default
    ///
    /// `2`
    pub indentation: usize,

    /// Quote character for strings and property names. Must be `"` or `'`.
    ///
    /// # Default
    ///
    /// `"`
    pub quote_char: char,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            formatting: Formatting::None,
            indentation: 2,
            quote_char: '"',
        }
    }
}
