//! Comment scanning: `//` line comments and `/* */` block comments.
//!
//! The leading `/` is consumed by the dispatcher; the scanner sees the
//! character after it first. Comment tokens carry the body text without
//! delimiters and are always emitted to the caller, never skipped.

use super::ScanStep;
use crate::error::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentPhase {
    /// Expecting `/` or `*` after the opening slash.
    Open,
    Line,
    Block,
    /// Inside a block comment, just saw `*`.
    BlockStar,
}

#[derive(Debug)]
pub(crate) struct CommentScanner {
    text: String,
    phase: CommentPhase,
}

impl CommentScanner {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            phase: CommentPhase::Open,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.text
    }

    pub(crate) fn step(&mut self, c: char) -> Result<ScanStep, ErrorKind> {
        match self.phase {
            CommentPhase::Open => match c {
                '/' => {
                    self.phase = CommentPhase::Line;
                    Ok(ScanStep::More)
                }
                '*' => {
                    self.phase = CommentPhase::Block;
                    Ok(ScanStep::More)
                }
                other => Err(ErrorKind::CommentExpectedStar(other)),
            },
            CommentPhase::Line => {
                if matches!(c, '\n' | '\r') {
                    // The newline belongs to the surrounding whitespace.
                    Ok(ScanStep::DoneUnconsumed)
                } else {
                    self.text.push(c);
                    Ok(ScanStep::More)
                }
            }
            CommentPhase::Block => {
                if c == '*' {
                    self.phase = CommentPhase::BlockStar;
                } else {
                    self.text.push(c);
                }
                Ok(ScanStep::More)
            }
            CommentPhase::BlockStar => match c {
                '/' => Ok(ScanStep::Done),
                '*' => {
                    self.text.push('*');
                    Ok(ScanStep::More)
                }
                other => {
                    self.text.push('*');
                    self.text.push(other);
                    self.phase = CommentPhase::Block;
                    Ok(ScanStep::More)
                }
            },
        }
    }

    /// End of input: a line comment simply ends, anything else is a fault.
    pub(crate) fn end_of_input(&self) -> Result<(), ErrorKind> {
        if self.phase == CommentPhase::Line {
            Ok(())
        } else {
            Err(ErrorKind::UnexpectedEndComment)
        }
    }
}
