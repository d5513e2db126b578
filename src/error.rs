use crate::cursor::Cursor;
use std::borrow::Cow;
use thiserror::Error;

/// Why a parser did not match
///
/// Kinds are compared structurally, so callers can match on
/// `ParseError::NoMatch` instead of comparing against shared error values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A primitive's expectation was not met at the current position
    #[error("no match")]
    NoMatch,
    /// The parser succeeded but did not consume the whole input
    #[error("unconsumed input")]
    UnconsumedInput,
    /// A failure re-wrapped with human readable context
    #[error("error parsing {label}: {inner}")]
    Labeled {
        label: Cow<'static, str>,
        #[source]
        inner: Box<ParseError>,
    },
    /// A failure with a caller supplied message
    #[error("{0}")]
    Message(Cow<'static, str>),
    /// A repetition body succeeded without consuming input
    #[error("repetition made no progress")]
    NoProgress,
}

impl ParseError {
    pub fn labeled(label: impl Into<Cow<'static, str>>, inner: ParseError) -> Self {
        ParseError::Labeled {
            label: label.into(),
            inner: Box::new(inner),
        }
    }

    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError::Message(message.into())
    }

    /// Strip every label and return the innermost error
    pub fn root(&self) -> &ParseError {
        match self {
            ParseError::Labeled { inner, .. } => inner.root(),
            other => other,
        }
    }
}

/// Human readable location of a failure
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReadablePosition {
    /// 1-based line number
    pub line: usize,
    /// Byte offset within the line
    pub byte_offset: usize,
}

/// A failed parse: the error and the cursor the failing parser reports
///
/// Under the backtracking contract the cursor is the one the parser was
/// given. The top-level [`parse`](crate::parse) driver reports the final
/// cursor for [`ParseError::UnconsumedInput`] so that the leftover text can
/// be shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct Failure<'code> {
    error: ParseError,
    cursor: Cursor<'code>,
}

impl<'code> Failure<'code> {
    pub fn new(error: ParseError, cursor: Cursor<'code>) -> Self {
        Failure { error, cursor }
    }

    pub fn no_match(cursor: Cursor<'code>) -> Self {
        Failure::new(ParseError::NoMatch, cursor)
    }

    pub fn error(&self) -> &ParseError {
        &self.error
    }

    pub fn cursor(&self) -> Cursor<'code> {
        self.cursor
    }

    pub fn into_error(self) -> ParseError {
        self.error
    }

    /// Report the failure at `cursor` instead
    ///
    /// Combinators call this with their entry cursor so that no partial
    /// consumption escapes a failure.
    pub fn rewind(self, cursor: Cursor<'code>) -> Self {
        Failure {
            error: self.error,
            cursor,
        }
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Byte offset rather than column: columns depend on tab width and on
    /// how wide characters render, the byte offset is unambiguous.
    pub fn position(&self) -> ReadablePosition {
        let source = self.cursor.source();
        let loc = self.cursor.offset();
        let before = source.get(..loc).unwrap_or(source);

        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: loc - line_start,
        }
    }

    /// Up to 2 lines before and after the failure, with a pointer under it
    fn context_lines(&self) -> Vec<String> {
        let pos = self.position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.cursor.source().split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first || current_line > last {
                continue;
            }
            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }

    /// Multi-line description of the failure with surrounding source
    pub fn report(&self) -> String {
        let pos = self.position();
        let mut out = format!(
            "{} at line {}, byte offset {} (absolute position: {})\n\n",
            self.error,
            pos.line,
            pos.byte_offset,
            self.cursor.offset()
        );
        for line in self.context_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_messages() {
        assert_eq!(ParseError::NoMatch.to_string(), "no match");
        assert_eq!(ParseError::UnconsumedInput.to_string(), "unconsumed input");
        assert_eq!(
            ParseError::NoProgress.to_string(),
            "repetition made no progress"
        );
    }

    #[test]
    fn test_labeled_message_nests() {
        let error = ParseError::labeled(
            "object",
            ParseError::labeled("entry", ParseError::NoMatch),
        );
        assert_eq!(
            error.to_string(),
            "error parsing object: error parsing entry: no match"
        );
        assert_eq!(error.root(), &ParseError::NoMatch);
    }

    #[test]
    fn test_failure_displays_error_only() {
        let cursor = Cursor::new("abc").advance(1);
        let failure = Failure::new(ParseError::labeled("digits", ParseError::NoMatch), cursor);
        assert_eq!(failure.to_string(), "error parsing digits: no match");
    }

    #[test]
    fn test_rewind_keeps_error() {
        let start = Cursor::new("abc");
        let failure = Failure::no_match(start.advance(2)).rewind(start);
        assert_eq!(failure.cursor(), start);
        assert_eq!(failure.error(), &ParseError::NoMatch);
    }

    #[test]
    fn test_readable_position_eos() {
        let cursor = Cursor::new("line1\nline2").advance(11);
        let pos = Failure::no_match(cursor).position();

        // Past "line2" on line 2
        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 5);
    }

    #[test]
    fn test_readable_position_after_newline() {
        let cursor = Cursor::new("hello\n").advance(6);
        let pos = Failure::no_match(cursor).position();
        assert_eq!(pos, ReadablePosition { line: 2, byte_offset: 0 });
    }

    #[test]
    fn test_report_points_at_failure() {
        let cursor = Cursor::new("hello\nwor?ld\nagain").advance(9);
        let report = Failure::no_match(cursor).report();

        assert!(report.starts_with("no match at line 2, byte offset 3"));
        assert!(report.contains("  > 2 | wor?ld"));
        assert!(report.contains("    1 | hello"));
        assert!(report.contains("^--- here"));
    }

    #[test]
    fn test_report_empty_input() {
        let report = Failure::new(ParseError::NoMatch, Cursor::new("")).report();
        assert!(report.contains("line 1"));
    }
}
