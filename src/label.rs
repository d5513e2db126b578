use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that prefixes a failure with human readable context
///
/// On failure the error becomes [`ParseError::Labeled`], displayed as
/// `error parsing <label>: <inner>`, and the cursor is reset to the entry
/// cursor. Success passes through unchanged.
pub struct WithLabel<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> WithLabel<P> {
    pub fn new(parser: P, label: impl Into<Cow<'static, str>>) -> Self {
        WithLabel {
            parser,
            label: label.into(),
        }
    }
}

impl<P> fmt::Debug for WithLabel<P>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithLabel")
            .field("parser", &self.parser)
            .field("label", &self.label)
            .finish()
    }
}

impl<'code, P> Parser<'code> for WithLabel<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|f| {
            Failure::new(
                ParseError::labeled(self.label.clone(), f.into_error()),
                cursor,
            )
        })
    }
}

/// Extension trait to add .with_label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn with_label(self, label: impl Into<Cow<'static, str>>) -> WithLabel<Self> {
        WithLabel::new(self, label)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a WithLabel parser
pub fn with_label<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> WithLabel<P>
where
    P: Parser<'code>,
{
    WithLabel::new(parser, label)
}
