use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that returns the text consumed by the inner parser
///
/// The inner parser's value is discarded; only how far it moved the cursor
/// matters. The returned slice borrows from the input, nothing is copied.
pub struct Capture<P> {
    parser: P,
}

impl<P> Capture<P> {
    pub fn new(parser: P) -> Self {
        Capture { parser }
    }
}

impl<'code, P> Parser<'code> for Capture<P>
where
    P: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, next) = self.parser.parse(cursor).map_err(|f| f.rewind(cursor))?;
        Ok((next.consumed_since(cursor), next))
    }
}

/// Convenience function to create a Capture parser
pub fn capture<'code, P>(parser: P) -> Capture<P>
where
    P: Parser<'code>,
{
    Capture::new(parser)
}

/// Byte range of the input a parser consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the text of `source` that this span covers
    pub fn slice<'code>(&self, source: &'code str) -> &'code str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}

/// A parser combinator that captures the span of a successful parse next to its value
pub struct Spanned<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, next) = self.parser.parse(cursor).map_err(|f| f.rewind(cursor))?;
        Ok(((value, Span::new(cursor.offset(), next.offset())), next))
    }
}

/// Convenience function to create a Spanned parser
pub fn spanned<'code, P>(parser: P) -> Spanned<P>
where
    P: Parser<'code>,
{
    Spanned { parser }
}

/// Extension trait to add .capture() and .spanned() method support for parsers
pub trait CaptureExt<'code>: Parser<'code> + Sized {
    fn capture(self) -> Capture<Self> {
        Capture::new(self)
    }

    fn spanned(self) -> Spanned<Self> {
        Spanned { parser: self }
    }
}

impl<'code, P> CaptureExt<'code> for P where P: Parser<'code> {}
