use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries alternatives in order from the same position
///
/// Returns the first success. If every alternative fails, the failure of the
/// *last* alternative is reported; with no alternatives at all it fails with
/// [`ParseError::NoMatch`](crate::ParseError::NoMatch). Mix parser types by
/// boxing them into [`BoxedParser`](crate::BoxedParser)s.
pub struct OneOf<P> {
    parsers: Vec<P>,
}

impl<P> OneOf<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        OneOf { parsers }
    }
}

impl<'code, P> Parser<'code> for OneOf<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut last = Failure::no_match(cursor);
        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(failure) => last = failure,
            }
        }
        Err(last.rewind(cursor))
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<'code, P>(parsers: impl IntoIterator<Item = P>) -> OneOf<P>
where
    P: Parser<'code>,
{
    OneOf::new(parsers.into_iter().collect())
}

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both failing reports the second parser's failure, like [`OneOf`].
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.first.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.second.parse(cursor).map_err(|f| f.rewind(cursor)),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(first, second)
}
