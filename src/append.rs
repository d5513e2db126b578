use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.append_keeping()` calls, this produces nested
/// tuples like `((((), a), b), c)` rather than flat tuples. Start a chain with
/// [`start_keeping`](crate::start_keeping) and unwrap it with
/// [`map_nested2`](crate::map_nested2) and friends, or use a tuple of parsers
/// for a flat result.
pub struct AppendKeeping<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> AppendKeeping<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        AppendKeeping { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for AppendKeeping<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, next) = self.first.parse(cursor).map_err(|f| f.rewind(cursor))?;
        let (second, next) = self.second.parse(next).map_err(|f| f.rewind(cursor))?;
        Ok(((first, second), next))
    }
}

/// Convenience function to create an AppendKeeping parser
pub fn append_keeping<'code, P1, P2>(first: P1, second: P2) -> AppendKeeping<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    AppendKeeping::new(first, second)
}

/// Parser combinator that sequences two parsers and keeps only the first result
pub struct AppendSkipping<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> AppendSkipping<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        AppendSkipping { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for AppendSkipping<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, next) = self.first.parse(cursor).map_err(|f| f.rewind(cursor))?;
        let (_, next) = self.second.parse(next).map_err(|f| f.rewind(cursor))?;
        Ok((first, next))
    }
}

/// Convenience function to create an AppendSkipping parser
pub fn append_skipping<'code, P1, P2>(first: P1, second: P2) -> AppendSkipping<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    AppendSkipping::new(first, second)
}

/// Extension trait to add .append_keeping() and .append_skipping() method support for parsers
pub trait AppendExt<'code>: Parser<'code> + Sized {
    fn append_keeping<P>(self, other: P) -> AppendKeeping<Self, P>
    where
        P: Parser<'code>,
    {
        AppendKeeping::new(self, other)
    }

    fn append_skipping<P>(self, other: P) -> AppendSkipping<Self, P>
    where
        P: Parser<'code>,
    {
        AppendSkipping::new(self, other)
    }
}

/// Implement AppendExt for all parsers
impl<'code, P> AppendExt<'code> for P where P: Parser<'code> {}
