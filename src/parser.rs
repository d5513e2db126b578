use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use std::rc::Rc;
use std::sync::Arc;

/// Outcome of a single parse attempt
///
/// On success the value and the advanced cursor, on failure a [`Failure`]
/// whose cursor equals the one the parser was given.
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), Failure<'code>>;

/// Core parser trait for parser combinators
///
/// Parsers are immutable values: they hold no state between calls and can be
/// reused across any number of parses, including from several threads at once
/// when the parser itself is `Sync`.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Failures must not consume input: the
    /// failure's cursor is the `cursor` passed in.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

/// Type-erased parser, used to mix parser types and to build recursive grammars
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + 'code>;

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Parser backed by a plain function or closure
pub struct FromFn<F> {
    function: F,
}

impl<'code, F, T> Parser<'code> for FromFn<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.function)(cursor)
    }
}

/// Turn a function from cursor to result into a parser
///
/// The function is responsible for upholding the rewind-on-failure contract.
pub fn from_fn<'code, F, T>(function: F) -> FromFn<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    FromFn { function }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

/// Run `parser` over the whole of `input`
///
/// Succeeds only if the parser succeeds and consumes every byte. When input
/// is left over the value is discarded and the failure, carrying
/// [`ParseError::UnconsumedInput`], points at the first unconsumed byte.
pub fn parse<'code, P>(parser: &P, input: &'code str) -> Result<P::Output, Failure<'code>>
where
    P: Parser<'code> + ?Sized,
{
    let (value, cursor) = parser.parse(Cursor::new(input))?;
    if cursor.has_remaining() {
        return Err(Failure::new(ParseError::UnconsumedInput, cursor));
    }
    Ok(value)
}
