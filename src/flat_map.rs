use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that chooses the next parser based on the previous value
///
/// The mapper builds a new parser from the first parser's value, which then
/// runs from where the first one stopped. Returning
/// [`succeed`](crate::succeed) or [`fail`](crate::fail) turns this into
/// value validation. A failure of either stage reverts to the entry cursor.
pub struct FlatMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        FlatMap { parser, mapper }
    }
}

impl<'code, P, F, Q> Parser<'code> for FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, next) = self.parser.parse(cursor).map_err(|f| f.rewind(cursor))?;
        (self.mapper)(value)
            .parse(next)
            .map_err(|f| f.rewind(cursor))
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'code, P, F, Q>(parser: P, mapper: F) -> FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    FlatMap::new(parser, mapper)
}

/// Parser that applies a predicate function to filter the output of another parser
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<'code, P, F> Parser<'code> for Filter<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, next) = self.parser.parse(cursor).map_err(|f| f.rewind(cursor))?;

        if (self.predicate)(&value) {
            Ok((value, next))
        } else {
            Err(Failure::new(
                ParseError::message(self.error_message.clone()),
                cursor,
            ))
        }
    }
}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> Filter<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate, error_message.into())
}

/// Extension trait to add .flat_map() and .filter() method support for parsers
pub trait FlatMapExt<'code>: Parser<'code> + Sized {
    fn flat_map<F, Q>(self, mapper: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        FlatMap::new(self, mapper)
    }

    fn filter<F>(self, predicate: F, error_message: impl Into<Cow<'static, str>>) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate, error_message.into())
    }
}

impl<'code, P: Parser<'code>> FlatMapExt<'code> for P {}
