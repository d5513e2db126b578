use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, next) = self.parser.parse(cursor).map_err(|f| f.rewind(cursor))?;
        Ok(((self.mapper)(value), next))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Replace the unit result of a matcher with a fixed value
pub fn map_to<'code, P, T>(parser: P, value: T) -> Map<P, impl Fn(()) -> T>
where
    P: Parser<'code, Output = ()>,
    T: Clone,
{
    Map::new(parser, move |()| value.clone())
}

/// Wrap a parser's result as `((), value)`, the head of a nested chain
pub fn start_keeping<'code, P>(parser: P) -> Map<P, fn(P::Output) -> ((), P::Output)>
where
    P: Parser<'code>,
{
    Map::new(parser, |value| ((), value))
}

/// Discard a parser's result
pub fn start_skipping<'code, P>(parser: P) -> Map<P, fn(P::Output)>
where
    P: Parser<'code>,
{
    Map::new(parser, |_| ())
}

/// Strip the unit head from a one level chain
pub fn unpack<'code, P, T>(parser: P) -> Map<P, fn(((), T)) -> T>
where
    P: Parser<'code, Output = ((), T)>,
{
    Map::new(parser, |((), t)| t)
}

/// Flatten a two level chain into a pair
pub fn unpack2<'code, P, T, U>(parser: P) -> Map<P, fn((((), T), U)) -> (T, U)>
where
    P: Parser<'code, Output = (((), T), U)>,
{
    Map::new(parser, |(((), t), u)| (t, u))
}

pub fn map_nested1<'code, P, F, T, A>(parser: P, mapper: F) -> Map<P, impl Fn(((), T)) -> A>
where
    P: Parser<'code, Output = ((), T)>,
    F: Fn(T) -> A,
{
    Map::new(parser, move |((), t)| mapper(t))
}

/// Map the results of a two level chain such as
/// `start_keeping(a).append_keeping(b)`
pub fn map_nested2<'code, P, F, T, U, A>(
    parser: P,
    mapper: F,
) -> Map<P, impl Fn((((), T), U)) -> A>
where
    P: Parser<'code, Output = (((), T), U)>,
    F: Fn(T, U) -> A,
{
    Map::new(parser, move |(((), t), u)| mapper(t, u))
}

pub fn map_nested3<'code, P, F, T, U, V, A>(
    parser: P,
    mapper: F,
) -> Map<P, impl Fn(((((), T), U), V)) -> A>
where
    P: Parser<'code, Output = ((((), T), U), V)>,
    F: Fn(T, U, V) -> A,
{
    Map::new(parser, move |((((), t), u), v)| mapper(t, u, v))
}

pub fn map_nested4<'code, P, F, T, U, V, W, A>(
    parser: P,
    mapper: F,
) -> Map<P, impl Fn((((((), T), U), V), W)) -> A>
where
    P: Parser<'code, Output = (((((), T), U), V), W)>,
    F: Fn(T, U, V, W) -> A,
{
    Map::new(parser, move |(((((), t), u), v), w)| mapper(t, u, v, w))
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn start_keeping(self) -> Map<Self, fn(Self::Output) -> ((), Self::Output)> {
        start_keeping(self)
    }

    fn start_skipping(self) -> Map<Self, fn(Self::Output)> {
        start_skipping(self)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
