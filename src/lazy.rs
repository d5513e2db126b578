use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Builds its parser on every call instead of up front
///
/// Recursive grammars cannot hold themselves by value: a JSON array contains
/// values, which contain arrays. Put `lazy(value)` where the recursion
/// happens and the inner grammar is only constructed once parsing reaches
/// that point, so building the outer parser terminates.
pub struct Lazy<F> {
    factory: F,
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.factory)().parse(cursor)
    }
}

/// Defer building a parser until it runs, usually a grammar function that
/// refers back to itself
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy { factory }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::between::between;
    use crate::exactly::exactly;
    use crate::map::{MapExt, map_to};
    use crate::one_of::OrExt;
    use crate::parser::{BoxedExt, BoxedParser};
    use crate::repeat::repeat_while;
    use std::cell::Cell;

    #[test]
    fn test_lazy_basic() {
        let cursor = Cursor::new("aaaa");

        let lazy_parser = lazy(|| exactly("a"));
        let ((), remaining) = lazy_parser.parse(cursor).unwrap();
        assert_eq!(remaining.offset(), 1);
    }

    #[test]
    fn test_lazy_with_repeat() {
        let cursor = Cursor::new("aaaa");

        let lazy_parser = lazy(|| repeat_while(exactly("a"), |_| true));
        let (output, remaining) = lazy_parser.parse(cursor).unwrap();
        assert_eq!(output.len(), 4);
        assert_eq!(remaining.offset(), 4);
    }

    #[test]
    fn test_lazy_deferred_construction() {
        let built = Cell::new(0);
        let lazy_parser = lazy(|| {
            built.set(built.get() + 1);
            exactly("x")
        });
        assert_eq!(built.get(), 0);

        assert!(lazy_parser.parse(Cursor::new("xyz")).is_ok());
        assert!(lazy_parser.parse(Cursor::new("xyz")).is_ok());
        assert_eq!(built.get(), 2);
    }

    // depth of nested parentheses: "" | "(" nested ")"
    fn nested<'code>() -> BoxedParser<'code, usize> {
        between(exactly("("), lazy(nested), exactly(")"))
            .map(|depth| depth + 1)
            .or(map_to(exactly(""), 0))
            .boxed()
    }

    #[test]
    fn test_lazy_recursion() {
        let parser = nested();
        assert_eq!(crate::parser::parse(&parser, "((()))").unwrap(), 3);
        assert_eq!(crate::parser::parse(&parser, "").unwrap(), 0);
        assert!(crate::parser::parse(&parser, "(()").is_err());
    }
}
