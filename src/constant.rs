use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds with a clone of its value, consuming nothing
pub struct Succeed<T> {
    value: T,
}

impl<'code, T> Parser<'code> for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed { value }
}

/// Parser that always fails without consuming input
pub struct Fail<T> {
    message: Option<Cow<'static, str>>,
    _phantom: PhantomData<fn() -> T>,
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let error = match &self.message {
            Some(message) => ParseError::message(message.clone()),
            None => ParseError::NoMatch,
        };
        Err(Failure::new(error, cursor))
    }
}

/// Parser that always fails with [`ParseError::NoMatch`]
pub fn fail<T>() -> Fail<T> {
    Fail {
        message: None,
        _phantom: PhantomData,
    }
}

/// Parser that always fails with the given message
pub fn fail_with<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail {
        message: Some(message.into()),
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeed_consumes_nothing() {
        let cursor = Cursor::new("hello");
        let (value, next) = succeed(42).parse(cursor).unwrap();
        assert_eq!(value, 42);
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_succeed_on_empty_input() {
        let cursor = Cursor::new("");
        let (value, _) = succeed(String::from("x")).parse(cursor).unwrap();
        assert_eq!(value, "x");
    }

    #[test]
    fn test_fail() {
        let cursor = Cursor::new("hello").advance(2);
        let failure = fail::<i32>().parse(cursor).unwrap_err();
        assert_eq!(failure.error(), &ParseError::NoMatch);
        assert_eq!(failure.cursor(), cursor);
    }

    #[test]
    fn test_fail_with_message() {
        let failure = fail_with::<()>("leading zero").parse(Cursor::new("00")).unwrap_err();
        assert_eq!(failure.to_string(), "leading zero");
        assert_eq!(failure.error(), &ParseError::message("leading zero"));
    }
}
