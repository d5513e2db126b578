use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact token byte for byte
pub struct Exactly {
    token: Cow<'static, str>,
}

impl Exactly {
    pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl<'code> Parser<'code> for Exactly {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if !cursor.remaining().starts_with(self.token.as_ref()) {
            return Err(Failure::no_match(cursor));
        }
        Ok(((), cursor.advance(self.token.len())))
    }
}

/// Convenience function to create an Exactly parser
pub fn exactly(token: impl Into<Cow<'static, str>>) -> Exactly {
    Exactly::new(token)
}
