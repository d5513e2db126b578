use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value with
/// the delimiters discarded. Whitespace is not handled automatically; put a
/// [`consume_while`](crate::consume_while) into the delimiters for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"'a'"` → `"a"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, next) = self.open.parse(cursor).map_err(|f| f.rewind(cursor))?;
        let (content, next) = self.content.parse(next).map_err(|f| f.rewind(cursor))?;
        let (_, next) = self.close.parse(next).map_err(|f| f.rewind(cursor))?;
        Ok((content, next))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}
