use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parse `separator element` pairs after the first element until no separator follows
///
/// A separator that is not followed by an element is a hard failure,
/// reported at `entry`.
fn rest_of_list<'code, P, PS>(
    parser: &P,
    separator: &PS,
    entry: Cursor<'code>,
    mut results: Vec<P::Output>,
    mut cursor: Cursor<'code>,
) -> ParseResult<'code, Vec<P::Output>>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    while cursor.has_remaining() {
        let after_separator = match separator.parse(cursor) {
            Ok((_, next)) => next,
            Err(_) => break,
        };

        let (value, next) = parser
            .parse(after_separator)
            .map_err(|f| f.rewind(entry))?;
        results.push(value);
        cursor = next;
    }

    Ok((results, cursor))
}

/// Parser combinator that matches zero or more items separated by a parser
///
/// Empty input yields an empty list. Otherwise the first element is
/// mandatory, and every separator must be followed by another element.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `""` → `vec![]`
/// - `"a,"` → error
///
/// Does not handle whitespace automatically; fold it into the separator.
pub struct SepBy<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SepBy<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SepBy { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SepBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if !cursor.has_remaining() {
            return Ok((Vec::new(), cursor));
        }

        let (first, next) = self.parser.parse(cursor).map_err(|f| f.rewind(cursor))?;
        rest_of_list(&self.parser, &self.separator, cursor, vec![first], next)
    }
}

/// Creates a parser that matches zero or more items separated by the given parser
pub fn sep_by<'code, P, PS>(parser: P, separator: PS) -> SepBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SepBy::new(parser, separator)
}

/// Parser combinator that matches a separated list running to the end of input
///
/// Stricter than [`SepBy`]: the list only ends successfully once the input is
/// exhausted after a second or later element. Every element before that
/// must be followed by a separator, so a lone element, a missing separator
/// or leftover input are all errors reported at the entry cursor.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"a"` → error
/// - `"a,b;c"` → error
pub struct SepBy1<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SepBy1<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SepBy1 { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SepBy1<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(1);
        let mut current = cursor;

        loop {
            let (value, next) = self.parser.parse(current).map_err(|f| f.rewind(cursor))?;
            results.push(value);
            if results.len() > 1 && !next.has_remaining() {
                return Ok((results, next));
            }

            let (_, next) = self.separator.parse(next).map_err(|f| f.rewind(cursor))?;
            current = next;
        }
    }
}

/// Creates a parser that matches two or more items separated by the given parser
pub fn sep_by1<'code, P, PS>(parser: P, separator: PS) -> SepBy1<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SepBy1::new(parser, separator)
}
