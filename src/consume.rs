use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};

// One step of every predicate scan. End of input never satisfies a predicate.
fn step<'code, F>(predicate: &F, cursor: Cursor<'code>) -> Option<Cursor<'code>>
where
    F: Fn(char) -> bool,
{
    match cursor.next_char() {
        Some((ch, next)) if predicate(ch) => Some(next),
        _ => None,
    }
}

fn scan<'code, F>(predicate: &F, mut cursor: Cursor<'code>) -> Cursor<'code>
where
    F: Fn(char) -> bool,
{
    while let Some(next) = step(predicate, cursor) {
        cursor = next;
    }
    cursor
}

/// Parser that consumes a single character if the predicate holds
pub struct ConsumeIf<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for ConsumeIf<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match step(&self.predicate, cursor) {
            Some(next) => Ok(((), next)),
            None => Err(Failure::no_match(cursor)),
        }
    }
}

/// Convenience function to create a ConsumeIf parser
pub fn consume_if<F>(predicate: F) -> ConsumeIf<F>
where
    F: Fn(char) -> bool,
{
    ConsumeIf { predicate }
}

/// Parser that consumes characters for as long as the predicate holds
///
/// Never fails: matching nothing succeeds with the cursor unchanged.
pub struct ConsumeWhile<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for ConsumeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(((), scan(&self.predicate, cursor)))
    }
}

/// Convenience function to create a ConsumeWhile parser
pub fn consume_while<F>(predicate: F) -> ConsumeWhile<F>
where
    F: Fn(char) -> bool,
{
    ConsumeWhile { predicate }
}

/// Parser that consumes one or more characters matching the predicate
pub struct ConsumeSome<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for ConsumeSome<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        // First character must match
        let first = step(&self.predicate, cursor).ok_or_else(|| Failure::no_match(cursor))?;
        Ok(((), scan(&self.predicate, first)))
    }
}

/// Convenience function to create a ConsumeSome parser
pub fn consume_some<F>(predicate: F) -> ConsumeSome<F>
where
    F: Fn(char) -> bool,
{
    ConsumeSome { predicate }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{is_any_of, is_decimal_digit};

    #[test]
    fn test_consume_if_match() {
        let cursor = Cursor::new("7up");
        let (_, next) = consume_if(is_decimal_digit).parse(cursor).unwrap();
        assert_eq!(next.remaining(), "up");
    }

    #[test]
    fn test_consume_if_mismatch() {
        let cursor = Cursor::new("up");
        let failure = consume_if(is_decimal_digit).parse(cursor).unwrap_err();
        assert_eq!(failure.cursor(), cursor);
    }

    #[test]
    fn test_consume_if_end_of_input() {
        // A predicate that accepts everything still rejects end of input
        let cursor = Cursor::new("");
        assert!(consume_if(|_| true).parse(cursor).is_err());
    }

    #[test]
    fn test_consume_if_multibyte() {
        let cursor = Cursor::new("中文");
        let (_, next) = consume_if(|c| c == '中').parse(cursor).unwrap();
        assert_eq!(next.offset(), 3);
        assert_eq!(next.remaining(), "文");
    }

    #[test]
    fn test_consume_while() {
        let test_cases = [("cba", ""), ("xxx", "xxx"), ("abcd", "d"), ("", "")];

        for (input, expected) in test_cases {
            let parser = consume_while(is_any_of(&['a', 'b', 'c']));
            let (_, next) = parser.parse(Cursor::new(input)).unwrap();
            assert_eq!(next.remaining(), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_consume_some_requires_one() {
        let parser = consume_some(is_decimal_digit);

        let failure = parser.parse(Cursor::new("x12")).unwrap_err();
        assert_eq!(failure.cursor().offset(), 0);

        assert!(parser.parse(Cursor::new("")).is_err());
    }

    #[test]
    fn test_consume_some_scans_on() {
        let parser = consume_some(is_decimal_digit);

        let (_, next) = parser.parse(Cursor::new("1")).unwrap();
        assert!(!next.has_remaining());

        let (_, next) = parser.parse(Cursor::new("123abc")).unwrap();
        assert_eq!(next.remaining(), "abc");
    }
}
