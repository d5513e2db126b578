use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that repeats a parser while input remains and a predicate accepts
///
/// Each round runs the parser from the current cursor:
/// - if the parser fails, the whole repetition fails, reporting the cursor
///   from before that attempt (not the entry cursor);
/// - if the predicate rejects the value, the value is dropped but the input
///   it consumed stays consumed, and the repetition stops successfully;
/// - if the predicate accepts a value that consumed nothing, the repetition
///   fails with [`ParseError::NoProgress`] instead of looping forever.
///
/// Stops successfully once the input is exhausted.
pub struct RepeatWhile<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> RepeatWhile<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        RepeatWhile { parser, predicate }
    }
}

impl<'code, P, F> Parser<'code> for RepeatWhile<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let mut current = cursor;

        while current.has_remaining() {
            let (value, next) = self.parser.parse(current).map_err(|f| f.rewind(current))?;
            if !(self.predicate)(&value) {
                current = next;
                break;
            }
            if next.offset() == current.offset() {
                return Err(Failure::new(ParseError::NoProgress, current));
            }
            results.push(value);
            current = next;
        }

        Ok((results, current))
    }
}

/// Convenience function to create a RepeatWhile parser
pub fn repeat_while<'code, P, F>(parser: P, predicate: F) -> RepeatWhile<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    RepeatWhile::new(parser, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::append::AppendExt;
    use crate::capture::capture;
    use crate::consume::{consume_some, consume_while};
    use crate::exactly::exactly;
    use crate::map::{start_skipping, unpack};
    use crate::predicate::{is_ascii_letter, is_not_whitespace, is_whitespace};

    #[test]
    fn test_reads_all_tokens() {
        let cursor = Cursor::new("hello my dear parser combinators");
        let token = unpack(
            start_skipping(consume_while(is_whitespace))
                .append_keeping(capture(consume_while(is_not_whitespace)))
                .append_skipping(consume_while(is_whitespace)),
        );
        let parser = repeat_while(token, |_| true);

        let (tokens, next) = parser.parse(cursor).unwrap();
        assert_eq!(tokens, vec!["hello", "my", "dear", "parser", "combinators"]);
        assert!(!next.has_remaining());
    }

    #[test]
    fn test_stops_when_predicate_rejects() {
        let cursor = Cursor::new("hello world");
        let parser = repeat_while(capture(consume_while(is_not_whitespace)), |s| !s.is_empty());

        let (tokens, next) = parser.parse(cursor).unwrap();
        assert_eq!(tokens, vec!["hello"]);
        assert_eq!(next.offset(), 5);
    }

    #[test]
    fn test_rejected_value_is_dropped_but_consumed() {
        let cursor = Cursor::new("aa,bb,STOP,cc");
        let item = capture(consume_some(is_ascii_letter)).append_skipping(exactly(","));
        let parser = repeat_while(item, |s| *s != "STOP");

        let (items, next) = parser.parse(cursor).unwrap();
        assert_eq!(items, vec!["aa", "bb"]);
        // "STOP," was consumed even though its value was not kept
        assert_eq!(next.remaining(), "cc");
    }

    #[test]
    fn test_failure_reports_cursor_before_attempt() {
        let cursor = Cursor::new("ab,cd,!");
        let item = capture(consume_some(is_ascii_letter)).append_skipping(exactly(","));
        let parser = repeat_while(item, |_| true);

        let failure = parser.parse(cursor).unwrap_err();
        assert_eq!(failure.cursor().offset(), 6);
        assert_eq!(failure.cursor().remaining(), "!");
    }

    #[test]
    fn test_empty_input() {
        let cursor = Cursor::new("");
        let (items, next) = repeat_while(exactly("a"), |_| true).parse(cursor).unwrap();
        assert!(items.is_empty());
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_zero_progress_is_an_error() {
        let cursor = Cursor::new("abc");
        let parser = repeat_while(consume_while(is_whitespace), |_| true);

        let failure = parser.parse(cursor).unwrap_err();
        assert_eq!(failure.error(), &ParseError::NoProgress);
        assert_eq!(failure.cursor(), cursor);
    }
}
