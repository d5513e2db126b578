//! Flat sequencing: a tuple of parsers is itself a parser
//!
//! `(a, b, c)` runs `a`, `b` and `c` in order and returns `(A, B, C)`,
//! without the nested pairs produced by chained appends. Any failure is
//! reported at the cursor the tuple was given.

use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

macro_rules! impl_parser_for_tuple {
    ($($index:tt $parser:ident $output:ident),+) => {
        #[allow(non_snake_case)]
        impl<'code, $($parser),+> Parser<'code> for ($($parser),+,)
        where
            $($parser: Parser<'code>),+
        {
            type Output = ($($parser::Output),+,);

            fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
                let next = cursor;
                $(
                    let ($output, next) = self.$index.parse(next).map_err(|f| f.rewind(cursor))?;
                )+
                Ok((($($output),+,), next))
            }
        }
    };
}

impl_parser_for_tuple!(0 P0 O0, 1 P1 O1);
impl_parser_for_tuple!(0 P0 O0, 1 P1 O1, 2 P2 O2);
impl_parser_for_tuple!(0 P0 O0, 1 P1 O1, 2 P2 O2, 3 P3 O3);
