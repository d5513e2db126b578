//! Shorthands for `left op right` shaped grammars, built from nested chains

use crate::append::AppendExt;
use crate::map::{MapExt, map_nested3, unpack2};
use crate::parser::Parser;

/// Match `left op right` and return all three values
///
/// # Examples
/// - `"45+3"` with digit operands and an operator alternative → `("45", "+", "3")`
pub fn infix<'code, L, O, R>(
    left: L,
    op: O,
    right: R,
) -> impl Parser<'code, Output = (L::Output, O::Output, R::Output)>
where
    L: Parser<'code>,
    O: Parser<'code>,
    R: Parser<'code>,
{
    map_nested3(
        left.start_keeping().append_keeping(op).append_keeping(right),
        |l, o, r| (l, o, r),
    )
}

/// Match `left separator right`, discarding the separator
///
/// # Examples
/// - `"hello->world"` with separator `->` → `("hello", "world")`
pub fn left_and_right<'code, L, S, R>(
    left: L,
    separator: S,
    right: R,
) -> impl Parser<'code, Output = (L::Output, R::Output)>
where
    L: Parser<'code>,
    S: Parser<'code>,
    R: Parser<'code>,
{
    unpack2(
        left.start_keeping()
            .append_skipping(separator)
            .append_keeping(right),
    )
}
