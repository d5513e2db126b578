//! # RuneComb - Parser Combinator Library
//!
//! A small parser combinator engine over UTF-8 string input.
//!
//! Parsers are immutable values implementing [`Parser`]. Primitives match a
//! literal token or characters selected by a predicate; combinators build
//! larger parsers from smaller ones by sequencing, choice, repetition,
//! separated lists, capture, mapping and labeling. The library emphasizes:
//!
//! - **Backtracking contract**: a failing parser reports the cursor it was
//!   given, so no partial consumption leaks out of a failure
//! - **Zero panics**: all parsing errors are handled through `Result` types
//! - **Readable errors**: labels add context, [`Failure::report`] points at
//!   the offending line
//! - **Composability**: parsers are plain values, freely shared and reused
//!
//! ```
//! use runecomb::{capture, consume_some, exactly, infix, one_of, parse};
//! use runecomb::predicate::is_decimal_digit;
//!
//! let sum = infix(
//!     capture(consume_some(is_decimal_digit)),
//!     capture(one_of(["+", "-"].map(exactly))),
//!     capture(consume_some(is_decimal_digit)),
//! );
//! assert_eq!(parse(&sum, "45+3").unwrap(), ("45", "+", "3"));
//! assert!(parse(&sum, "3x5").is_err());
//! ```

pub mod append;
pub mod between;
pub mod capture;
pub mod constant;
pub mod consume;
pub mod cursor;
pub mod error;
pub mod exactly;
pub mod flat_map;
pub mod infix;
pub mod label;
pub mod lazy;
pub mod map;
pub mod one_of;
pub mod parser;
pub mod predicate;
pub mod repeat;
pub mod separated_list;
pub mod sequence;

pub use append::{AppendExt, AppendKeeping, AppendSkipping, append_keeping, append_skipping};
pub use between::{Between, between};
pub use capture::{Capture, CaptureExt, Span, Spanned, capture, spanned};
pub use constant::{Fail, Succeed, fail, fail_with, succeed};
pub use consume::{ConsumeIf, ConsumeSome, ConsumeWhile, consume_if, consume_some, consume_while};
pub use cursor::Cursor;
pub use error::{Failure, ParseError, ReadablePosition};
pub use exactly::{Exactly, exactly};
pub use flat_map::{Filter, FlatMap, FlatMapExt, filter, flat_map};
pub use infix::{infix, left_and_right};
pub use label::{LabelExt, WithLabel, with_label};
pub use lazy::{Lazy, lazy};
pub use map::{
    Map, MapExt, map, map_nested1, map_nested2, map_nested3, map_nested4, map_to, start_keeping,
    start_skipping, unpack, unpack2,
};
pub use one_of::{OneOf, Or, OrExt, one_of, or};
pub use parser::{BoxedExt, BoxedParser, FromFn, ParseResult, Parser, from_fn, parse};
pub use repeat::{RepeatWhile, repeat_while};
pub use separated_list::{SepBy, SepBy1, sep_by, sep_by1};
