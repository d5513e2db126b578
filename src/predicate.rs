//! Character predicates for [`consume_if`](crate::consume_if),
//! [`consume_while`](crate::consume_while) and
//! [`consume_some`](crate::consume_some)

/// Boxed predicate, used to combine predicates of different types
pub type BoxedPredicate = Box<dyn Fn(char) -> bool + Send + Sync>;

/// Returns true if the character is in a-z or A-Z
pub fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true if the character is in 0-9
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for space and tab only; newlines are not whitespace here
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_not_whitespace(c: char) -> bool {
    !is_whitespace(c)
}

/// Predicate accepting any of the allowed characters
pub fn is_any_of(allowed: &[char]) -> impl Fn(char) -> bool + Send + Sync + use<> {
    let allowed = allowed.to_vec();
    move |c| allowed.contains(&c)
}

/// Predicate rejecting all of the forbidden characters
pub fn is_none_of(forbidden: &[char]) -> impl Fn(char) -> bool + Send + Sync + use<> {
    let forbidden = forbidden.to_vec();
    move |c| !forbidden.contains(&c)
}

/// Predicate that holds if any of the given predicates holds, tested in order
pub fn match_any(predicates: Vec<BoxedPredicate>) -> impl Fn(char) -> bool + Send + Sync {
    move |c| predicates.iter().any(|predicate| predicate(c))
}
