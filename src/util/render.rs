use std::fmt::Display;

/// Joins displayable items with single spaces.
///
/// ## Example
/// ```
/// use polish_notation::{
///     notation::lexer::{strip_positions, tokenize},
///     util::render::space_separated,
/// };
///
/// let tokens = strip_positions(&tokenize("(1.5+x)").unwrap());
/// assert_eq!(space_separated(&tokens), "( 1.5 + x )");
/// assert_eq!(space_separated::<char>(&[]), "");
/// ```
#[must_use]
pub fn space_separated<T: Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
