//! The match predicate: every token must appear in at least one field.

use super::fields::project;
use super::tokenizer::{fold_case, Token};
use crate::models::Advocate;
use std::borrow::Borrow;

/// Decide whether an advocate satisfies a tokenized query.
///
/// Empty `tokens` match everything. Otherwise each token must be a
/// case-insensitive, literal substring of at least one projected value.
pub fn matches(advocate: &Advocate, tokens: &[Token]) -> bool {
    if tokens.is_empty() {
        return true;
    }

    let values: Vec<String> = project(advocate).iter().map(|v| fold_case(v)).collect();

    tokens
        .iter()
        .all(|token| values.iter().any(|value| value.contains(token.as_str())))
}

/// Keep the advocates that match `tokens`, preserving their order.
pub fn filter_advocates<'a, I>(
    advocates: I,
    tokens: &'a [Token],
) -> impl Iterator<Item = I::Item> + 'a
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Borrow<Advocate>,
{
    advocates
        .into_iter()
        .filter(move |advocate| matches(<I::Item as Borrow<Advocate>>::borrow(advocate), tokens))
}
