//! Compile a tokenized query into a SQL `WHERE` expression.
//!
//! The compiled filter is a conjunction over tokens of a disjunction over
//! [`SearchField::ALL`]: the same rule as [`crate::search::matches`], run by
//! the store instead of in memory.

use super::dialect::Dialect;
use crate::search::{SearchField, Token};

/// A `WHERE` expression plus its positional parameters.
///
/// Tokens are always bound, never spliced into the SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFilter {
    /// SQL boolean expression over the advocates table's columns
    pub sql: String,

    /// Parameter values; `params[n]` binds placeholder `n + 1`
    pub params: Vec<String>,
}

impl CompiledFilter {
    /// Whether the filter accepts every row.
    pub fn is_unconstrained(&self) -> bool {
        self.params.is_empty()
    }
}

/// Column holding a search field in the advocates table.
pub fn column_for(field: SearchField) -> &'static str {
    match field {
        SearchField::FirstName => "first_name",
        SearchField::LastName => "last_name",
        SearchField::City => "city",
        SearchField::Degree => "degree",
        SearchField::YearsOfExperience => "years_of_experience",
        SearchField::PhoneNumber => "phone_number",
        SearchField::Specialties => "specialties",
    }
}

/// Translates token lists into store filters for one dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryCompiler {
    dialect: Dialect,
}

impl QueryCompiler {
    /// Create a compiler for `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// The dialect this compiler emits.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Compile `tokens` into a filter.
    ///
    /// An empty token list compiles to an always-true expression. Each token
    /// gets one parameter, reused by every field clause for that token.
    pub fn compile(&self, tokens: &[Token]) -> CompiledFilter {
        if tokens.is_empty() {
            return CompiledFilter {
                sql: self.dialect.always_true().to_string(),
                params: Vec::new(),
            };
        }

        let clauses: Vec<String> = tokens
            .iter()
            .enumerate()
            .map(|(i, _)| self.token_clause(&self.dialect.placeholder(i + 1)))
            .collect();

        CompiledFilter {
            sql: clauses.join(" AND "),
            params: tokens.iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    /// `(field_1 contains p OR ... OR field_n contains p)` for one token.
    fn token_clause(&self, param: &str) -> String {
        let fields: Vec<String> = SearchField::ALL
            .iter()
            .map(|field| self.field_clause(*field, param))
            .collect();
        format!("({})", fields.join(" OR "))
    }

    fn field_clause(&self, field: SearchField, param: &str) -> String {
        let d = self.dialect;
        let column = column_for(field);

        if field.is_list() {
            return d.any_element(column, |element| d.contains(&d.fold(element), param));
        }

        let text = if field.is_scalar() {
            d.as_text(column)
        } else {
            column.to_string()
        };
        let haystack = d.fold(&format!("coalesce({}, '')", text));
        d.contains(&haystack, param)
    }
}
