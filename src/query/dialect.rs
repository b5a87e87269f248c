//! SQL dialects the query compiler can target.

use std::fmt;

const UPPER_ASCII: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_ASCII: &str = "abcdefghijklmnopqrstuvwxyz";

/// A SQL dialect.
///
/// Each dialect supplies the fragments the compiler stitches together. All
/// of them fold case ASCII-only and test substrings literally, to agree with
/// [`crate::search::fold_case`] and `str::contains`.
///
/// Only SQLite output is executed against a database in tests; Postgres
/// output is checked for its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// SQLite with the built-in JSON functions
    #[default]
    Sqlite,
    /// PostgreSQL with `specialties` stored as `jsonb`
    Postgres,
}

impl Dialect {
    /// Placeholder for the 1-based parameter `index`.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Self::Sqlite => format!("?{}", index),
            Self::Postgres => format!("${}", index),
        }
    }

    /// ASCII case folding of a text expression.
    ///
    /// SQLite's `lower()` only folds ASCII; Postgres' `lower()` follows the
    /// locale, so it uses `translate` instead.
    pub fn fold(&self, expr: &str) -> String {
        match self {
            Self::Sqlite => format!("lower({})", expr),
            Self::Postgres => format!("translate({}, '{}', '{}')", expr, UPPER_ASCII, LOWER_ASCII),
        }
    }

    /// Render a column of any type as text.
    pub fn as_text(&self, column: &str) -> String {
        match self {
            Self::Sqlite => format!("CAST({} AS TEXT)", column),
            Self::Postgres => format!("{}::text", column),
        }
    }

    /// Literal substring test; no wildcard characters.
    pub fn contains(&self, haystack: &str, needle: &str) -> String {
        match self {
            Self::Sqlite => format!("instr({}, {}) > 0", haystack, needle),
            Self::Postgres => format!("strpos({}, {}) > 0", haystack, needle),
        }
    }

    /// True when any element of the JSON array in `column` satisfies the
    /// condition built by `condition` from the element's text expression.
    pub fn any_element(&self, column: &str, condition: impl Fn(&str) -> String) -> String {
        match self {
            Self::Sqlite => format!(
                "(json_type({col}) = 'array' AND EXISTS (SELECT 1 FROM json_each({col}) AS s WHERE {cond}))",
                col = column,
                cond = condition("s.value"),
            ),
            Self::Postgres => format!(
                "(jsonb_typeof({col}) = 'array' AND EXISTS (SELECT 1 FROM jsonb_array_elements_text({col}) AS s(value) WHERE {cond}))",
                col = column,
                cond = condition("s.value"),
            ),
        }
    }

    /// Expression that is always true.
    pub fn always_true(&self) -> &'static str {
        "1 = 1"
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}
