//! Advocate model representing one entry in the directory.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A number-like or string-like value.
///
/// Years of experience and phone numbers arrive as integers from some sources
/// and as text from others. Either way they are searched through their
/// textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Integer value, rendered in decimal
    Integer(i64),
    /// Text value, rendered as-is
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// Stored without conversion so the column keeps the value's own type.
impl ToSql for Scalar {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Integer(n) => Ok(ToSqlOutput::from(*n)),
            Self::Text(s) => Ok(ToSqlOutput::from(s.as_str())),
        }
    }
}

impl FromSql for Scalar {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(n) => Ok(Self::Integer(n)),
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .map(|s| Self::Text(s.to_string()))
                .map_err(|e| FromSqlError::Other(Box::new(e))),
            // Reals render differently in SQLite and Rust ("5.0" vs "5").
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

/// An advocate in the directory.
///
/// Every field is optional on the wire; absent values search as the empty
/// string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Advocate {
    /// Store-assigned identifier (0 until persisted)
    pub id: i64,

    /// First name
    pub first_name: Option<String>,

    /// Last name
    pub last_name: Option<String>,

    /// City of practice
    pub city: Option<String>,

    /// Degree or credential (e.g. "MD", "PhD", "MSW")
    pub degree: Option<String>,

    /// Areas of practice, in display order
    #[serde(deserialize_with = "null_as_empty")]
    pub specialties: Vec<String>,

    /// Years of experience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<Scalar>,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Scalar>,

    /// When the record was stored (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Advocate {
    /// Create an advocate with name, city and degree set.
    pub fn new(first_name: &str, last_name: &str, city: &str, degree: &str) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            city: Some(city.to_string()),
            degree: Some(degree.to_string()),
            ..Default::default()
        }
    }

    /// Builder-style setter for specialties.
    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for years of experience.
    pub fn with_years_of_experience(mut self, years: impl Into<Scalar>) -> Self {
        self.years_of_experience = Some(years.into());
        self
    }

    /// Builder-style setter for the phone number.
    pub fn with_phone_number(mut self, phone: impl Into<Scalar>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    /// Full display name, `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }
}
