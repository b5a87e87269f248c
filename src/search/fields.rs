//! The searchable fields of an advocate and their string projection.
//!
//! [`SearchField::ALL`] is the single list of searchable fields. The
//! in-memory predicate projects through it and the query compiler emits one
//! clause per entry, so the two cannot drift apart.

use crate::models::Advocate;
use std::borrow::Cow;

/// A field that participates in search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// City
    City,
    /// Degree / credential
    Degree,
    /// Years of experience, as text
    YearsOfExperience,
    /// Phone number, as text
    PhoneNumber,
    /// Each specialty, matched element-wise
    Specialties,
}

impl SearchField {
    /// Every searchable field, in projection order.
    pub const ALL: [SearchField; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::City,
        Self::Degree,
        Self::YearsOfExperience,
        Self::PhoneNumber,
        Self::Specialties,
    ];

    /// Whether the field holds a list that is matched per element.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::Specialties)
    }

    /// Whether the field holds a number-like value that is matched as text.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::YearsOfExperience | Self::PhoneNumber)
    }

    /// Get display name for the field.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::City => "city",
            Self::Degree => "degree",
            Self::YearsOfExperience => "years of experience",
            Self::PhoneNumber => "phone number",
            Self::Specialties => "specialties",
        }
    }

    /// Append this field's projected values for `advocate` to `out`.
    fn project_into<'a>(&self, advocate: &'a Advocate, out: &mut Vec<Cow<'a, str>>) {
        let text = |v: &'a Option<String>| Cow::Borrowed(v.as_deref().unwrap_or(""));
        match self {
            Self::FirstName => out.push(text(&advocate.first_name)),
            Self::LastName => out.push(text(&advocate.last_name)),
            Self::City => out.push(text(&advocate.city)),
            Self::Degree => out.push(text(&advocate.degree)),
            Self::YearsOfExperience => out.push(scalar_text(&advocate.years_of_experience)),
            Self::PhoneNumber => out.push(scalar_text(&advocate.phone_number)),
            Self::Specialties => out.extend(
                advocate
                    .specialties
                    .iter()
                    .map(|s| Cow::Borrowed(s.as_str())),
            ),
        }
    }
}

fn scalar_text(value: &Option<crate::models::Scalar>) -> Cow<'_, str> {
    match value {
        Some(v) => Cow::Owned(v.to_string()),
        None => Cow::Borrowed(""),
    }
}

/// Project an advocate to the ordered list of strings that search looks at.
///
/// First name, last name, city, degree, years of experience, phone number,
/// then every specialty in order. Missing values project to `""`.
pub fn project(advocate: &Advocate) -> Vec<Cow<'_, str>> {
    let mut out = Vec::with_capacity(SearchField::ALL.len() + advocate.specialties.len());
    for field in SearchField::ALL {
        field.project_into(advocate, &mut out);
    }
    out
}
