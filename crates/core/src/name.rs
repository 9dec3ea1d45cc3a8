//! Person name value object, shared by singers, directors, authors, and
//! cart owners.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A person's name: first plus optional last.
///
/// Immutable once built; to change a name, build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    first: String,
    last: String,
}

impl PersonName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self { first: first.into(), last: last.into() }
    }

    /// A name with no last part (e.g. a band name).
    pub fn first_only(first: impl Into<String>) -> Self {
        Self::new(first, "")
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// `"first last"`, trimmed so an empty last part leaves no trailing
    /// whitespace.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last).trim().to_string()
    }
}

impl ValueObject for PersonName {}

impl core::fmt::Display for PersonName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.full_name())
    }
}
