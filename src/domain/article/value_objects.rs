// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::timestamps::TimestampedField;
use std::{fmt, str::FromStr};

pub const TITLE_MAX_CHARS: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    /// Positive database id.
    ///
    /// # Errors
    ///
    /// Returns a validation error for zero or negative ids.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("article id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// Non-blank title of at most [`TITLE_MAX_CHARS`] characters.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank or overlong titles.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if value.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "title cannot exceed {TITLE_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free text. Empty is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDescription(String);

impl ArticleDescription {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArticleOrder(i32);

impl ArticleOrder {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

/// Columns that a save may name. `created_date` is not editable and has no
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArticleField {
    Title,
    Description,
    Order,
    UpdatedDate,
}

impl ArticleField {
    pub const ALL: [Self; 4] = [Self::Title, Self::Description, Self::Order, Self::UpdatedDate];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Order => "order",
            Self::UpdatedDate => "updated_date",
        }
    }

    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Order => "sort_order",
            other => other.name(),
        }
    }

    /// Parse a caller-supplied field name. Only fields a client may set
    /// directly are accepted; the dates are managed by the save path.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown names and for the date fields.
    pub fn editable(name: &str) -> DomainResult<Self> {
        match name.parse::<Self>()? {
            Self::UpdatedDate => Err(DomainError::validation("updated_date is not editable")),
            field => Ok(field),
        }
    }
}

impl TimestampedField for ArticleField {
    const UPDATED_DATE: Self = Self::UpdatedDate;
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArticleField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| {
                if s == "created_date" {
                    DomainError::validation("created_date is not editable")
                } else {
                    DomainError::validation(format!("unknown article field: {s}"))
                }
            })
    }
}
