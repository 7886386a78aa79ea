//! Sort-key resolution for member list queries.
//!
//! The requested `sortBy` name is matched against a static allow-list of
//! the member record's wire field names; anything outside the list falls
//! back to the identifier column. Resolving through an explicit enum (and
//! never through runtime field lookup or string splicing) keeps user input
//! out of the generated SQL entirely.

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Strict parse: exactly `asc` or `desc` (case-sensitive); any other
    /// value, including absent, normalizes to ascending.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Allow-listed sortable member columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberSortKey {
    #[default]
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    City,
    Status,
    JoinDate,
    CreatedAt,
}

impl MemberSortKey {
    /// Resolve a requested sort key. Absent, empty, or unrecognized names
    /// fall back to [`MemberSortKey::Id`].
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("id") => Self::Id,
            Some("firstName") => Self::FirstName,
            Some("lastName") => Self::LastName,
            Some("email") => Self::Email,
            Some("phone") => Self::Phone,
            Some("age") => Self::Age,
            Some("city") => Self::City,
            Some("status") => Self::Status,
            Some("joinDate") => Self::JoinDate,
            Some("createdAt") => Self::CreatedAt,
            _ => Self::Id,
        }
    }
}
