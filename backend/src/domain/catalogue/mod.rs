//! Catalogue domain types: courses and the teachers who run them.
//!
//! Every descriptive field is optional, matching what clients may omit on
//! creation. Identifiers are UUIDs assigned by the store.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

mod course;
mod teacher;


pub use course::{Course, CourseDraft, CoursePatch};
pub use teacher::{Teacher, TeacherDraft, TeacherPatch};

/// Validation errors returned by catalogue identifier parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueValidationError {
    #[error("invalid course id: {raw}")]
    InvalidCourseId { raw: String },
    #[error("invalid teacher id: {raw}")]
    InvalidTeacherId { raw: String },
}

/// Stable course identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(Uuid);

impl CourseId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for CourseId {
    type Err = CatalogueValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| CatalogueValidationError::InvalidCourseId {
                raw: raw.to_owned(),
            })
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable teacher identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeacherId(Uuid);

impl TeacherId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for TeacherId {
    type Err = CatalogueValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| CatalogueValidationError::InvalidTeacherId {
                raw: raw.to_owned(),
            })
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
