//! Course entity.

use super::{CourseId, TeacherId};

/// Input payload for [`Course::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: Option<String>,
    pub language: Option<String>,
    pub date: Option<String>,
    pub teacher_id: Option<TeacherId>,
}

/// Partial update for an existing course.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub language: Option<String>,
    pub date: Option<String>,
    pub teacher_id: Option<TeacherId>,
}

impl CoursePatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.language.is_none()
            && self.date.is_none()
            && self.teacher_id.is_none()
    }
}

/// A course, optionally taught by a teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: Option<String>,
    pub language: Option<String>,
    pub date: Option<String>,
    pub teacher_id: Option<TeacherId>,
}

impl Course {
    /// Build a course from a draft and a store-assigned identifier.
    pub fn new(id: CourseId, draft: CourseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            language: draft.language,
            date: draft.date,
            teacher_id: draft.teacher_id,
        }
    }

    /// Apply the supplied fields of `patch`.
    pub fn apply(&mut self, patch: CoursePatch) {
        let CoursePatch {
            name,
            language,
            date,
            teacher_id,
        } = patch;
        if name.is_some() {
            self.name = name;
        }
        if language.is_some() {
            self.language = language;
        }
        if date.is_some() {
            self.date = date;
        }
        if teacher_id.is_some() {
            self.teacher_id = teacher_id;
        }
    }
}
