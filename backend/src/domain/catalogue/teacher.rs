//! Teacher entity.

use super::TeacherId;

/// Input payload for [`Teacher::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherDraft {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub active: Option<bool>,
    pub date: Option<String>,
}

/// Partial update for an existing teacher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub active: Option<bool>,
    pub date: Option<String>,
}

impl TeacherPatch {
    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.active.is_none() && self.date.is_none()
    }
}

/// A teacher record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub active: Option<bool>,
    pub date: Option<String>,
}

impl Teacher {
    /// Build a teacher from a draft and a store-assigned identifier.
    pub fn new(id: TeacherId, draft: TeacherDraft) -> Self {
        Self {
            id,
            name: draft.name,
            age: draft.age,
            active: draft.active,
            date: draft.date,
        }
    }

    /// Apply the supplied fields of `patch`.
    pub fn apply(&mut self, patch: TeacherPatch) {
        let TeacherPatch {
            name,
            age,
            active,
            date,
        } = patch;
        if name.is_some() {
            self.name = name;
        }
        if age.is_some() {
            self.age = age;
        }
        if active.is_some() {
            self.active = active;
        }
        if date.is_some() {
            self.date = date;
        }
    }
}
