//! Diesel table definitions for the PostgreSQL schema.
//!
//! Kept in step with the SQL under `backend/migrations`.

diesel::table! {
    /// Registered users. `email` carries a unique constraint.
    users (id) {
        id -> Uuid,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        /// Client-supplied registration date, stored verbatim.
        registration_date -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    teachers (id) {
        id -> Uuid,
        name -> Nullable<Text>,
        age -> Nullable<Int4>,
        active -> Nullable<Bool>,
        date -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    courses (id) {
        id -> Uuid,
        name -> Nullable<Text>,
        language -> Nullable<Text>,
        date -> Nullable<Text>,
        /// Loose reference to `teachers.id`; not a foreign key.
        teacher_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(courses, teachers, users);
