//! Diesel table definition for the `books` table.
//!
//! Must match the migration DDL exactly; Diesel uses it for type-safe query
//! generation in the ORM backend.

diesel::table! {
    books (id) {
        id -> Int4,
        title -> Text,
        author -> Text,
        description -> Text,
    }
}
