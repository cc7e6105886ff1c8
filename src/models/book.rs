//! Book entity and request payload.
//!
//! The wire format uses `desc` for the description field; the id is assigned
//! by the store and never taken from a request body.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A catalog record, one row in the `books` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Primary key, assigned by the database
    pub id: i32,
    pub title: String,
    pub author: String,
    #[serde(rename = "desc")]
    pub description: String,
}

/// Payload for creating or overwriting a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(rename = "desc")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_description_as_desc() {
        let book = Book {
            id: 1,
            title: "The Pragmatic Programmer".to_string(),
            author: "Hunt & Thomas".to_string(),
            description: "Journeyman to master".to_string(),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["desc"], "Journeyman to master");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn new_book_deserializes_from_desc() {
        let payload: NewBook =
            serde_json::from_str(r#"{"title":"t","author":"a","desc":"d"}"#).unwrap();

        assert_eq!(payload.description, "d");
    }
}
