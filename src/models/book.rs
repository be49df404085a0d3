//! Book model

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Stored book record
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Store-assigned identifier, rendered as text
    #[serde_as(as = "DisplayFromStr")]
    #[schema(value_type = String, example = "1")]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    /// Free-form availability marker (e.g. "available", "checked_out")
    pub status: String,
}

/// Create / update book request.
///
/// Every field is required. Unknown keys, including a caller-supplied `id`,
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct BookInput {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    #[serde(alias = "ISBN")]
    pub isbn: String,
    pub status: String,
}

impl Book {
    /// Build the record the store holds for `id` after writing `input`
    pub fn from_input(id: i32, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            isbn: input.isbn,
            status: input.status,
        }
    }
}
