//! Book endpoints.
//!
//! Axum maps malformed JSON bodies to 422 by default, so the handlers take
//! the extractor `Result` and remap every body/path rejection to a 400.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::{Book, NewBook},
    AppState,
};

/// Acknowledgement body for delete operations
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let Json(book) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let created = state.store.create(&book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, ordered by id", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.store.list().await?;
    Ok(Json(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Book>> {
    let Path(id) = id.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let book = state.store.get(id).await?;
    Ok(Json(book))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = NewBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Non-integer id or malformed body", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let Path(id) = id.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let Json(book) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let updated = state.store.update(id, &book).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    state.store.delete(id).await?;
    Ok(Json(MessageResponse {
        status: "OK".to_string(),
        message: format!("Book with ID {} deleted", id),
    }))
}
