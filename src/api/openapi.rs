//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "REST CRUD API for a book catalog",
        license(name = "MIT")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::NewBook,
            crate::error::ErrorResponse,
            books::MessageResponse,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "books", description = "Book catalog operations"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Router serving the Swagger UI and the raw OpenAPI document
pub fn create_openapi_router() -> Router {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
