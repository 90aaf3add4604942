// src/handlers/fallback.rs

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Any path no route matches.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// A known path requested with a verb it does not serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} is not allowed on {}", method, uri.path()))
}
