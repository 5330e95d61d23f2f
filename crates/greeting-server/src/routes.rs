use axum::{
    Router,
    extract::{Path, rejection::PathRejection},
    response::Html,
    routing::get,
};
use greeting_core::{Hello, greet, render};

use crate::error::ApiError;

const DEFAULT_NAME: &str = "World";

pub fn build_router() -> Router {
    Router::new()
        .route("/api/hello", get(hello))
        .route("/api/hello/:name", get(hello_name))
        .route("/hello/:name", get(hello_page))
}

async fn hello() -> String {
    greet(DEFAULT_NAME)
}

async fn hello_name(name: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(name) = name?;
    tracing::debug!(%name, "greeting");
    Ok(greet(&name))
}

async fn hello_page(
    name: Result<Path<String>, PathRejection>,
) -> Result<Html<String>, ApiError> {
    let Path(name) = name?;
    Ok(Html(render(&Hello::new(name)).to_html()))
}
