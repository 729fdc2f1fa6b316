use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderValue},
    middleware::Next,
    response::Response,
};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Stamp every response, empty bodies included, as UTF-8 JSON.
pub async fn json_content_type(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    response
}
