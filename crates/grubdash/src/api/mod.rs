//! # HTTP API
//!
//! axum routes over the dish and order clients. Request bodies use the `{ "data": ... }`
//! envelope, as do successful responses; failures answer `{ "status", "message" }` with
//! the same status code.

use crate::clients::{DishClient, OrderClient};
use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tower_http::trace::TraceLayer;

mod dishes;
mod orders;

/// Application state shared across all handlers. Cloning it clones the clients.
#[derive(Clone)]
pub struct AppState {
    pub dishes: DishClient,
    pub orders: OrderClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dishes", get(dishes::list_handler).post(dishes::create_handler))
        .route(
            "/dishes/{dishId}",
            get(dishes::read_handler)
                .put(dishes::update_handler)
                .delete(dishes::delete_handler),
        )
        .route("/orders", get(orders::list_handler).post(orders::create_handler))
        .route(
            "/orders/{orderId}",
            get(orders::read_handler)
                .put(orders::update_handler)
                .delete(orders::delete_handler),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Successful response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

pub fn data<T: Serialize>(data: T) -> Json<Data<T>> {
    Json(Data { data })
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct Error {
    pub status: u16,
    pub message: String,
}

pub fn error(status: StatusCode, message: impl AsRef<str>) -> Response {
    let body = Error {
        status: status.as_u16(),
        message: message.as_ref().to_owned(),
    };
    (status, Json(body)).into_response()
}

#[derive(Deserialize)]
struct Envelope {
    data: Option<Value>,
}

fn malformed_body() -> Response {
    error(
        StatusCode::BAD_REQUEST,
        "Request body must be a JSON object with a 'data' object",
    )
}

/// Extracts the `data` object of a request body.
///
/// An empty body, a missing `data` or `data: null` all yield the default payload, so the
/// validation chain reports which property is missing.
fn payload<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let envelope: Envelope = serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(%err, "unreadable request body");
        malformed_body()
    })?;
    match envelope.data {
        None | Some(Value::Null) => Ok(T::default()),
        Some(data @ Value::Object(_)) => serde_json::from_value(data).map_err(|err| {
            tracing::debug!(%err, "unreadable data object");
            malformed_body()
        }),
        Some(_) => Err(malformed_body()),
    }
}

async fn not_found(uri: Uri) -> Response {
    error(StatusCode::NOT_FOUND, format!("Path not found: {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    error(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("{method} not allowed for {}", uri.path()),
    )
}

#[cfg(test)]
pub async fn response_body(response: Response) -> Vec<u8> {
    use http_body_util::BodyExt;

    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
