use super::{data, error, payload, AppState};
use crate::model::{Order, OrderId, OrderPayload};
use crate::order_actor::OrderError;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match &self {
            OrderError::Validation(_) | OrderError::IllegalTransition(_) => {
                StatusCode::BAD_REQUEST
            }
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::ActorCommunicationError(err) => {
                tracing::error!(%err, "order actor unavailable");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error(status, self.to_string())
    }
}

pub async fn list_handler(State(state): State<AppState>) -> Response {
    match state.orders.list_orders().await {
        Ok(orders) => (StatusCode::OK, data(orders)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = match payload::<OrderPayload>(&body) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    match state.orders.create_order(payload).await {
        Ok(order) => (StatusCode::CREATED, data(order)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn read_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Response {
    order_response(state.orders.read_order(OrderId(order_id)).await)
}

pub async fn update_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Bytes,
) -> Response {
    let payload = match payload::<OrderPayload>(&body) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    order_response(state.orders.update_order(OrderId(order_id), payload).await)
}

pub async fn delete_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Response {
    delete_response(state.orders.delete_order(OrderId(order_id)).await)
}

fn order_response(result: Result<Order, OrderError>) -> Response {
    match result {
        Ok(order) => (StatusCode::OK, data(order)).into_response(),
        Err(err) => err.into_response(),
    }
}

/// A successful delete answers 204 with no body.
fn delete_response(result: Result<(), OrderError>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response_body;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn delete_response_ok_has_no_body() {
        let response = delete_response(Ok(()));
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response_body(response).await.is_empty());
    }

    #[tokio::test]
    async fn illegal_transitions_are_bad_requests() {
        let response = delete_response(Err(OrderError::IllegalTransition(
            "An order cannot be deleted unless it is pending".into(),
        )));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(
            body,
            json!({ "status": 400, "message": "An order cannot be deleted unless it is pending" })
        );
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let response = order_response(Err(OrderError::NotFound(OrderId::from("o9"))));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&response_body(response).await).unwrap();
        assert_eq!(body["message"], "Order does not exist: o9");
    }
}
