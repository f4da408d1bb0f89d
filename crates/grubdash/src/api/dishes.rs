use super::{data, error, payload, AppState};
use crate::dish_actor::DishError;
use crate::model::{Dish, DishId, DishPayload};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for DishError {
    fn into_response(self) -> Response {
        let status = match &self {
            DishError::Validation(_) => StatusCode::BAD_REQUEST,
            DishError::NotFound(_) => StatusCode::NOT_FOUND,
            DishError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            DishError::ActorCommunicationError(err) => {
                tracing::error!(%err, "dish actor unavailable");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error(status, self.to_string())
    }
}

pub async fn list_handler(State(state): State<AppState>) -> Response {
    list_response(state.dishes.list_dishes().await)
}

pub async fn create_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = match payload::<DishPayload>(&body) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    create_response(state.dishes.create_dish(payload).await)
}

pub async fn read_handler(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Response {
    dish_response(state.dishes.read_dish(DishId(dish_id)).await)
}

pub async fn update_handler(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    body: Bytes,
) -> Response {
    let payload = match payload::<DishPayload>(&body) {
        Ok(payload) => payload,
        Err(response) => return response,
    };
    dish_response(state.dishes.update_dish(DishId(dish_id), payload).await)
}

pub async fn delete_handler(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Response {
    match state.dishes.delete_dish(DishId(dish_id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

fn list_response(result: Result<Vec<Dish>, DishError>) -> Response {
    match result {
        Ok(dishes) => (StatusCode::OK, data(dishes)).into_response(),
        Err(err) => err.into_response(),
    }
}

fn create_response(result: Result<Dish, DishError>) -> Response {
    match result {
        Ok(dish) => (StatusCode::CREATED, data(dish)).into_response(),
        Err(err) => err.into_response(),
    }
}

fn dish_response(result: Result<Dish, DishError>) -> Response {
    match result {
        Ok(dish) => (StatusCode::OK, data(dish)).into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::response_body;
    use serde_json::{json, Value};

    async fn json_body(response: Response) -> Value {
        serde_json::from_slice(&response_body(response).await).unwrap()
    }

    #[tokio::test]
    async fn create_response_ok() {
        let dish = Dish {
            id: DishId::from("d1"),
            name: "Pho".into(),
            description: "Soup".into(),
            price: 12u32.into(),
            image_url: "pho.jpg".into(),
        };
        let response = create_response(Ok(dish));
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            json_body(response).await,
            json!({ "data": {
                "id": "d1",
                "name": "Pho",
                "description": "Soup",
                "price": 12,
                "image_url": "pho.jpg"
            }})
        );
    }

    #[tokio::test]
    async fn errors_map_to_status_codes() {
        let cases = [
            (DishError::Validation("A 'name' property is required.".into()), 400),
            (DishError::NotFound(DishId::from("x")), 404),
            (DishError::MethodNotAllowed, 405),
            (DishError::ActorCommunicationError("Actor closed".into()), 500),
        ];
        for (err, status) in cases {
            let message = err.to_string();
            let response = dish_response(Err(err));
            assert_eq!(response.status().as_u16(), status);
            assert_eq!(
                json_body(response).await,
                json!({ "status": status, "message": message })
            );
        }
    }

    #[tokio::test]
    async fn list_response_wraps_in_data() {
        let response = list_response(Ok(Vec::new()));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "data": [] }));
    }
}
