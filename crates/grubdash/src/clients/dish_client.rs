//! # Dish Client
//!
//! Provides a high‑level API for interacting with the `Dish` actor.
//! It wraps a `ResourceClient<Dish>` and exposes domain‑specific methods.
use crate::dish_actor::DishError;
use crate::model::{Dish, DishId, DishPayload};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument, warn};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => DishError::NotFound(DishId(id)),
            e => e
                .into_entity_error::<DishError>()
                .unwrap_or_else(|e| DishError::ActorCommunicationError(e.to_string())),
        }
    }

    /// Dishes are never deleted; the request is refused without reaching the actor.
    async fn delete(&self, id: DishId) -> Result<(), DishError> {
        warn!(%id, "Refusing to delete dish");
        Err(DishError::MethodNotAllowed)
    }
}

impl DishClient {
    #[instrument(skip(self))]
    pub async fn list_dishes(&self) -> Result<Vec<Dish>, DishError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn create_dish(&self, payload: DishPayload) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    /// Fetches a dish, turning a miss into [`DishError::NotFound`].
    #[instrument(skip(self))]
    pub async fn read_dish(&self, id: DishId) -> Result<Dish, DishError> {
        self.get(id.clone()).await?.ok_or(DishError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn update_dish(&self, id: DishId, payload: DishPayload) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.update(id, payload).await.map_err(Self::map_error)
    }

    /// Always fails with [`DishError::MethodNotAllowed`], whether or not the dish exists.
    #[instrument(skip(self))]
    pub async fn delete_dish(&self, id: DishId) -> Result<(), DishError> {
        self.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_get, expect_update};
    use serde_json::json;

    fn dish(id: &str) -> Dish {
        Dish {
            id: DishId::from(id),
            name: "Pho".to_string(),
            description: "Beef noodle soup".to_string(),
            price: serde_json::Number::from(12u32),
            image_url: "pho.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_read_missing_dish_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Dish>(10);
        let dish_client = DishClient::new(client);

        let read_task =
            tokio::spawn(async move { dish_client.read_dish(DishId::from("nope")).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, DishId::from("nope"));
        responder.send(Ok(None)).unwrap();

        let err = read_task.await.unwrap().unwrap_err();
        assert_eq!(err.to_string(), "Dish does not exist: nope");
    }

    #[tokio::test]
    async fn test_read_existing_dish() {
        let (client, mut receiver) = create_mock_client::<Dish>(10);
        let dish_client = DishClient::new(client);

        let read_task = tokio::spawn(async move { dish_client.read_dish(DishId::from("d1")).await });

        let (_, responder) = expect_get(&mut receiver).await.unwrap();
        responder.send(Ok(Some(dish("d1")))).unwrap();

        assert_eq!(read_task.await.unwrap().unwrap(), dish("d1"));
    }

    #[tokio::test]
    async fn test_update_recovers_typed_errors() {
        let (client, mut receiver) = create_mock_client::<Dish>(10);
        let dish_client = DishClient::new(client);

        let payload: DishPayload = serde_json::from_value(json!({ "name": "Pho" })).unwrap();
        let update_task = tokio::spawn({
            let dish_client = dish_client.clone();
            async move { dish_client.update_dish(DishId::from("d1"), payload).await }
        });

        let (id, update, responder) = expect_update(&mut receiver).await.unwrap();
        assert_eq!(id, DishId::from("d1"));
        assert_eq!(update.name, Some(json!("Pho")));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                DishError::Validation("A 'description' property is required.".into()),
            ))))
            .unwrap();

        assert_eq!(
            update_task.await.unwrap().unwrap_err(),
            DishError::Validation("A 'description' property is required.".into())
        );

        // Unknown ids come back from the actor as a framework-level NotFound.
        let update_task = tokio::spawn(async move {
            dish_client
                .update_dish(DishId::from("zz"), DishPayload::default())
                .await
        });
        let (id, _, responder) = expect_update(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();
        assert_eq!(
            update_task.await.unwrap().unwrap_err(),
            DishError::NotFound(DishId::from("zz"))
        );
    }

    #[tokio::test]
    async fn test_delete_is_refused_without_a_request() {
        let (client, mut receiver) = create_mock_client::<Dish>(10);
        let dish_client = DishClient::new(client);

        let err = dish_client.delete_dish(DishId::from("d1")).await.unwrap_err();
        assert_eq!(err, DishError::MethodNotAllowed);
        assert_eq!(err.to_string(), "A dish cannot be deleted.");

        // Nothing was sent to the actor.
        drop(dish_client);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Dish>(10);
        drop(receiver);
        let dish_client = DishClient::new(client);

        let err = dish_client.list_dishes().await.unwrap_err();
        assert_eq!(err, DishError::ActorCommunicationError("Actor closed".into()));
    }
}
