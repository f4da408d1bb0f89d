//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`; the status rules themselves live in the
//! Order entity's hooks.
use crate::model::{Order, OrderId, OrderPayload};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, payload: OrderPayload) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn read_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id.clone()).await?.ok_or(OrderError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn update_order(
        &self,
        id: OrderId,
        payload: OrderPayload,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, payload).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(OrderId(id)),
            e => e
                .into_entity_error::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderDish, OrderStatus};
    use resource_actor::mock::{create_mock_client, expect_create, expect_delete, expect_list};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_returns_actor_collection() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let order = Order {
            id: OrderId::from("o1"),
            deliver_to: "Rainbow Road".into(),
            mobile_number: "555-0199".into(),
            status: OrderStatus::Preparing,
            dishes: vec![OrderDish {
                dish_id: Some("d1".into()),
                quantity: 2,
            }],
        };
        let list_task = tokio::spawn(async move { order_client.list_orders().await });

        let responder = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        responder.send(Ok(vec![order.clone()])).unwrap();

        assert_eq!(list_task.await.unwrap().unwrap(), vec![order]);
    }

    #[tokio::test]
    async fn test_create_forwards_payload_untouched() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let payload: OrderPayload = serde_json::from_value(json!({
            "deliverTo": "Rainbow Road",
            "mobileNumber": "555-0199",
            "status": "delivered",
            "dishes": []
        }))
        .unwrap();
        let create_task = tokio::spawn(async move { order_client.create_order(payload).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.dishes, Some(json!([])));
        assert_eq!(params.status, Some(json!("delivered")));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                OrderError::Validation("Order must include at least one dish".into()),
            ))))
            .unwrap();

        let err = create_task.await.unwrap().unwrap_err();
        assert_eq!(err.to_string(), "Order must include at least one dish");
    }

    #[tokio::test]
    async fn test_delete_maps_errors() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn({
            let order_client = order_client.clone();
            async move { order_client.delete_order(OrderId::from("o1")).await }
        });
        let (id, responder) = expect_delete(&mut receiver).await.unwrap();
        assert_eq!(id, OrderId::from("o1"));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                OrderError::IllegalTransition(
                    "An order cannot be deleted unless it is pending".into(),
                ),
            ))))
            .unwrap();
        assert!(matches!(
            task.await.unwrap(),
            Err(OrderError::IllegalTransition(_))
        ));

        let task = tokio::spawn(async move { order_client.delete_order(OrderId::from("o2")).await });
        let (id, responder) = expect_delete(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();
        assert_eq!(
            task.await.unwrap().unwrap_err().to_string(),
            "Order does not exist: o2"
        );
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.list_orders().await });
        drop(receiver.recv().await);

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            OrderError::ActorCommunicationError("Actor dropped response channel".into())
        );
    }
}
