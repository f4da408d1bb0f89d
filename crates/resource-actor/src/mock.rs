//! # Mock Framework & Testing Guide
//!
//! Testing a resource-specific client (e.g. `DishClient`) does not require a running
//! `ResourceActor`. [`create_mock_client`] returns a real [`ResourceClient`] whose channel
//! ends in a receiver owned by the test. The `expect_*` helpers pull the next request off
//! that receiver, hand back its payload, and give the test the responder so it can answer
//! with any result, including errors that are hard to provoke with a real actor.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock receiver | Real Actor |
//! |---------|---------------|------------|
//! | **State** | None, the test answers | Real repository |
//! | **Use Case** | Logic *around* the client: error mapping, requests that must never be sent | Validation chains and state transitions |
//! | **Error Injection** | Easy (`respond_to.send(Err(..))`) | Requires specific state |
//!
//! ```rust
//! use resource_actor::mock::{create_mock_client, expect_get};
//! use resource_actor::ActorEntity;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Tag { id: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("Tag error")] struct TagError;
//!
//! impl ActorEntity for Tag {
//!     type Id = u32; type Create = (); type Update = (); type Error = TagError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: ()) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     fn on_update(&mut self, _: ()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Tag>(10);
//!     let task = tokio::spawn(async move { client.get(7).await });
//!
//!     let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
//!     assert_eq!(id, 7);
//!     responder.send(Ok(Some(Tag { id: 7 }))).unwrap();
//!
//!     assert_eq!(task.await.unwrap().unwrap(), Some(Tag { id: 7 }));
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::message::{ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client is a regular [`ResourceClient`]; only the far end of its channel differs.
/// Dropping the receiver makes every later request fail with `ActorClosed`.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
