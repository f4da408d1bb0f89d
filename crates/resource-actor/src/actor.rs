//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that owns a resource
//! collection. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the repository.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::repository::{InMemoryRepository, Repository};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// How many times a colliding generated id is redrawn before the create is refused.
const MAX_ID_ATTEMPTS: usize = 8;

/// Produces a fresh identifier for every create.
pub type IdGenerator<Id> = Box<dyn FnMut() -> Id + Send>;

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a loop, so a request's
/// lookup, validation and mutation all happen before the next request is looked at. No
/// `Mutex` or `RwLock` is needed around the `store`: the task is its single writer.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug, thiserror::Error)] #[error("Tag error")] struct TagError;
///
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = String;
///     type Update = String;
///     type Error = TagError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, label: String) -> Result<Self, Self::Error> {
///         Ok(Self { id, label })
///     }
///     fn on_update(&mut self, label: String) -> Result<(), Self::Error> {
///         self.label = label;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Tag>::new(10, move || { next += 1; next });
///     tokio::spawn(actor.run());
///
///     let tag = client.create("spicy".to_string()).await.unwrap();
///     assert_eq!(tag.id, 1);
/// }
/// ```
///
/// ## Operations
///
/// * **List**: Returns a snapshot of the whole collection, in insertion order.
/// * **Create**:
///     1. Draws an unused ID from the generator.
///     2. Calls `T::from_create_params`, which validates the payload.
///     3. Inserts the new entity and returns it.
/// * **Get**: Returns a clone of the entity if found, or `None`.
/// * **Update**:
///     1. Resolves the ID (`NotFound` otherwise).
///     2. Calls the `on_update` hook; the entity validates and modifies itself.
///     3. Returns the updated entity state.
/// * **Delete**:
///     1. Resolves the ID (`NotFound` otherwise).
///     2. Calls the `on_delete` hook, which may veto the removal.
///     3. Removes the entity from the `store`.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Box<dyn Repository<T>>,
    next_id: IdGenerator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` over an empty [`InMemoryRepository`] and its client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id` - Identifier generator invoked once per create.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::with_repository(buffer_size, InMemoryRepository::new(), next_id)
    }

    /// Creates a new `ResourceActor` over the given repository, e.g. one seeded with data.
    pub fn with_repository(
        buffer_size: usize,
        repository: impl Repository<T> + 'static,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Box::new(repository),
            next_id: Box::new(next_id),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Draws ids until one is not already stored.
    fn fresh_id(&mut self) -> Result<T::Id, FrameworkError> {
        let mut last = None;
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = (self.next_id)();
            if self.store.find_by_id(&id).is_none() {
                return Ok(id);
            }
            last = Some(id);
        }
        Err(FrameworkError::DuplicateId(
            last.map(|id| id.to_string()).unwrap_or_default(),
        ))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Dish" instead of "grubdash::model::dish::Dish")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let items = self.store.find_all();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match self.fresh_id() {
                        Ok(id) => id,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.find_by_id(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.find_by_id_mut(&id) {
                        if let Err(e) = item.on_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.find_by_id(&id) {
                        if let Err(e) = item.on_delete() {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove_by_id(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
