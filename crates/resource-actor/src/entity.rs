//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Dish, Order, …) must
//! implement to be managed by the generic `ResourceActor`. It specifies associated types for
//! IDs, payloads and errors, and provides the lifecycle hooks (`from_create_params`,
//! `on_update`, `on_delete`) in which a resource runs its validation chain.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_delete`]
//!
//! You do **not** need to implement this method unless the resource restricts deletion.
//! The default implementation allows it (`Ok(())`).

use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our resource types (Dish, Order)
/// must satisfy, we can write the `ResourceActor` logic *once* and reuse it everywhere.
///
/// Every hook receives the payload exactly as the caller sent it. The hook is responsible
/// for validating it and must leave `self` untouched when it returns an error.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. Compared with strict equality.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One enum for the whole resource rather than one per operation. Clients deal with a
    /// single `DishError` type and match on its variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from a freshly generated ID and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called when an update request is received for an existing entity.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
