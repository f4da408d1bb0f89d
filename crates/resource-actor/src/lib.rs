//! # Resource Actor
//!
//! This crate provides the building blocks for serving resource collections (dishes,
//! orders, …) through type-safe actors. It implements a **Resource-Oriented Architecture
//! (ROA)** pattern on top of the **Actor Model**: every collection is owned by one actor task
//! and exposed through a uniform list / create / read / update / delete API.
//!
//! ## Why ROA + Actor Model?
//!
//! - **Uniform API**: the same operations for every resource type
//! - **Single writer**: a collection is only ever touched by its actor, one message at a
//!   time, so a request's lookup, validation and mutation cannot interleave with another's
//! - **Swappable storage**: the actor talks to a [`Repository`], not to a concrete container
//!
//! ## Core Components
//!
//! - **[`ActorEntity`]**: The contract a resource implements. Its hooks run the resource's
//!   validation chain.
//! - **[`ResourceActor`]**: The generic actor owning a [`Repository`] and an id generator.
//! - **[`ResourceClient`]**: The cloneable async handle used to talk to an actor.
//! - **[`ActorClient`]**: Trait for resource-specific client wrappers.
//! - **[`validation`]**: Ordered, short-circuiting check runner.
//! - **[`mock`]**: Helpers for testing client wrappers without an actor.
//! - **[`tracing`]**: Subscriber setup.
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, InMemoryRepository, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Table { id: String, seats: u32 }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("A table needs at least one seat")]
//! struct TableError;
//!
//! impl ActorEntity for Table {
//!     type Id = String;
//!     type Create = u32;
//!     type Update = u32;
//!     type Error = TableError;
//!
//!     fn id(&self) -> &String { &self.id }
//!
//!     fn from_create_params(id: String, seats: u32) -> Result<Self, Self::Error> {
//!         if seats == 0 { return Err(TableError); }
//!         Ok(Self { id, seats })
//!     }
//!
//!     fn on_update(&mut self, seats: u32) -> Result<(), Self::Error> {
//!         if seats == 0 { return Err(TableError); }
//!         self.seats = seats;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let seeded = InMemoryRepository::from(vec![Table { id: "t1".into(), seats: 4 }]);
//!     let mut n = 1;
//!     let (actor, client) = ResourceActor::<Table>::with_repository(10, seeded, move || {
//!         n += 1;
//!         format!("t{n}")
//!     });
//!     tokio::spawn(actor.run());
//!
//!     let table = client.create(2).await.unwrap();
//!     assert_eq!(table.id, "t2");
//!     assert!(client.create(0).await.is_err());
//!     assert_eq!(client.list().await.unwrap().len(), 2);
//! }
//! ```

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;
pub mod tracing;
pub mod validation;

// Re-export core types for convenience
pub use actor::{IdGenerator, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use repository::{InMemoryRepository, Repository};
