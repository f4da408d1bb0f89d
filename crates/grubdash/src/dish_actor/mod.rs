//! # Dish Actor
//!
//! This module implements the Dish resource actor: the menu.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Dish`]
//!   and its validation chains
//! - [`error`] - [`DishError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use grubdash::clients::DishClient;
//! use grubdash::dish_actor;
//! use grubdash::model::DishPayload;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = dish_actor::new(32, Vec::new());
//!     let client = DishClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let payload: DishPayload = serde_json::from_value(json!({
//!         "name": "Pho",
//!         "description": "Beef noodle soup",
//!         "price": 12,
//!         "image_url": "pho.jpg"
//!     }))?;
//!     let dish = client.create_dish(payload).await?;
//!     assert_eq!(client.read_dish(dish.id.clone()).await?, dish);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{next_id, Dish, DishId};
use resource_actor::{InMemoryRepository, ResourceActor, ResourceClient};

/// Creates a new Dish actor, seeded with `seed`, and its client.
pub fn new(capacity: usize, seed: Vec<Dish>) -> (ResourceActor<Dish>, ResourceClient<Dish>) {
    ResourceActor::with_repository(capacity, InMemoryRepository::from(seed), || {
        DishId(next_id())
    })
}
