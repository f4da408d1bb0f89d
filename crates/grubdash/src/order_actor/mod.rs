//! # Order Actor
//!
//! This module implements the Order resource actor and its status state machine.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//!   and its validation chains
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## State machine
//!
//! ```text
//! pending, preparing, out-for-delivery   update may move freely between these
//! delivered                              terminal: every update is rejected
//! ```
//!
//! An update cannot set `delivered` itself, so delivered orders only come from seed data.
//! Deletion is allowed from `pending` only.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{next_id, Order, OrderId};
use resource_actor::{InMemoryRepository, ResourceActor, ResourceClient};

/// Creates a new Order actor, seeded with `seed`, and its client.
pub fn new(capacity: usize, seed: Vec<Order>) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::with_repository(capacity, InMemoryRepository::from(seed), || {
        OrderId(next_id())
    })
}
