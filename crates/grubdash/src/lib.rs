//! # GrubDash
//!
//! A REST API for a food-delivery kitchen: a menu of dishes and the orders placed against it.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`Dish`](model::Dish), [`Order`](model::Order)) and the
//!   untyped request payloads.
//! - **[dish_actor] / [order_actor]**: [`ActorEntity`](resource_actor::ActorEntity)
//!   implementations and their validation chains.
//! - **[clients]**: Typed wrappers (e.g. [`DishClient`](clients::DishClient)) that hide the
//!   message passing.
//! - **[lifecycle]**: Starts and stops the actors.
//! - **[api]**: axum routes.
//! - **[config]**: Command line arguments and seed data.
//!
//! ## Testing
//!
//! See [`resource_actor::mock`] for utilities to test clients without spawning full actors.

pub mod api;
pub mod clients;
pub mod config;
pub mod dish_actor;
mod fields;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
