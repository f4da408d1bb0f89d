//! # Typed Clients
//!
//! Resource-specific wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//! They speak the domain's error types ([`DishError`](crate::dish_actor::DishError),
//! [`OrderError`](crate::order_actor::OrderError)) so callers never see a
//! [`FrameworkError`](resource_actor::FrameworkError).

pub mod dish_client;
pub mod order_client;

pub use dish_client::DishClient;
pub use order_client::OrderClient;
