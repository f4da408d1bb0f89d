//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and stops the actors behind the API.
//!
//! ## The GrubSystem Pattern
//!
//! [`GrubSystem`] owns one actor per collection:
//!
//! 1. **Actor Creation** - each actor is built over a repository seeded from [`SeedData`](crate::config::SeedData)
//! 2. **Start** - each actor's run loop is spawned on its own task
//! 3. **Graceful Shutdown** - dropping the clients closes the channels; the system then
//!    awaits every task
//!
//! The two collections are independent, so there is no wiring between the actors and no
//! start order to respect.
//!
//! ## Shutdown and clones
//!
//! An actor stops only when *every* client for it is gone. The HTTP layer holds clones of
//! both clients, so the server must be stopped (and its state dropped) before
//! [`GrubSystem::shutdown`] can complete.

pub mod grub_system;

pub use grub_system::*;
