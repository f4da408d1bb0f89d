/// Represents a dish on the menu.
///
/// # Resource Actor
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for Dish`](#impl-ActorEntity-for-Dish) for details on:
/// - Creation parameters ([`DishPayload`])
/// - Update parameters ([`DishPayload`], checked against the stored id)
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt::Display;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub String);

impl From<String> for DishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub description: String,
    /// Always a positive number; kept as sent so integers stay integers on the wire.
    pub price: Number,
    pub image_url: String,
}

/// The `data` object of a dish create or update request.
///
/// Every field is optional and untyped so that a missing or wrong-typed property reaches
/// the validation chain instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DishPayload {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub image_url: Option<Value>,
}
