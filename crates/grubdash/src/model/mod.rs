//! # Domain Models
//!
//! Pure data structures for the two resources. [`Dish`] and [`Order`] are the stored
//! records; [`DishPayload`] and [`OrderPayload`] are the loosely typed request bodies that
//! the validation chains in [`crate::dish_actor`] and [`crate::order_actor`] inspect.

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;

/// Returns a fresh opaque identifier: 32 lowercase hex characters from 128 random bits.
pub fn next_id() -> String {
    format!("{:032x}", rand::random::<u128>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_32_hex_chars() {
        let id = next_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn ids_differ_between_calls() {
        assert_ne!(next_id(), next_id());
    }
}
