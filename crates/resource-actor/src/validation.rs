//! # Validation Chains
//!
//! A resource guards each operation with an ordered list of named checks. The runner
//! executes them strictly in sequence and stops at the first failure, whose error becomes
//! the result of the whole chain. Later checks never run.
//!
//! ```rust
//! use resource_actor::validation::{run_chain, Check};
//!
//! struct Payload { name: String, price: i64 }
//!
//! fn has_name(p: &Payload) -> Result<(), String> {
//!     if p.name.is_empty() { Err("name".into()) } else { Ok(()) }
//! }
//! fn has_price(p: &Payload) -> Result<(), String> {
//!     if p.price <= 0 { Err("price".into()) } else { Ok(()) }
//! }
//!
//! const CHECKS: &[Check<Payload, String>] = &[("name", has_name), ("price", has_price)];
//!
//! let bad = Payload { name: String::new(), price: 0 };
//! assert_eq!(run_chain(&bad, CHECKS), Err("name".to_string()));
//! ```

use tracing::debug;

/// A named predicate over a validation context.
pub type Check<C, E> = (&'static str, fn(&C) -> Result<(), E>);

/// Runs `checks` in order against `ctx`, returning the first failure.
pub fn run_chain<C, E>(ctx: &C, checks: &[Check<C, E>]) -> Result<(), E>
where
    E: std::fmt::Display,
{
    for (name, check) in checks {
        if let Err(e) = check(ctx) {
            debug!(check = *name, error = %e, "Validation failed");
            return Err(e);
        }
    }
    Ok(())
}
