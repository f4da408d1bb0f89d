//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! Entity-specific failures travel inside [`FrameworkError::EntityError`] and are
//! recovered by the resource client with [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Generated id already in use: {0}")]
    DuplicateId(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` for framework-level failures or when the boxed error is of a
    /// different type.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(err) => err
                .downcast::<E>()
                .map(|err| *err)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("price must be positive")]
    struct PriceError;

    #[test]
    fn entity_error_is_recovered_by_type() {
        let err = FrameworkError::EntityError(Box::new(PriceError));
        assert_eq!(err.into_entity_error::<PriceError>().unwrap(), PriceError);
    }

    #[test]
    fn framework_errors_are_passed_through() {
        let err = FrameworkError::NotFound("42".to_string());
        match err.into_entity_error::<PriceError>() {
            Err(FrameworkError::NotFound(id)) => assert_eq!(id, "42"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn foreign_entity_errors_stay_boxed() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let err = err.into_entity_error::<PriceError>().unwrap_err();
        assert_eq!(err.to_string(), "Entity error: disk");
    }
}
