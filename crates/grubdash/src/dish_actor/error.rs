use crate::model::DishId;

/// Errors returned by dish operations. The `Display` text is the message sent to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DishError {
    #[error("{0}")]
    Validation(String),
    #[error("Dish does not exist: {0}")]
    NotFound(DishId),
    #[error("A dish cannot be deleted.")]
    MethodNotAllowed,
    #[error("{0}")]
    ActorCommunicationError(String),
}
