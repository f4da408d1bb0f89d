use crate::model::OrderId;

/// Errors returned by order operations. The `Display` text is the message sent to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("{0}")]
    Validation(String),
    #[error("Order does not exist: {0}")]
    NotFound(OrderId),
    /// The order's current status forbids the operation.
    #[error("{0}")]
    IllegalTransition(String),
    #[error("{0}")]
    ActorCommunicationError(String),
}
