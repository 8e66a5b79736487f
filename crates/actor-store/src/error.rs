//! # Store Errors
//!
//! Common error types shared by the store actor and its clients. Centralizing
//! them keeps failure reporting uniform across every entity type the store
//! manages.

/// Errors that can occur within the store itself.
///
/// Entity-level failures (validation, unknown dish index, ...) travel inside
/// the `EntityError` variant; everything else signals a broken or missing
/// store actor.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
