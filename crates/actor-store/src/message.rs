//! # Store Messages
//!
//! This module defines the message types exchanged between a
//! [`StoreClient`](crate::StoreClient) and its [`StoreActor`](crate::StoreActor).

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
///
/// A oneshot sender can be consumed exactly once, which is what guarantees
/// the store's completion contract: every request finishes with an error or
/// a value, never both, never twice.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store actor to request operations.
///
/// The variants are the persistence contract of the system:
///
/// - **Save**: build an entity from its [`StoreEntity::Spec`] and persist it.
///   Replies with the persisted entity itself, so callers see the
///   creation-time fields the store assigned.
/// - **Get**: direct load by ID. An absent entity is `None`, not an error.
/// - **Update**: apply a [`StoreEntity::Update`] to an existing entity and
///   reply with its new state.
/// - **Select**: reply with every stored entity matching a
///   [`StoreEntity::Query`]. An empty result set is not an error, and the
///   ordering of the reply is unspecified.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Save {
        spec: T::Spec,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Select {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}
