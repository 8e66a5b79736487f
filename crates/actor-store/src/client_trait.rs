//! # EntityClient Trait
//!
//! Provides a common interface for entity-specific clients, adding a default
//! `get` method built on top of the generic `StoreClient`.

use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit standard store operations.
///
/// Domain clients wrap a [`StoreClient`] and expose domain-named methods
/// (`save`, `created_between`, ...). Implementing this trait gives them the
/// generic `get` for free, with framework errors already mapped into the
/// domain error type.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl EntityClient<Order> for OrderClient {
///     type Error = OrderError;
///
///     fn inner(&self) -> &StoreClient<Order> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         OrderError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// // get() is provided automatically:
/// let order = order_client.get(OrderId(1)).await?;
/// ```
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the specific entity error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
