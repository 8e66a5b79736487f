//! # Order Client
//!
//! Provides a high-level API for interacting with the Order store actor.
//! It wraps a `StoreClient<Order>` and exposes the domain operations: saving
//! an order from its specification, querying by creation-time range, and
//! recording kitchen progress.

use actor_store::{EntityClient, StoreClient, StoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::model::{KitchenProgress, Order, OrderId, OrderQuery, OrderSpec};
use crate::order_actor::OrderError;

/// Client for interacting with the Order store actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Persists a new order built from `spec`, with `created_at` set to the
    /// current time and every dish starting at zero portions ready.
    /// Resolves to the persisted order, or to the store failure verbatim.
    #[instrument(skip(self))]
    pub async fn save(&self, spec: OrderSpec) -> Result<Order, OrderError> {
        debug!("Sending save to store");
        self.inner.save(spec).await.map_err(Self::map_error)
    }

    /// Every persisted order whose `created_at` falls in `[start, end]`,
    /// inclusive of both bounds. No matches is an empty vector, not an
    /// error; the ordering of the result is unspecified.
    #[instrument(skip(self))]
    pub async fn created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Order>, OrderError> {
        debug!("Sending range query to store");
        self.inner
            .select(OrderQuery::CreatedBetween { start, end })
            .await
            .map_err(Self::map_error)
    }

    /// Records a kitchen station's progress on one dish of an order and
    /// resolves to the order's new state. The store actor serializes
    /// concurrent reports from multiple stations.
    #[instrument(skip(self))]
    pub async fn record_kitchen_progress(
        &self,
        id: OrderId,
        progress: KitchenProgress,
    ) -> Result<Order, OrderError> {
        debug!("Sending kitchen progress to store");
        self.inner
            .update(id, progress)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl EntityClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    /// Entity-level failures come back boxed inside the store error; unbox
    /// them so callers match on `OrderError::UnknownDish` instead of a
    /// stringified wrapper.
    fn map_error(e: StoreError) -> OrderError {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(domain) => *domain,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
