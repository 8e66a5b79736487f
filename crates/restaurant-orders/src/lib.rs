//! # Restaurant Orders Library
//!
//! The Order domain model of a restaurant-ordering backend, persisted
//! through an [`actor_store`] actor:
//!
//! - **[model]**: the [`Order`](model::Order) aggregate, its
//!   [`Dish`](model::Dish) line items with derived readiness, and the
//!   specification/progress/query payload types.
//! - **[order_actor]**: the store contract implementation and the factory
//!   that spawns the order store.
//! - **[clients]**: [`OrderClient`](clients::OrderClient), the type-safe API
//!   for saving orders, querying by creation-time range and recording
//!   kitchen progress.
//! - **[lifecycle]**: [`OrderSystem`](lifecycle::OrderSystem), which starts
//!   and gracefully stops the whole thing.

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
