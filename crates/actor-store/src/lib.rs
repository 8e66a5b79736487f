//! # Actor Store
//!
//! An in-memory persistence collaborator built on the actor model: each
//! entity type gets one [`StoreActor`] that owns its records and processes
//! requests sequentially, and any number of cloned [`StoreClient`]s that talk
//! to it over a channel.
//!
//! The store exposes exactly the contract a record-and-derive domain model
//! needs:
//!
//! - **Save** an entity built from an external specification document,
//!   getting the persisted entity back.
//! - **Get** an entity directly by ID.
//! - **Update** an entity through its own mutation hook.
//! - **Select** every entity matching a query predicate (e.g. a
//!   creation-time range).
//!
//! Every operation completes exactly once, later, with a value or a
//! [`StoreError`]. The reply travels over a oneshot channel, so a success
//! and an error can never both be signalled for the same call.
//!
//! ## Concurrency Model
//!
//! - Each store actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks)
//! - Multiple actors run in **parallel**
//! - No shared mutable state (message passing only)
//!
//! ## Example
//!
//! ```rust
//! use actor_store::{StoreActor, StoreEntity};
//! use async_trait::async_trait;
//!
//! // 1. Define the entity and its payload types
//! #[derive(Clone, Debug)]
//! struct Ticket {
//!     id: u32,
//!     label: String,
//!     opened_at: u64,
//! }
//!
//! #[derive(Debug)] struct TicketSpec { label: String, opened_at: u64 }
//! #[derive(Debug)] struct TicketRelabel { label: String }
//! #[derive(Debug)] enum TicketQuery { OpenedBetween(u64, u64) }
//! #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
//!
//! #[async_trait]
//! impl StoreEntity for Ticket {
//!     type Id = u32;
//!     type Spec = TicketSpec;
//!     type Update = TicketRelabel;
//!     type Query = TicketQuery;
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn from_spec(id: u32, spec: TicketSpec) -> Result<Self, TicketError> {
//!         Ok(Self { id, label: spec.label, opened_at: spec.opened_at })
//!     }
//!
//!     fn matches(&self, query: &TicketQuery) -> bool {
//!         match query {
//!             TicketQuery::OpenedBetween(start, end) => {
//!                 *start <= self.opened_at && self.opened_at <= *end
//!             }
//!         }
//!     }
//!
//!     async fn on_update(&mut self, update: TicketRelabel, _: &()) -> Result<(), TicketError> {
//!         self.label = update.label;
//!         Ok(())
//!     }
//! }
//!
//! // 2. Use the store
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Ticket>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let ticket = client
//!         .save(TicketSpec { label: "table 4".into(), opened_at: 7 })
//!         .await
//!         .unwrap();
//!     let open = client.select(TicketQuery::OpenedBetween(0, 10)).await.unwrap();
//!     assert_eq!(open.len(), 1);
//!     assert_eq!(open[0].id, ticket.id);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` speaking the same channel
//! protocol as a real actor, with scripted expectations and error injection.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::EntityClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
