//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract a domain type must satisfy to be
//! persisted by the generic [`StoreActor`](crate::StoreActor). It names the
//! payload types for every store operation (specification, update, query) and
//! provides the hooks the actor calls while processing them.
//!
//! # Architecture Note
//! By writing this contract once, the store loop in `actor.rs` works for any
//! entity type without knowing anything about its fields. Associated types
//! keep the whole pipeline type-safe: an order store only accepts order
//! specifications, order updates and order queries, and the compiler enforces
//! it.
//!
//! # Provided Methods (Hooks)
//! [`StoreEntity::on_save`] has a default no-op implementation; override it
//! only when saving an entity has side effects (validating against another
//! actor, for instance). [`StoreEntity::on_update`] must always be
//! implemented since an entity with no mutations has no reason to live in the
//! store.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract a domain type must satisfy to be persisted by a `StoreActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await other actors. The
/// `Context` type carries dependencies injected at `run()` time; use `()`
/// when the entity needs none.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for sequential ID assignment.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The external specification document an entity is built from at save
    /// time.
    type Spec: Send + Sync + Debug;

    /// The payload applied when an existing entity mutates.
    type Update: Send + Sync + Debug;

    /// The predicate payload used to select entities from the whole store
    /// (e.g. a creation-time range).
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the store actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per entity covers every hook. Clients get a single
    /// type to match on, at the cost of a wider-than-necessary return type
    /// for individual operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from its assigned ID and specification.
    /// Creation-time fields (timestamps, zeroed counters) are assigned here,
    /// synchronously, before `on_save` runs.
    fn from_spec(id: Self::Id, spec: Self::Spec) -> Result<Self, Self::Error>;

    /// Pure predicate deciding whether this entity is part of a query's
    /// result set. Called once per stored entity on every `Select`.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed, before it enters the store.
    async fn on_save(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received for this entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
