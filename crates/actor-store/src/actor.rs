//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the in-memory persistence
//! collaborator of the system. It owns the entity store and processes
//! requests sequentially, implementing the "server" side of the actor model.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that persists a collection of entities.
///
/// # Concurrency Model
/// The actor owns its `store` exclusively and drains its channel one message
/// at a time, so no `Mutex` or `RwLock` guards the map. Concurrent writers
/// (several kitchen stations reporting progress on the same order, say) are
/// serialized by the channel: each update is applied to the state left by
/// the previous one.
///
/// # Operations
///
/// * **Save**: assigns the next sequential ID, builds the entity via
///   [`StoreEntity::from_spec`], runs the `on_save` hook, inserts it and
///   replies with the persisted entity.
/// * **Get**: replies with a clone of the entity, or `None`.
/// * **Update**: runs [`StoreEntity::on_update`] on the stored entity and
///   replies with its new state; an unknown ID is [`StoreError::NotFound`].
/// * **Select**: replies with a clone of every entity whose
///   [`StoreEntity::matches`] returns true for the query.
///
/// The actor performs no retries: an entity hook failure is boxed into
/// [`StoreError::EntityError`] and surfaced verbatim through the reply slot.
///
/// See the crate-level example for the create/wire/run pattern.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls to the client will wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `StoreActor` instance (the server), which must be run via `.run()`.
    /// 2. The `StoreClient` instance, which can be cloned and shared to send requests.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every entity hook. Dependencies
    /// created after the actor was instantiated can be wired in here, right
    /// before the loop starts.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "restaurant_orders::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save { spec, respond_to } => {
                    debug!(entity_type, ?spec, "Save");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_spec(id.clone(), spec) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_save(&context).await {
                                warn!(entity_type, error = %e, "on_save failed");
                                let _ =
                                    respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Saved");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Save failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Select { query, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, matched = items.len(), "Select");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
