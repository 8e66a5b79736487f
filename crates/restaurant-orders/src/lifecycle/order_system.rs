use crate::clients::OrderClient;
use tracing::{error, info};

/// The runtime orchestrator for the order backend.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the store actor
/// - **Client Wiring**: exposing the domain client callers use
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let order = system.orders.save(spec).await?;
/// let todays = system.orders.created_between(start, end).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order store actor
    pub orders: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates a new `OrderSystem` with the order store actor running.
    ///
    /// The order entity has no dependencies, so the actor runs with an empty
    /// context.
    pub fn new() -> Self {
        let (order_actor, generic_client) = crate::order_actor::new();
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            orders: OrderClient::new(generic_client),
            handles: vec![order_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the store's channel; the actor drains the
    /// remaining messages, logs its final state and exits its loop. We then
    /// wait for the task to finish and surface a panic as an error.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
