//! # Order Store Actor
//!
//! Wiring for the Order entity: the [`StoreEntity`](actor_store::StoreEntity)
//! implementation, the order error type, and the factory that creates the
//! store actor managing all orders.
//!
//! ## Structure
//!
//! - [`entity`] - store contract implementation for [`Order`](crate::model::Order)
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - factory function that creates the actor and its generic client
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_orders::clients::OrderClient;
//! use restaurant_orders::model::{DishRequest, OrderSpec};
//! use restaurant_orders::order_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (actor, generic_client) = order_actor::new();
//!     let client = OrderClient::new(generic_client);
//!
//!     // Start the actor (no dependencies, so context is ())
//!     tokio::spawn(actor.run(()));
//!
//!     // Save an order from its specification
//!     let spec = OrderSpec {
//!         dishes: vec![DishRequest {
//!             category: "main".to_string(),
//!             portions: 3,
//!         }],
//!     };
//!     let order = client.save(spec).await?;
//!     assert!(!order.ready());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use actor_store::{StoreActor, StoreClient};

/// Creates a new Order store actor and its generic client.
pub fn new() -> (StoreActor<Order>, StoreClient<Order>) {
    StoreActor::new(32)
}
