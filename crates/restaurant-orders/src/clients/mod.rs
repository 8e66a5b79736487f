//! Domain-facing clients wrapping the generic store client.

pub mod order_client;

pub use order_client::OrderClient;
