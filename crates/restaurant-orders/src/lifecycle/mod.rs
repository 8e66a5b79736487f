//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and shutting down the actors that make up the backend.
//!
//! The [`OrderSystem`] owns the store actor's task handle and the domain
//! client. Shutdown follows the channel-closure pattern: dropping the last
//! client closes the store's channel, the actor detects it and exits after
//! draining pending messages, and `shutdown()` awaits the task so nothing is
//! lost.

pub mod order_system;

pub use order_system::*;
