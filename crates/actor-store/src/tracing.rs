//! # Observability & Tracing
//!
//! Tracing setup shared by every binary and test harness built on the store.
//!
//! The store actor emits structured events for its whole lifecycle: startup,
//! each Save/Get/Update/Select with entity IDs and store size, hook failures,
//! and shutdown. Clients add `#[instrument]` spans on top, so a single saved
//! order reads as one hierarchical trace.
//!
//! Log level is controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact operation log
//! RUST_LOG=debug cargo run     # full request payloads
//! ```

/// Initializes structured logging for the entire system.
///
/// Uses a compact format with module targets hidden; the actor already tags
/// every event with its `entity_type` field, which is the name that matters
/// when reading a trace.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
