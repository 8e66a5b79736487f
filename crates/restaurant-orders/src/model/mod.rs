//! Pure data structures for the order domain. The
//! [`StoreEntity`](actor_store::StoreEntity) contract for [`Order`] lives in
//! `order_actor`.

pub mod order;

pub use order::*;
