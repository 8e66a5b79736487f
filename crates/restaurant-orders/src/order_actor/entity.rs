//! Store entity contract for the Order aggregate.
//!
//! This is where the persistence-facing behavior lives: building an order
//! from its specification at save time, answering range queries, and
//! applying kitchen progress reports.

use actor_store::StoreEntity;
use async_trait::async_trait;
use chrono::Utc;

use crate::model::{Dish, KitchenProgress, Order, OrderId, OrderQuery, OrderSpec};
use crate::order_actor::OrderError;

#[async_trait]
impl StoreEntity for Order {
    type Id = OrderId;
    type Spec = OrderSpec;
    type Update = KitchenProgress;
    type Query = OrderQuery;
    type Context = ();
    type Error = OrderError;

    /// Builds the order at save time: one dish per request, with the
    /// requested portion count to deliver and nothing ready in the kitchen
    /// yet. `created_at` is stamped here and never changes afterwards.
    fn from_spec(id: OrderId, spec: OrderSpec) -> Result<Self, Self::Error> {
        let dishes = spec
            .dishes
            .into_iter()
            .map(|request| Dish {
                category: request.category,
                portions_to_deliver: request.portions,
                portions_ready_in_the_kitchen: 0,
            })
            .collect();

        Ok(Self {
            id,
            created_at: Utc::now(),
            dishes,
        })
    }

    /// Range queries are inclusive on both bounds.
    fn matches(&self, query: &OrderQuery) -> bool {
        match query {
            OrderQuery::CreatedBetween { start, end } => {
                *start <= self.created_at && self.created_at <= *end
            }
        }
    }

    /// Applies a kitchen progress report to one dish. Counts never decrease:
    /// a report lower than what the kitchen already delivered is treated as
    /// stale and leaves the count unchanged.
    async fn on_update(
        &mut self,
        progress: KitchenProgress,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        let dish_count = self.dishes.len();
        let dish = self
            .dishes
            .get_mut(progress.dish)
            .ok_or(OrderError::UnknownDish {
                index: progress.dish,
                dish_count,
            })?;

        dish.portions_ready_in_the_kitchen = dish
            .portions_ready_in_the_kitchen
            .max(progress.portions_ready);
        Ok(())
    }
}
