//! # Restaurant Orders
//!
//! Demo entry point for the order backend. It walks one order through its
//! whole lifecycle:
//!
//! 1. Save an [`Order`](restaurant_orders::model::Order) from a
//!    specification document.
//! 2. Record kitchen progress until every dish is ready.
//! 3. Query the store for orders created in the last hour.
//! 4. Print the order's exchange document, dishes grouped by category.
//!
//! Run with `RUST_LOG=info` (or `debug` for full payloads) to watch the
//! store actor's trace.

use actor_store::tracing::setup_tracing;
use chrono::Duration;
use restaurant_orders::lifecycle::OrderSystem;
use restaurant_orders::model::{DishRequest, KitchenProgress, OrderSpec};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting restaurant order system");

    let system = OrderSystem::new();

    // A table orders one starter and two mains
    let spec = OrderSpec {
        dishes: vec![
            DishRequest {
                category: "starter".to_string(),
                portions: 2,
            },
            DishRequest {
                category: "main".to_string(),
                portions: 3,
            },
            DishRequest {
                category: "main".to_string(),
                portions: 1,
            },
        ],
    };

    let span = tracing::info_span!("order_intake");
    let order = async {
        info!("Saving order from specification");
        system.orders.save(spec).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order_id = %order.id, ready = order.ready(), "Order saved");

    // The kitchen works through the order, one dish at a time
    let span = tracing::info_span!("kitchen_progress");
    let order = async {
        let mut latest = order;
        for index in 0..latest.dishes.len() {
            let portions = latest.dishes[index].portions_to_deliver;
            info!(dish = index, portions, "Dish ready in the kitchen");
            latest = system
                .orders
                .record_kitchen_progress(
                    latest.id.clone(),
                    KitchenProgress {
                        dish: index,
                        portions_ready: portions,
                    },
                )
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<_, String>(latest)
    }
    .instrument(span)
    .await?;

    info!(order_id = %order.id, ready = order.ready(), "Kitchen caught up");

    // Range query over the store
    let recent = system
        .orders
        .created_between(order.created_at - Duration::hours(1), order.created_at)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = recent.len(), "Orders created in the last hour");

    // The exchange document groups dishes by category
    let document = serde_json::to_string_pretty(&order).map_err(|e| e.to_string())?;
    println!("{document}");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
