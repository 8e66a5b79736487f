use actor_store::EntityClient;
use chrono::{Duration, Utc};
use restaurant_orders::lifecycle::OrderSystem;
use restaurant_orders::model::{DishRequest, KitchenProgress, OrderSpec};
use restaurant_orders::order_actor::OrderError;

fn a_spec(dishes: &[(&str, u32)]) -> OrderSpec {
    OrderSpec {
        dishes: dishes
            .iter()
            .map(|(category, portions)| DishRequest {
                category: (*category).to_string(),
                portions: *portions,
            })
            .collect(),
    }
}

/// Full end-to-end test of the order lifecycle against the real store actor.
#[tokio::test]
async fn test_order_is_created_from_specification_data() {
    let system = OrderSystem::new();

    let order = system
        .orders
        .save(a_spec(&[("starter", 2), ("main", 3)]))
        .await
        .expect("Failed to save order");

    assert_eq!(order.dishes.len(), 2);
    assert_eq!(order.dishes[0].portions_to_deliver, 2);
    assert_eq!(order.dishes[1].portions_to_deliver, 3);
    for dish in &order.dishes {
        assert_eq!(dish.portions_ready_in_the_kitchen, 0);
        assert!(!dish.ready());
    }
    assert!(!order.ready());

    // The saved order can be loaded back directly
    let loaded = system
        .orders
        .get(order.id.clone())
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(loaded, order);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_order_becomes_ready_when_kitchen_catches_up() {
    let system = OrderSystem::new();

    let order = system.orders.save(a_spec(&[("main", 3)])).await.unwrap();
    assert!(!order.ready());

    // Partial progress is not enough
    let order = system
        .orders
        .record_kitchen_progress(
            order.id.clone(),
            KitchenProgress {
                dish: 0,
                portions_ready: 2,
            },
        )
        .await
        .unwrap();
    assert!(!order.dishes[0].ready());
    assert!(!order.ready());

    // The last missing portion flips both the dish and the order
    let order = system
        .orders
        .record_kitchen_progress(
            order.id.clone(),
            KitchenProgress {
                dish: 0,
                portions_ready: 3,
            },
        )
        .await
        .unwrap();
    assert!(order.dishes[0].ready());
    assert!(order.ready());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_is_ready_exactly_when_its_last_dish_is() {
    let system = OrderSystem::new();

    let order = system
        .orders
        .save(a_spec(&[("main", 2), ("dessert", 1)]))
        .await
        .unwrap();

    let order = system
        .orders
        .record_kitchen_progress(
            order.id.clone(),
            KitchenProgress {
                dish: 0,
                portions_ready: 2,
            },
        )
        .await
        .unwrap();
    assert!(order.dishes[0].ready());
    assert!(!order.ready(), "one dish is still missing");

    let order = system
        .orders
        .record_kitchen_progress(
            order.id.clone(),
            KitchenProgress {
                dish: 1,
                portions_ready: 1,
            },
        )
        .await
        .unwrap();
    assert!(order.ready());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_progress_for_unknown_dish_fails() {
    let system = OrderSystem::new();

    let order = system.orders.save(a_spec(&[("main", 3)])).await.unwrap();

    let err = system
        .orders
        .record_kitchen_progress(
            order.id,
            KitchenProgress {
                dish: 5,
                portions_ready: 1,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::UnknownDish {
            index: 5,
            dish_count: 1
        }
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_progress_for_unknown_order_fails() {
    let system = OrderSystem::new();

    let err = system
        .orders
        .record_kitchen_progress(
            99.into(),
            KitchenProgress {
                dish: 0,
                portions_ready: 1,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NotFound("order_99".to_string()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_created_between_returns_orders_in_range() {
    let system = OrderSystem::new();

    let order = system.orders.save(a_spec(&[("main", 3)])).await.unwrap();

    let found = system
        .orders
        .created_between(
            order.created_at - Duration::seconds(1),
            order.created_at + Duration::seconds(1),
        )
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, order.id);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_created_between_includes_both_bounds() {
    let system = OrderSystem::new();

    let order = system.orders.save(a_spec(&[("main", 3)])).await.unwrap();
    let at = order.created_at;
    let second = Duration::seconds(1);

    // Both bounds equal to the creation time still match
    let exact = system.orders.created_between(at, at).await.unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].id, order.id);

    // Creation time sitting on the upper bound
    let upper = system.orders.created_between(at - second, at).await.unwrap();
    assert_eq!(upper.len(), 1);

    // Creation time sitting on the lower bound
    let lower = system.orders.created_between(at, at + second).await.unwrap();
    assert_eq!(lower.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_created_between_returns_nothing_when_range_is_in_the_future() {
    let system = OrderSystem::new();

    system.orders.save(a_spec(&[("main", 3)])).await.unwrap();

    let in_the_future = Utc::now() + Duration::seconds(100_000);
    let found = system
        .orders
        .created_between(in_the_future, in_the_future + Duration::seconds(10))
        .await
        .unwrap();
    assert!(found.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_created_between_returns_nothing_when_range_is_in_the_past() {
    let system = OrderSystem::new();

    system.orders.save(a_spec(&[("main", 3)])).await.unwrap();

    let in_the_past = Utc::now() - Duration::seconds(100_000);
    let found = system
        .orders
        .created_between(in_the_past - Duration::seconds(10), in_the_past)
        .await
        .unwrap();
    assert!(found.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rendered_json_groups_dishes_by_category() {
    let system = OrderSystem::new();

    let order = system
        .orders
        .save(a_spec(&[
            ("starter", 2),
            ("main", 3),
            ("main", 2),
            ("dessert", 4),
            ("dessert", 2),
        ]))
        .await
        .unwrap();

    let document = serde_json::to_value(&order).unwrap();

    // The key set is exactly the distinct categories among the dishes
    let dishes = document["dishes"].as_object().unwrap();
    let mut keys: Vec<&str> = dishes.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["dessert", "main", "starter"]);

    assert_eq!(dishes["starter"].as_array().unwrap().len(), 1);
    assert_eq!(dishes["main"].as_array().unwrap().len(), 2);
    assert_eq!(dishes["dessert"].as_array().unwrap().len(), 2);

    // Top-level fields of the exchange document
    assert!(document["createdAt"].is_string());
    assert_eq!(document["ready"], serde_json::json!(false));

    system.shutdown().await.unwrap();
}

/// Concurrent saves are serialized by the store actor; a covering range
/// query sees all of them.
#[tokio::test]
async fn test_concurrent_orders_all_land_in_the_store() {
    let system = OrderSystem::new();
    let started_at = Utc::now();

    let mut handles = vec![];
    for _i in 0..10 {
        let orders = system.orders.clone();
        let handle =
            tokio::spawn(async move { orders.save(a_spec(&[("main", 2)])).await });
        handles.push(handle);
    }

    let mut successful = 0;
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
        successful += 1;
    }
    assert_eq!(successful, 10);

    let found = system
        .orders
        .created_between(started_at, Utc::now() + Duration::seconds(1))
        .await
        .unwrap();
    assert_eq!(found.len(), 10);

    system.shutdown().await.unwrap();
}
