//! The Order aggregate and its payload types.
//!
//! An [`Order`] is a list of [`Dish`] line items tied to a creation
//! timestamp. Readiness is never stored: both `Dish::ready` and
//! `Order::ready` are recomputed from the current portion counts on every
//! access, so they cannot drift from the state kitchen progress mutates.

use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One requested item within an order.
///
/// `portions_to_deliver` is fixed at creation from the specification;
/// `portions_ready_in_the_kitchen` starts at zero and only ever grows as the
/// kitchen works through the order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub category: String,
    pub portions_to_deliver: u32,
    pub portions_ready_in_the_kitchen: u32,
}

impl Dish {
    /// A dish is ready once the kitchen has prepared at least the number of
    /// portions the order asks for.
    pub fn ready(&self) -> bool {
        self.portions_ready_in_the_kitchen >= self.portions_to_deliver
    }
}

/// An aggregate of requested dishes tied to a creation time.
///
/// `created_at` is assigned once, when the order is saved, and is the
/// sort/filter key for range queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    pub dishes: Vec<Dish>,
}

impl Order {
    /// An order is ready when every one of its dishes is ready; an order
    /// with no dishes is vacuously ready.
    pub fn ready(&self) -> bool {
        self.dishes.iter().all(Dish::ready)
    }

    /// Groups the flat dish sequence by category, preserving the dishes'
    /// relative order within each category.
    fn dishes_by_category(&self) -> BTreeMap<&str, Vec<&Dish>> {
        let mut grouped: BTreeMap<&str, Vec<&Dish>> = BTreeMap::new();
        for dish in &self.dishes {
            grouped.entry(dish.category.as_str()).or_default().push(dish);
        }
        grouped
    }
}

// The exchange representation computes `ready` at serialization time and
// groups dishes under their category, so both impls are written by hand.

impl Serialize for Dish {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Dish", 3)?;
        state.serialize_field("portionsToDeliver", &self.portions_to_deliver)?;
        state.serialize_field(
            "portionsReadyInTheKitchen",
            &self.portions_ready_in_the_kitchen,
        )?;
        state.serialize_field("ready", &self.ready())?;
        state.end()
    }
}

impl Serialize for Order {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Order", 3)?;
        state.serialize_field("createdAt", &self.created_at)?;
        state.serialize_field("ready", &self.ready())?;
        state.serialize_field("dishes", &self.dishes_by_category())?;
        state.end()
    }
}

/// One line of an order specification: which category, how many portions.
#[derive(Debug, Clone, serde::Serialize, Deserialize)]
pub struct DishRequest {
    pub category: String,
    pub portions: u32,
}

/// The external specification document an order is created from.
#[derive(Debug, Clone, serde::Serialize, Deserialize)]
pub struct OrderSpec {
    pub dishes: Vec<DishRequest>,
}

/// A kitchen station's report that `portions_ready` portions of the dish at
/// `dish` are done.
#[derive(Debug, Clone)]
pub struct KitchenProgress {
    pub dish: usize,
    pub portions_ready: u32,
}

/// Selection predicates over the stored orders.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// Every order whose creation time falls in `[start, end]`, inclusive of
    /// both bounds.
    CreatedBetween {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(category: &str, to_deliver: u32, ready_in_kitchen: u32) -> Dish {
        Dish {
            category: category.to_string(),
            portions_to_deliver: to_deliver,
            portions_ready_in_the_kitchen: ready_in_kitchen,
        }
    }

    fn an_order(dishes: Vec<Dish>) -> Order {
        Order {
            id: OrderId(1),
            created_at: Utc::now(),
            dishes,
        }
    }

    #[test]
    fn dish_is_ready_once_kitchen_count_reaches_requested_count() {
        assert!(!dish("main", 3, 0).ready());
        assert!(!dish("main", 3, 2).ready());
        assert!(dish("main", 3, 3).ready());
        assert!(dish("main", 3, 4).ready());
    }

    #[test]
    fn order_is_ready_only_when_every_dish_is() {
        let order = an_order(vec![dish("main", 3, 3), dish("dessert", 2, 0)]);
        assert!(!order.ready());

        let order = an_order(vec![dish("main", 3, 3), dish("dessert", 2, 2)]);
        assert!(order.ready());
    }

    #[test]
    fn order_with_no_dishes_is_vacuously_ready() {
        assert!(an_order(vec![]).ready());
    }

    #[test]
    fn rendered_json_groups_dishes_by_category() {
        let order = an_order(vec![
            dish("starter", 1, 0),
            dish("main", 3, 3),
            dish("main", 2, 0),
            dish("dessert", 1, 1),
        ]);

        let document = serde_json::to_value(&order).unwrap();
        let dishes = document["dishes"].as_object().unwrap();

        let mut keys: Vec<&str> = dishes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["dessert", "main", "starter"]);
        assert_eq!(dishes["main"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn rendered_json_carries_computed_fields_in_camel_case() {
        let order = an_order(vec![dish("main", 3, 3)]);

        let document = serde_json::to_value(&order).unwrap();
        assert!(document["createdAt"].is_string());
        assert_eq!(document["ready"], serde_json::json!(true));

        let rendered = &document["dishes"]["main"][0];
        assert_eq!(rendered["portionsToDeliver"], serde_json::json!(3));
        assert_eq!(rendered["portionsReadyInTheKitchen"], serde_json::json!(3));
        assert_eq!(rendered["ready"], serde_json::json!(true));
    }

    #[test]
    fn order_spec_deserializes_from_a_plain_document() {
        let spec: OrderSpec = serde_json::from_str(
            r#"{"dishes": [{"category": "main", "portions": 3}]}"#,
        )
        .unwrap();
        assert_eq!(spec.dishes.len(), 1);
        assert_eq!(spec.dishes[0].category, "main");
        assert_eq!(spec.dishes[0].portions, 3);
    }
}
