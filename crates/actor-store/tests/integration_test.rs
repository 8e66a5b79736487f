use actor_store::{StoreActor, StoreEntity, StoreError};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    label: String,
    opened_at: u64,
}

#[derive(Debug)]
struct TicketSpec {
    label: String,
    opened_at: u64,
}

#[derive(Debug)]
struct TicketRelabel {
    label: String,
}

#[derive(Debug)]
enum TicketQuery {
    OpenedBetween(u64, u64),
}

#[derive(Debug, thiserror::Error)]
#[error("Ticket error")]
struct TicketError;

#[async_trait]
impl StoreEntity for Ticket {
    type Id = u32;
    type Spec = TicketSpec;
    type Update = TicketRelabel;
    type Query = TicketQuery;
    type Context = ();
    type Error = TicketError;

    fn from_spec(id: u32, spec: TicketSpec) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: spec.label,
            opened_at: spec.opened_at,
        })
    }

    fn matches(&self, query: &TicketQuery) -> bool {
        match query {
            TicketQuery::OpenedBetween(start, end) => {
                *start <= self.opened_at && self.opened_at <= *end
            }
        }
    }

    async fn on_update(
        &mut self,
        update: TicketRelabel,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.label = update.label;
        Ok(())
    }
}

fn spec(label: &str, opened_at: u64) -> TicketSpec {
    TicketSpec {
        label: label.to_string(),
        opened_at,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    // Start Actor
    let (actor, client) = StoreActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    // 1. Save
    let ticket = client.save(spec("table 4", 7)).await.unwrap();
    assert_eq!(ticket.id, 1); // First ID should be 1
    assert_eq!(ticket.label, "table 4");

    // 2. Get
    let fetched = client.get(ticket.id).await.unwrap().unwrap();
    assert_eq!(fetched, ticket);

    // 3. Update
    let relabeled = client
        .update(
            ticket.id,
            TicketRelabel {
                label: "table 9".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(relabeled.label, "table 9");

    // Verify state
    let fetched = client.get(ticket.id).await.unwrap().unwrap();
    assert_eq!(fetched.label, "table 9");
}

#[tokio::test]
async fn test_select_is_inclusive_on_both_bounds() {
    let (actor, client) = StoreActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    client.save(spec("early", 5)).await.unwrap();
    client.save(spec("middle", 7)).await.unwrap();
    client.save(spec("late", 9)).await.unwrap();

    // Bounds land exactly on the first and last tickets
    let hits = client
        .select(TicketQuery::OpenedBetween(5, 9))
        .await
        .unwrap();
    assert_eq!(hits.len(), 3);

    // Degenerate range matching a single ticket
    let hits = client
        .select(TicketQuery::OpenedBetween(7, 7))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].label, "middle");

    // Range outside every ticket is empty, not an error
    let hits = client
        .select(TicketQuery::OpenedBetween(100, 200))
        .await
        .unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_update_of_missing_entity_is_not_found() {
    let (actor, client) = StoreActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let result = client
        .update(
            42,
            TicketRelabel {
                label: "ghost".into(),
            },
        )
        .await;
    assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "42"));

    // Get on a missing entity is None, not an error
    let missing = client.get(42).await.unwrap();
    assert!(missing.is_none());
}
