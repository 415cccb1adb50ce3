use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use crate::models::FlightOffer;

/// Lifecycle of the most recent search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Point-in-time view of the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSnapshot {
    pub status: SearchStatus,
    pub flights: Vec<FlightOffer>,
}

/// Handle for one search cycle, returned by [`SearchStore::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTicket(u64);

#[derive(Debug, Default)]
struct StoreState {
    snapshot: SearchSnapshot,
    latest_cycle: u64,
}

/// Holds the last search result and its status
///
/// Each cycle starts with [`begin`](Self::begin). Only the most recent
/// cycle may settle the store; completions from older cycles are dropped.
/// Results are replaced wholesale on success and kept as-is on failure.
#[derive(Debug, Default)]
pub struct SearchStore {
    state: RwLock<StoreState>,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle and mark the store as loading
    pub async fn begin(&self) -> CycleTicket {
        let mut state = self.state.write().await;
        state.latest_cycle += 1;
        state.snapshot.status = SearchStatus::Loading;
        tracing::trace!("Search cycle {} started", state.latest_cycle);
        CycleTicket(state.latest_cycle)
    }

    /// Store the offers of a finished cycle. Returns false for a stale ticket.
    pub async fn succeed(&self, ticket: CycleTicket, flights: Vec<FlightOffer>) -> bool {
        let mut state = self.state.write().await;
        if ticket.0 != state.latest_cycle {
            tracing::debug!(
                "Dropping results of stale search cycle {} (latest {})",
                ticket.0,
                state.latest_cycle
            );
            return false;
        }
        state.snapshot = SearchSnapshot {
            status: SearchStatus::Succeeded,
            flights,
        };
        true
    }

    /// Mark a cycle as failed. Returns false for a stale ticket.
    pub async fn fail(&self, ticket: CycleTicket) -> bool {
        let mut state = self.state.write().await;
        if ticket.0 != state.latest_cycle {
            return false;
        }
        state.snapshot.status = SearchStatus::Failed;
        true
    }

    pub async fn snapshot(&self) -> SearchSnapshot {
        self.state.read().await.snapshot.clone()
    }

    pub async fn status(&self) -> SearchStatus {
        self.state.read().await.snapshot.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Leg;
    use chrono::NaiveDate;
    use tokio_test::block_on;

    fn offer(id: u32) -> FlightOffer {
        FlightOffer {
            id,
            airline: "Airline A".to_string(),
            airline_logo: String::new(),
            origin: "NYC".to_string(),
            destination: "LAX".to_string(),
            departure_time: "06:10 AM".to_string(),
            arrival_time: "08:55 AM".to_string(),
            duration: "2 hr 45 min".to_string(),
            stops: 0,
            emissions: None,
            price: 150,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            leg: Leg::Outbound,
        }
    }

    #[test]
    fn test_initial_state_idle() {
        let store = SearchStore::new();
        let snapshot = block_on(store.snapshot());

        assert_eq!(snapshot.status, SearchStatus::Idle);
        assert!(snapshot.flights.is_empty());
    }

    #[test]
    fn test_cycle_success_replaces_results() {
        let store = SearchStore::new();

        let first = block_on(store.begin());
        assert_eq!(block_on(store.status()), SearchStatus::Loading);
        assert!(block_on(store.succeed(first, vec![offer(1), offer(2)])));

        let second = block_on(store.begin());
        assert!(block_on(store.succeed(second, vec![offer(3)])));

        let snapshot = block_on(store.snapshot());
        assert_eq!(snapshot.status, SearchStatus::Succeeded);
        assert_eq!(snapshot.flights, vec![offer(3)]);
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let store = SearchStore::new();

        let first = block_on(store.begin());
        block_on(store.succeed(first, vec![offer(1)]));

        let second = block_on(store.begin());
        assert!(block_on(store.fail(second)));

        let snapshot = block_on(store.snapshot());
        assert_eq!(snapshot.status, SearchStatus::Failed);
        assert_eq!(snapshot.flights.len(), 1);
    }

    #[test]
    fn test_stale_cycle_ignored() {
        let store = SearchStore::new();

        let stale = block_on(store.begin());
        let current = block_on(store.begin());

        assert!(block_on(store.succeed(current, vec![offer(2)])));
        assert!(!block_on(store.succeed(stale, vec![offer(1)])));
        assert!(!block_on(store.fail(stale)));

        let snapshot = block_on(store.snapshot());
        assert_eq!(snapshot.status, SearchStatus::Succeeded);
        assert_eq!(snapshot.flights, vec![offer(2)]);
    }
}
