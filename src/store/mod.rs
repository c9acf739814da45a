//! The results store.
//!
//! [`ResultsStore`] owns the current results table and the `fetching` flag.
//! Reads go through `&self` accessors; every change goes through
//! [`ResultsStore::dispatch`] with an [`Action`]. Computed views implement
//! [`Getter`] and are evaluated with [`ResultsStore::get`].
//!
//! The store itself knows nothing about where rows come from. Loading them
//! is the job of collaborators such as [`crate::import`].

mod actions;
mod getters;
mod state;

pub use actions::{Action, Append, Clear, Extend, ReplaceAll, SetFetching};
pub use getters::{ColumnWidths, Getter};
pub use state::{Results, StoreState};

use crate::types::DriverResult;
use tracing::debug;

/// State container for one application run.
///
/// Create it once at startup and pass it down by reference. There is no
/// global instance and no teardown beyond dropping it.
#[derive(Debug, Default)]
pub struct ResultsStore {
    state: StoreState,
}

impl ResultsStore {
    /// Store identifier, used when labelling snapshots.
    pub const ID: &'static str = "resultsStore";

    /// A fresh store: no rows, not fetching.
    pub fn new() -> Self {
        Self {
            state: StoreState::default(),
        }
    }

    /// The whole state.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn results(&self) -> &Results {
        &self.state.results
    }

    /// Rows in insertion order.
    pub fn data(&self) -> &[DriverResult] {
        &self.state.results.data
    }

    pub fn len(&self) -> usize {
        self.state.results.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.results.data.is_empty()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.fetching
    }

    /// Apply an action to the state and return its output.
    pub fn dispatch<A: Action>(&mut self, action: A) -> A::Output {
        let before = self.len();
        let output = action.apply(&mut self.state);
        debug!(
            store = Self::ID,
            action = A::NAME,
            rows_before = before,
            rows_after = self.len(),
            fetching = self.state.fetching,
            "dispatched action"
        );
        output
    }

    /// Evaluate a getter against the current state.
    pub fn get<G: Getter>(&self, getter: G) -> G::Output {
        getter.get(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cla: &str, driver: &str) -> DriverResult {
        DriverResult::new(cla, driver)
    }

    #[test]
    fn test_new_store_is_empty_and_idle() {
        let store = ResultsStore::new();
        assert!(store.data().is_empty());
        assert!(!store.is_fetching());
        assert_eq!(store.state(), &StoreState::default());
    }

    #[test]
    fn test_new_store_serializes_to_initial_shape() {
        let store = ResultsStore::new();
        let json = serde_json::to_value(store.state()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "results": { "data": [] }, "fetching": false })
        );
    }

    #[test]
    fn test_append_single_record() {
        let input = DriverResult::new("1", "A. Driver")
            .with_number("5")
            .with_car("X1", "V8")
            .with_timing("70", "1:45:10", "-", "185.2");

        let mut store = ResultsStore::new();
        let len = store.dispatch(Append(input.clone()));

        assert_eq!(len, 1);
        assert_eq!(store.data(), &[input]);
        assert!(!store.is_fetching());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = ResultsStore::new();
        store.dispatch(Extend(vec![row("2", "B"), row("1", "A")]));
        store.dispatch(Append(row("3", "C")));
        store.dispatch(Extend(vec![row("2", "B")]));

        let drivers: Vec<_> = store.data().iter().map(|r| r.driver.as_str()).collect();
        assert_eq!(drivers, vec!["B", "A", "C", "B"]);
    }

    #[test]
    fn test_duplicate_rows_are_kept() {
        let mut store = ResultsStore::new();
        store.dispatch(Append(row("1", "A")));
        store.dispatch(Append(row("1", "A")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut store = ResultsStore::new();
        store.dispatch(Append(row("1", "A")));

        let first = store.data().to_vec();
        let fetching = store.is_fetching();
        assert_eq!(store.data(), first.as_slice());
        assert_eq!(store.data(), first.as_slice());
        assert_eq!(store.is_fetching(), fetching);
    }

    #[test]
    fn test_replace_all_returns_previous_rows() {
        let mut store = ResultsStore::new();
        store.dispatch(Append(row("1", "A")));

        let previous = store.dispatch(ReplaceAll(vec![row("1", "Z"), row("2", "Y")]));

        assert_eq!(previous, vec![row("1", "A")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.data()[0].driver, "Z");
    }

    #[test]
    fn test_clear_keeps_fetching_flag() {
        let mut store = ResultsStore::new();
        store.dispatch(SetFetching(true));
        store.dispatch(Extend(vec![row("1", "A"), row("2", "B")]));

        assert_eq!(store.dispatch(Clear), 2);
        assert!(store.is_empty());
        assert!(store.is_fetching());
    }

    #[test]
    fn test_fetching_flag_has_no_transition_rules() {
        let mut store = ResultsStore::new();
        assert!(!store.dispatch(SetFetching(true)));
        assert!(store.dispatch(SetFetching(true)));
        assert!(store.is_fetching());
        assert!(store.dispatch(SetFetching(false)));
        assert!(!store.is_fetching());
    }

    #[test]
    fn test_custom_action_and_getter() {
        struct DropLast;

        impl Action for DropLast {
            const NAME: &'static str = "drop_last";
            type Output = Option<DriverResult>;

            fn apply(self, state: &mut StoreState) -> Self::Output {
                state.results.data.pop()
            }
        }

        let mut store = ResultsStore::new();
        store.dispatch(Extend(vec![row("1", "A"), row("2", "B")]));

        assert_eq!(store.dispatch(DropLast), Some(row("2", "B")));
        let leader = store.get(|s: &StoreState| s.results.data.first().map(|r| r.driver.clone()));
        assert_eq!(leader.as_deref(), Some("A"));
    }
}
