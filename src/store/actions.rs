//! Mutations of the store state.
//!
//! The built-in actions are plain data operations. Anything that loads rows
//! from elsewhere lives outside the store and dispatches these.

use super::state::StoreState;
use crate::types::DriverResult;

/// A named state transition.
///
/// Implement this to extend the store with new mutations; the store's
/// state is only reachable mutably from inside `apply`.
pub trait Action {
    /// Name recorded in logs when the action is dispatched.
    const NAME: &'static str;
    type Output;

    fn apply(self, state: &mut StoreState) -> Self::Output;
}

/// Append one row at the end. Returns the new row count.
#[derive(Debug, Clone)]
pub struct Append(pub DriverResult);

impl Action for Append {
    const NAME: &'static str = "append";
    type Output = usize;

    fn apply(self, state: &mut StoreState) -> usize {
        state.results.data.push(self.0);
        state.results.data.len()
    }
}

/// Append rows at the end, keeping their order. Returns how many were added.
#[derive(Debug, Clone)]
pub struct Extend(pub Vec<DriverResult>);

impl Action for Extend {
    const NAME: &'static str = "extend";
    type Output = usize;

    fn apply(self, state: &mut StoreState) -> usize {
        let added = self.0.len();
        state.results.data.extend(self.0);
        added
    }
}

/// Replace the whole table. Returns the rows that were there before.
#[derive(Debug, Clone)]
pub struct ReplaceAll(pub Vec<DriverResult>);

impl Action for ReplaceAll {
    const NAME: &'static str = "replace_all";
    type Output = Vec<DriverResult>;

    fn apply(self, state: &mut StoreState) -> Vec<DriverResult> {
        std::mem::replace(&mut state.results.data, self.0)
    }
}

/// Remove every row. Returns how many were removed.
#[derive(Debug, Clone, Copy)]
pub struct Clear;

impl Action for Clear {
    const NAME: &'static str = "clear";
    type Output = usize;

    fn apply(self, state: &mut StoreState) -> usize {
        let removed = state.results.data.len();
        state.results.data.clear();
        removed
    }
}

/// Set the `fetching` flag. Returns the previous value.
#[derive(Debug, Clone, Copy)]
pub struct SetFetching(pub bool);

impl Action for SetFetching {
    const NAME: &'static str = "set_fetching";
    type Output = bool;

    fn apply(self, state: &mut StoreState) -> bool {
        std::mem::replace(&mut state.fetching, self.0)
    }
}
