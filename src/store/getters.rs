//! Computed views over the store state.

use super::state::StoreState;
use crate::types::COLUMNS;

/// A read-only computation over the state.
pub trait Getter {
    type Output;

    fn get(&self, state: &StoreState) -> Self::Output;
}

impl<F, T> Getter for F
where
    F: Fn(&StoreState) -> T,
{
    type Output = T;

    fn get(&self, state: &StoreState) -> T {
        self(state)
    }
}

/// Display width of each column.
///
/// Cell contents count up to `max` characters; a column is never narrower
/// than its header. Widths count `char`s, not bytes.
#[derive(Debug, Clone, Copy)]
pub struct ColumnWidths {
    pub max: usize,
}

impl Getter for ColumnWidths {
    type Output = [usize; 10];

    fn get(&self, state: &StoreState) -> [usize; 10] {
        let mut widths = [0usize; 10];
        for row in &state.results.data {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = [0usize; 10];
        for ((slot, content), header) in out.iter_mut().zip(widths).zip(COLUMNS) {
            *slot = content.min(self.max).max(header.chars().count());
        }
        out
    }
}
