//! Running totals across the segments of a mappings string.

use tracing::trace;

use crate::record::{Deltas, Positions};

/// Five independent running totals.
///
/// Each total only moves when a record supplies its field. The generated
/// column additionally restarts at zero on every generated line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningTotals {
    generated_column: i64,
    source_index: i64,
    original_line: i64,
    original_column: i64,
    name_index: i64,
}

impl RunningTotals {
    /// Reset the per-line total at the start of a generated line.
    pub fn start_line(&mut self) {
        self.generated_column = 0;
    }

    /// Apply a record's deltas and return the resulting absolute positions.
    ///
    /// Fields absent from `deltas` stay absent in the result and leave their
    /// total untouched.
    pub fn apply(&mut self, deltas: &Deltas) -> Positions {
        let positions = Positions {
            generated_column: advance(&mut self.generated_column, deltas.generated_column),
            source_index: advance(&mut self.source_index, deltas.source_index),
            original_line: advance(&mut self.original_line, deltas.original_line),
            original_column: advance(&mut self.original_column, deltas.original_column),
            name_index: advance(&mut self.name_index, deltas.name_index),
        };
        trace!(?deltas, ?positions, "applied segment deltas");
        positions
    }
}

fn advance(total: &mut i64, delta: Option<i32>) -> Option<i64> {
    let delta = delta?;
    *total = total.saturating_add(i64::from(delta));
    Some(*total)
}
