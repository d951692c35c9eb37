//! Error types shared across the crate.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type for fallible table operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or walking a cost table.
///
/// Distance and path computations have no failure modes of their own. They fail
/// when the `(m + 1) x (n + 1)` table cannot be stored, or when a table is walked
/// with sequences it was not built from.
#[derive(Debug, Error)]
pub enum Error {
    /// The number of table cells does not fit in `usize`.
    #[error("cost table of {rows} x {columns} cells exceeds addressable memory")]
    TableTooLarge { rows: usize, columns: usize },

    /// The allocator refused the table buffer.
    #[error("failed to allocate cost table of {cells} cells")]
    OutOfMemory {
        cells: usize,
        #[source]
        source: TryReserveError,
    },

    /// A cost table was paired with sequences of different lengths.
    #[error("cost table is {rows} x {columns} but sequences have lengths {source_len} and {target_len}")]
    TableMismatch {
        rows: usize,
        columns: usize,
        source_len: usize,
        target_len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::TableTooLarge {
            rows: usize::MAX,
            columns: 2,
        };
        assert_eq!(
            err.to_string(),
            format!(
                "cost table of {} x 2 cells exceeds addressable memory",
                usize::MAX
            )
        );
    }

    #[test]
    fn test_out_of_memory_has_source() {
        use std::error::Error as _;

        let source = Vec::<usize>::new()
            .try_reserve_exact(usize::MAX)
            .unwrap_err();
        let err = Error::OutOfMemory { cells: 42, source };
        assert_eq!(err.to_string(), "failed to allocate cost table of 42 cells");
        assert!(err.source().is_some());
    }
}
