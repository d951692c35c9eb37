//! Levenshtein edit distance with deterministic edit path reconstruction.
//!
//! [`CostTable`] fills the `(m + 1) x (n + 1)` table of prefix costs and
//! [`EditPath`] walks it back from the bottom-right corner. When only the
//! distance is needed, [`levenshtein_distance`] keeps two rows instead of the
//! whole table.
//!
//! ```
//! use levenshtein::{compute_edit_path, levenshtein_distance};
//!
//! assert_eq!(levenshtein_distance("apple", "aplep"), 2);
//!
//! let path = compute_edit_path("apple", "aplep").unwrap();
//! assert_eq!(path.edit_count(), 2);
//! ```

pub mod cs;
pub mod error;

pub use cs::{dynamic, string};
pub use cs::dynamic::{
    compute_distance, compute_edit_path, edit_path, levenshtein_distance, ActionCounts,
    CostTable, EditAction, EditPath,
};
pub use error::{Error, Result};
