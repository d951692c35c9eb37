pub mod edit_distance;
pub mod edit_path;

// Re-export dynamic programming algorithms with descriptive names
pub use edit_distance::{compute_distance, levenshtein_distance, CostTable};
pub use edit_path::{compute_edit_path, edit_path, ActionCounts, EditAction, EditPath};
