//! Sequence views and string helpers built on edit distance.

pub mod sequence_view;
pub mod suggest;

pub use sequence_view::SequenceView;
pub use suggest::{closest_match, distances, max_edit_distance};
