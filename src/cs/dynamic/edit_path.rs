//! Edit path reconstruction by backtracking through a completed [`CostTable`].
//!
//! The walk starts at the bottom-right cell `(m, n)` and steps toward `(0, 0)`,
//! emitting one [`EditAction`] per step. Actions are named after the prefix
//! that shrinks during the backward walk:
//!
//! - [`EditAction::Remove`] steps to `(i, j - 1)`, consuming one target element.
//! - [`EditAction::Add`] steps to `(i - 1, j)`, consuming one source element.
//! - [`EditAction::Replace`] and [`EditAction::Keep`] step diagonally.
//!
//! When two or more predecessor cells share the minimum, the diagonal step is
//! taken. `Remove` and `Add` are only chosen when their predecessor is strictly
//! cheaper than both others.

use std::fmt;

use log::{debug, trace};

use crate::cs::dynamic::edit_distance::CostTable;
use crate::cs::string::SequenceView;
use crate::error::{Error, Result};

/// One step of an edit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    /// Consume one source element that has no counterpart in the target.
    Add,
    /// Consume one target element that has no counterpart in the source.
    Remove,
    /// Substitute a source element with a different target element.
    Replace,
    /// Source and target elements match.
    Keep,
    /// Terminal marker for streaming consumers. Never stored in an [`EditPath`].
    Done,
}

impl EditAction {
    /// Whether the action costs one edit.
    pub fn is_edit(self) -> bool {
        matches!(self, EditAction::Add | EditAction::Remove | EditAction::Replace)
    }

    pub fn name(self) -> &'static str {
        match self {
            EditAction::Add => "ADD",
            EditAction::Remove => "REMOVE",
            EditAction::Replace => "REPLACE",
            EditAction::Keep => "KEEP",
            EditAction::Done => "DONE",
        }
    }
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-action totals of an edit path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionCounts {
    pub add: usize,
    pub remove: usize,
    pub replace: usize,
    pub keep: usize,
}

/// An ordered sequence of edit actions, stored in backward emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPath {
    actions: Vec<EditAction>,
}

impl EditPath {
    /// Walks `table` from `(m, n)` back to `(0, 0)`.
    ///
    /// `source` and `target` must be the sequences the table was built from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableMismatch`] if the table dimensions do not match
    /// the sequence lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use levenshtein::cs::string::SequenceView;
    /// use levenshtein::{CostTable, EditAction, EditPath};
    ///
    /// let source: Vec<char> = "apple".chars().collect();
    /// let target: Vec<char> = "appled".chars().collect();
    /// let (source, target) = (SequenceView::new(&source), SequenceView::new(&target));
    ///
    /// let table = CostTable::build(source, target).unwrap();
    /// let path = EditPath::reconstruct(&table, source, target).unwrap();
    ///
    /// assert_eq!(path.actions()[0], EditAction::Remove);
    /// assert_eq!(path.edit_count(), 1);
    /// ```
    pub fn reconstruct<T: PartialEq>(
        table: &CostTable,
        source: SequenceView<'_, T>,
        target: SequenceView<'_, T>,
    ) -> Result<Self> {
        if table.rows() != source.len() + 1 || table.columns() != target.len() + 1 {
            return Err(Error::TableMismatch {
                rows: table.rows(),
                columns: table.columns(),
                source_len: source.len(),
                target_len: target.len(),
            });
        }

        let mut i = source.len();
        let mut j = target.len();
        let mut actions = Vec::with_capacity(i + j);

        while i > 0 && j > 0 {
            let remove = table.at(i, j - 1);
            let add = table.at(i - 1, j);
            let replace = table.at(i - 1, j - 1);

            let action = if remove < add && remove < replace {
                j -= 1;
                EditAction::Remove
            } else if add < remove && add < replace {
                i -= 1;
                EditAction::Add
            } else {
                let action = if source[i - 1] == target[j - 1] {
                    EditAction::Keep
                } else {
                    EditAction::Replace
                };
                i -= 1;
                j -= 1;
                action
            };

            trace!("backtrace step {} -> ({}, {})", action, i, j);
            actions.push(action);
        }

        // At most one of these runs: one side is already exhausted.
        actions.extend(std::iter::repeat(EditAction::Remove).take(j));
        actions.extend(std::iter::repeat(EditAction::Add).take(i));

        debug!(
            "reconstructed edit path of {} steps for distance {}",
            actions.len(),
            table.distance()
        );
        Ok(Self { actions })
    }

    /// Actions in backward emission order, from `(m, n)` toward `(0, 0)`.
    pub fn actions(&self) -> &[EditAction] {
        &self.actions
    }

    /// Actions in forward order, as they apply from source to target.
    pub fn forward(&self) -> impl DoubleEndedIterator<Item = EditAction> + '_ {
        self.actions.iter().rev().copied()
    }

    /// Backward emission order followed by a single [`EditAction::Done`].
    pub fn iter_with_done(&self) -> impl Iterator<Item = EditAction> + '_ {
        self.actions
            .iter()
            .copied()
            .chain(std::iter::once(EditAction::Done))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of actions that are not [`EditAction::Keep`].
    pub fn edit_count(&self) -> usize {
        self.actions.iter().filter(|a| a.is_edit()).count()
    }

    pub fn counts(&self) -> ActionCounts {
        let mut counts = ActionCounts::default();
        for action in &self.actions {
            match action {
                EditAction::Add => counts.add += 1,
                EditAction::Remove => counts.remove += 1,
                EditAction::Replace => counts.replace += 1,
                EditAction::Keep => counts.keep += 1,
                EditAction::Done => {}
            }
        }
        counts
    }

    /// Replays the path in forward order against `source` and returns the
    /// produced sequence.
    ///
    /// Returns `None` if the path walks past the end of either input, which
    /// only happens when the path was built from different sequences.
    pub fn apply<T: Clone>(
        &self,
        source: SequenceView<'_, T>,
        target: SequenceView<'_, T>,
    ) -> Option<Vec<T>> {
        let mut output = Vec::with_capacity(target.len());
        let (mut i, mut j) = (0, 0);

        for action in self.forward() {
            match action {
                EditAction::Keep => {
                    output.push(source.get(i)?.clone());
                    i += 1;
                    j += 1;
                }
                EditAction::Replace => {
                    source.get(i)?;
                    output.push(target.get(j)?.clone());
                    i += 1;
                    j += 1;
                }
                EditAction::Remove => {
                    output.push(target.get(j)?.clone());
                    j += 1;
                }
                EditAction::Add => {
                    source.get(i)?;
                    i += 1;
                }
                EditAction::Done => break,
            }
        }

        (i == source.len() && j == target.len()).then_some(output)
    }
}

impl fmt::Display for EditPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in self.forward() {
            write!(f, "- {} -", action)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EditPath {
    type Item = &'a EditAction;
    type IntoIter = std::slice::Iter<'a, EditAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Builds the cost table for two sequence views and reconstructs an edit path.
pub fn edit_path<T: PartialEq>(
    source: SequenceView<'_, T>,
    target: SequenceView<'_, T>,
) -> Result<EditPath> {
    let table = CostTable::build(source, target)?;
    EditPath::reconstruct(&table, source, target)
}

/// Computes an edit path between two string slices, compared by `char`.
///
/// # Examples
///
/// ```
/// use levenshtein::{compute_edit_path, EditAction};
///
/// let path = compute_edit_path("apple", "apdle").unwrap();
/// assert_eq!(path.edit_count(), 1);
/// assert_eq!(path.actions()[2], EditAction::Replace);
/// assert_eq!(path.to_string(), "- KEEP -- KEEP -- REPLACE -- KEEP -- KEEP -");
/// ```
pub fn compute_edit_path(source: &str, target: &str) -> Result<EditPath> {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    edit_path(SequenceView::new(&source), SequenceView::new(&target))
}
