use std::fmt;

use log::{debug, warn};

use crate::cs::string::SequenceView;
use crate::error::{Error, Result};

/// Computes the Levenshtein (edit) distance between two string slices.
///
/// The Levenshtein distance is defined as the minimum number of single-character
/// edits (insertions, deletions, substitutions) required to change `a` into `b`.
/// Characters are Unicode scalar values, not bytes.
///
/// # Examples
///
/// ```
/// use levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("", ""), 0);
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("apple", "aplep"), 2);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    compute_distance(SequenceView::new(&a_chars), SequenceView::new(&b_chars))
}

/// Computes the edit distance between two sequence views without keeping
/// the full cost table.
///
/// Only two rows of the table are alive at a time, and the rows run along the
/// shorter input, so memory use is O(min(m, n)). Use [`CostTable::build`] when
/// the edit path is needed as well.
///
/// # Examples
///
/// ```
/// use levenshtein::cs::string::SequenceView;
/// use levenshtein::compute_distance;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 3, 4, 5];
/// assert_eq!(compute_distance(SequenceView::new(&a), SequenceView::new(&b)), 2);
/// ```
pub fn compute_distance<T: PartialEq>(
    source: SequenceView<'_, T>,
    target: SequenceView<'_, T>,
) -> usize {
    // If either sequence is empty, distance is the length of the other.
    if source.is_empty() {
        return target.len();
    } else if target.is_empty() {
        return source.len();
    }

    // The recurrence is symmetric, so swapping keeps the result.
    if source.len() < target.len() {
        rolling_distance(target.as_slice(), source.as_slice())
    } else {
        rolling_distance(source.as_slice(), target.as_slice())
    }
}

/// Standard dynamic programming pass with a single rolling pair of rows.
fn rolling_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let b_len = b.len();
    let mut prev_row = (0..=b_len).collect::<Vec<usize>>();
    let mut curr_row = vec![0; b_len + 1];

    for (i, ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);

            // The recurrence relation:
            //   curr_row[j+1] = minimum of:
            //     1) curr_row[j] + 1     (shrink b)
            //     2) prev_row[j+1] + 1   (shrink a)
            //     3) prev_row[j] + cost  (replace or keep)
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// The full `(m + 1) x (n + 1)` table of minimal edit costs between every
/// prefix of a source sequence (rows) and a target sequence (columns).
///
/// Cells live in one flat buffer addressed by `row * columns + column`.
///
/// # Examples
///
/// ```
/// use levenshtein::cs::string::SequenceView;
/// use levenshtein::CostTable;
///
/// let source: Vec<char> = "apple".chars().collect();
/// let target: Vec<char> = "apdle".chars().collect();
/// let table = CostTable::build(SequenceView::new(&source), SequenceView::new(&target)).unwrap();
///
/// assert_eq!(table.rows(), 6);
/// assert_eq!(table.columns(), 6);
/// assert_eq!(table.get(0, 3), Some(3));
/// assert_eq!(table.distance(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    cells: Vec<usize>,
    rows: usize,
    columns: usize,
}

impl CostTable {
    /// Builds the cost table for transforming `source` into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableTooLarge`] when the cell count overflows `usize`
    /// and [`Error::OutOfMemory`] when the buffer cannot be allocated.
    ///
    /// # Complexity
    /// * Time: O(m * n)
    /// * Space: O(m * n)
    pub fn build<T: PartialEq>(
        source: SequenceView<'_, T>,
        target: SequenceView<'_, T>,
    ) -> Result<Self> {
        let mut table = Self::allocate(source.len() + 1, target.len() + 1)?;

        // Base cases: an empty prefix on either side costs one edit per element.
        for i in 0..table.rows {
            table.set(i, 0, i);
        }
        for j in 0..table.columns {
            table.set(0, j, j);
        }

        for i in 1..table.rows {
            for j in 1..table.columns {
                let is_same = source[i - 1] == target[j - 1];

                let remove = table.at(i, j - 1) + 1;
                let add = table.at(i - 1, j) + 1;
                let replace = table.at(i - 1, j - 1) + usize::from(!is_same);

                table.set(i, j, remove.min(add).min(replace));
            }
        }

        debug!(
            "built {}x{} cost table, distance {}",
            table.rows,
            table.columns,
            table.distance()
        );
        Ok(table)
    }

    /// Builds the cost table for two string slices, compared by `char`.
    pub fn from_strs(source: &str, target: &str) -> Result<Self> {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        Self::build(SequenceView::new(&source), SequenceView::new(&target))
    }

    fn allocate(rows: usize, columns: usize) -> Result<Self> {
        let cells = rows
            .checked_mul(columns)
            .ok_or(Error::TableTooLarge { rows, columns })?;

        let mut buffer = Vec::new();
        buffer.try_reserve_exact(cells).map_err(|source| {
            warn!("cost table allocation of {} cells failed: {}", cells, source);
            Error::OutOfMemory { cells, source }
        })?;
        buffer.resize(cells, 0);

        Ok(Self {
            cells: buffer,
            rows,
            columns,
        })
    }

    #[inline]
    pub(crate) fn at(&self, row: usize, column: usize) -> usize {
        self.cells[row * self.columns + column]
    }

    #[inline]
    fn set(&mut self, row: usize, column: usize, value: usize) {
        self.cells[row * self.columns + column] = value;
    }

    /// Returns the cost of turning the first `row` source elements into the
    /// first `column` target elements, or `None` when out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(self.at(row, column))
        } else {
            None
        }
    }

    /// Returns one row of the table, or `None` when out of range.
    pub fn row(&self, row: usize) -> Option<&[usize]> {
        if row < self.rows {
            let start = row * self.columns;
            Some(&self.cells[start..start + self.columns])
        } else {
            None
        }
    }

    /// Number of rows, `m + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `n + 1`.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The edit distance between the full source and target.
    pub fn distance(&self) -> usize {
        self.at(self.rows - 1, self.columns - 1)
    }
}

impl fmt::Display for CostTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns) {
            for cell in row {
                write!(f, "{:<8} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Memoized recursive formulation of the same recurrence.
///
/// Much slower than [`CostTable::build`] and recursive in `m + n`; it exists
/// to cross-check the table builder.
#[cfg(any(test, feature = "reference"))]
pub mod reference {
    use crate::cs::string::SequenceView;

    /// Computes the edit distance by recursing on shrinking prefixes.
    pub fn memoized_distance<T: PartialEq>(
        source: SequenceView<'_, T>,
        target: SequenceView<'_, T>,
    ) -> usize {
        let columns = target.len() + 1;
        let mut memo = vec![None; (source.len() + 1) * columns];
        distance_rec(source, target, &mut memo, columns)
    }

    fn distance_rec<T: PartialEq>(
        source: SequenceView<'_, T>,
        target: SequenceView<'_, T>,
        memo: &mut [Option<usize>],
        columns: usize,
    ) -> usize {
        let slot = source.len() * columns + target.len();
        if let Some(result) = memo[slot] {
            return result;
        }

        let result = match (source.last(), target.last()) {
            (None, _) => target.len(),
            (_, None) => source.len(),
            (Some(x), Some(y)) if x == y => {
                distance_rec(source.drop_last(), target.drop_last(), memo, columns)
            }
            _ => {
                let remove = distance_rec(source, target.drop_last(), memo, columns);
                let add = distance_rec(source.drop_last(), target, memo, columns);
                let replace = distance_rec(source.drop_last(), target.drop_last(), memo, columns);
                1 + remove.min(add).min(replace)
            }
        };

        memo[slot] = Some(result);
        result
    }
}
