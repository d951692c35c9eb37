//! Borrowed, bounds-checked views over a sequence of elements.

use std::fmt;
use std::ops::Index;

/// An immutable view over a contiguous run of elements.
///
/// The view borrows its buffer and never copies it, so views are cheap to
/// create and throw away. All shrinking operations clamp at the empty view
/// instead of panicking.
///
/// # Examples
///
/// ```
/// use levenshtein::cs::string::SequenceView;
///
/// let chars: Vec<char> = "apple".chars().collect();
/// let view = SequenceView::new(&chars);
///
/// assert_eq!(view.len(), 5);
/// assert_eq!(view.last(), Some(&'e'));
/// assert_eq!(view.drop_last().last(), Some(&'l'));
/// assert!(view.truncate_from_end(10).is_empty());
/// ```
pub struct SequenceView<'a, T> {
    data: &'a [T],
}

impl<'a, T> SequenceView<'a, T> {
    /// Creates a view over the whole of `data`.
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// Creates a view with no elements.
    pub fn empty() -> Self {
        Self { data: &[] }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the last element, or `None` for an empty view.
    pub fn last(&self) -> Option<&'a T> {
        self.data.last()
    }

    /// Returns the element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.data.get(index)
    }

    /// Returns the view of the first `len - k` elements.
    ///
    /// Asking for more elements than the view holds yields the empty view.
    pub fn truncate_from_end(&self, k: usize) -> Self {
        let end = self.data.len().saturating_sub(k);
        Self {
            data: &self.data[..end],
        }
    }

    /// Returns the view without its last element.
    pub fn drop_last(&self) -> Self {
        self.truncate_from_end(1)
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }
}

// Manual impls so views of non-`Copy` elements are still `Copy`.
impl<T> Clone for SequenceView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SequenceView<'_, T> {}

impl<T> Default for SequenceView<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for SequenceView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for SequenceView<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for SequenceView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data).finish()
    }
}

impl<T> Index<usize> for SequenceView<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T> From<&'a [T]> for SequenceView<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T> From<&'a Vec<T>> for SequenceView<'a, T> {
    fn from(data: &'a Vec<T>) -> Self {
        Self::new(data.as_slice())
    }
}

impl<'a> From<&'a str> for SequenceView<'a, u8> {
    fn from(data: &'a str) -> Self {
        Self::new(data.as_bytes())
    }
}

impl<'a, T> IntoIterator for SequenceView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_length_and_last() {
        let data = chars("apple");
        let view = SequenceView::new(&data);
        assert_eq!(view.len(), 5);
        assert!(!view.is_empty());
        assert_eq!(view.last(), Some(&'e'));
        assert_eq!(view[0], 'a');
        assert_eq!(view.get(5), None);
    }

    #[test]
    fn test_empty_view() {
        let view: SequenceView<'_, char> = SequenceView::empty();
        assert_eq!(view.len(), 0);
        assert!(view.is_empty());
        assert_eq!(view.last(), None);
        assert_eq!(view.drop_last(), view);
    }

    #[test]
    fn test_truncate_from_end() {
        let data = chars("apple");
        let view = SequenceView::new(&data);
        assert_eq!(view.truncate_from_end(0), view);
        assert_eq!(view.drop_last().as_slice(), &chars("appl")[..]);
        assert_eq!(view.truncate_from_end(4).as_slice(), &['a']);
        assert!(view.truncate_from_end(5).is_empty());
    }

    #[test]
    fn test_truncate_clamps() {
        let data = chars("ab");
        let view = SequenceView::new(&data);
        assert!(view.truncate_from_end(3).is_empty());
        assert!(view.truncate_from_end(usize::MAX).is_empty());
    }

    #[test]
    fn test_views_share_the_buffer() {
        let data = chars("apple");
        let view = SequenceView::new(&data);
        let shorter = view.drop_last();
        assert!(std::ptr::eq(view.as_slice().as_ptr(), shorter.as_slice().as_ptr()));
    }

    #[test]
    fn test_byte_view_from_str() {
        let view = SequenceView::from("héllo");
        assert_eq!(view.len(), 6);
        assert_eq!(view.last(), Some(&b'o'));
    }

    #[test]
    fn test_non_copy_elements() {
        let words = vec![String::from("a"), String::from("b")];
        let view = SequenceView::from(&words);
        let copy = view;
        assert_eq!(view.len(), copy.len());
        assert_eq!(copy.iter().cloned().collect::<Vec<_>>(), words);
    }
}
