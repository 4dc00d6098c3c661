//! Repeatable nested sections in form drafts (tags, curriculum modules,
//! mentors, FAQs, training options, availability slots, ...).
//!
//! Every section follows the same pattern: `add` appends a blank row,
//! `update` edits one row by index, `remove` drops one row by index. Rows
//! keep insertion order. Blank placeholder rows are dropped on submit.

/// A row that may be an untouched placeholder.
pub trait BlankRow {
    /// Whether the row carries no meaningful content and should be dropped
    /// from a submitted payload.
    fn is_blank(&self) -> bool;
}

impl BlankRow for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

/// An ordered list of rows edited in place by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeatable<T> {
    rows: Vec<T>,
}

impl<T> Default for Repeatable<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> Repeatable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    /// Append `row`, returning its index.
    pub fn push(&mut self, row: T) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Apply `edit` to the row at `index`. Out-of-range indices are ignored
    /// and reported as `false`.
    pub fn update(&mut self, index: usize, edit: impl FnOnce(&mut T)) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                edit(row);
                true
            }
            None => false,
        }
    }

    /// Remove the row at `index`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }
}

impl<T: Default> Repeatable<T> {
    /// Append a blank template row, returning its index.
    pub fn add(&mut self) -> usize {
        self.push(T::default())
    }
}

impl<T: BlankRow> Repeatable<T> {
    /// Consume the section, keeping only rows with content.
    pub fn into_filled(self) -> Vec<T> {
        self.rows.into_iter().filter(|row| !row.is_blank()).collect()
    }
}

impl<T: BlankRow + Clone> Repeatable<T> {
    /// Rows with content, in insertion order.
    pub fn filled(&self) -> Vec<T> {
        self.rows
            .iter()
            .filter(|row| !row.is_blank())
            .cloned()
            .collect()
    }
}

impl<T> From<Vec<T>> for Repeatable<T> {
    fn from(rows: Vec<T>) -> Self {
        Self::from_rows(rows)
    }
}
