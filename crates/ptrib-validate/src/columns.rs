//! Column lookup and spreadsheet column letters.

use std::collections::HashMap;

/// Maps header names to zero-based column positions.
///
/// Built once per table. Lookups are exact (case and spacing matter). When a
/// header name repeats, the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    inner: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Create an index from an ordered header row.
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = HashMap::new();
        for (position, name) in headers.into_iter().enumerate() {
            inner.insert(name.as_ref().to_string(), position);
        }
        Self { inner }
    }

    /// Position of the named column, if present.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.inner.get(name).copied()
    }
}

/// Spreadsheet column letters for a zero-based index (0 -> A, 26 -> AA).
///
/// Bijective base-26: there is no zero digit, so every index maps to a
/// non-empty string.
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}
