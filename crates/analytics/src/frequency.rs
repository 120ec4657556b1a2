use std::collections::HashMap;

/// An insertion-ordered group-by counter.
///
/// Each distinct key maps to a count accumulator. Keys remember the position at
/// which they were first seen, and [`FrequencyTable::into_ranked`] sorts by
/// descending count with a stable sort, so equal counts stay in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable<'a> {
    positions: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, usize)>,
}

impl<'a> FrequencyTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &'a str) {
        match self.positions.get(key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn count(&self, key: &str) -> usize {
        self.positions
            .get(key)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of keys added.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Consumes the table, returning `(key, count)` pairs ranked by count.
    pub fn into_ranked(self) -> Vec<(&'a str, usize)> {
        let mut ranked = self.entries;
        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.add(key);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_key() {
        let table: FrequencyTable = ["a", "b", "a", "c", "a"].into_iter().collect();
        assert_eq!(table.count("a"), 3);
        assert_eq!(table.count("b"), 1);
        assert_eq!(table.count("missing"), 0);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let table: FrequencyTable = ["z", "y", "x", "y", "w", "x"].into_iter().collect();
        assert_eq!(
            table.into_ranked(),
            vec![("y", 2), ("x", 2), ("z", 1), ("w", 1)]
        );
    }

    #[test]
    fn empty_table_ranks_to_nothing() {
        let table = FrequencyTable::new();
        assert_eq!(table.total(), 0);
        assert!(table.into_ranked().is_empty());
    }
}
