use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Per-view table state: filter text, expanded rows and sorting. Each view
/// owns one in a signal.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<C> {
    pub filter: String,
    expanded: BTreeSet<String>,
    sort_column: C,
    descending: bool,
}

impl<C: Copy + PartialEq> TableState<C> {
    pub fn new(sort_column: C) -> Self {
        TableState {
            filter: String::new(),
            expanded: BTreeSet::new(),
            sort_column,
            descending: true,
        }
    }

    pub fn toggle_expanded(&mut self, key: &str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_string());
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Case-insensitive substring match against the filter; an empty filter
    /// matches everything.
    pub fn matches(&self, text: &str) -> bool {
        let filter = self.filter.trim();
        filter.is_empty() || text.to_lowercase().contains(&filter.to_lowercase())
    }

    /// Same column flips direction, a new column starts descending.
    pub fn toggle_sort(&mut self, column: C) {
        if self.sort_column == column {
            self.descending = !self.descending;
        } else {
            self.sort_column = column;
            self.descending = true;
        }
    }

    pub fn sort_column(&self) -> C {
        self.sort_column
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// Applies the current direction to an ascending comparison
    pub fn order(&self, ascending: Ordering) -> Ordering {
        if self.descending {
            ascending.reverse()
        } else {
            ascending
        }
    }

    /// Header arrow for `column`
    pub fn indicator(&self, column: C) -> &'static str {
        match (self.sort_column == column, self.is_descending()) {
            (false, _) => "",
            (true, true) => " ▼",
            (true, false) => " ▲",
        }
    }
}
