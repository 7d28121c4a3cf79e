//! Item matching: which items are candidates for a query

use std::sync::Arc;

use smallvec::SmallVec;

use super::{ComboboxItem, ItemDisabledFn, ItemToStringFn, ShouldFilterItemFn};

/// How items are matched against the query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Keep items accepted by the filter predicate (substring by default)
    #[default]
    Filter,
    /// Keep items whose display string starts with the query
    Typeahead,
}

/// An item that passed the matcher
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Index into the caller's item list
    pub item_index: usize,
    /// Display string of the item
    pub label: String,
    /// Disabled candidates are listed but never highlighted or committed
    pub disabled: bool,
}

/// Ordered candidates for the current query
pub type CandidateSet = SmallVec<[Candidate; 16]>;

/// Case-insensitive substring match, the default filter
pub fn contains_ignore_case(label: &str, query: &str) -> bool {
    query.is_empty() || label.to_lowercase().contains(&query.to_lowercase())
}

/// Case-insensitive prefix match used for typeahead
pub fn starts_with_ignore_case(label: &str, query: &str) -> bool {
    !query.is_empty() && label.to_lowercase().starts_with(&query.to_lowercase())
}

/// Matches items against a query using caller-supplied capabilities
pub struct ItemMatcher<T> {
    item_to_string: ItemToStringFn<T>,
    is_disabled: ItemDisabledFn<T>,
    should_filter_item: Option<ShouldFilterItemFn<T>>,
}

impl<T> Clone for ItemMatcher<T> {
    fn clone(&self) -> Self {
        Self {
            item_to_string: Arc::clone(&self.item_to_string),
            is_disabled: Arc::clone(&self.is_disabled),
            should_filter_item: self.should_filter_item.clone(),
        }
    }
}

impl<T: ComboboxItem> Default for ItemMatcher<T> {
    fn default() -> Self {
        Self::new(
            Arc::new(|item: &T| item.item_to_string()),
            Arc::new(|item: &T| item.is_disabled()),
        )
    }
}

impl<T> ItemMatcher<T> {
    /// Create a matcher from a projector and a disabled check
    pub fn new(item_to_string: ItemToStringFn<T>, is_disabled: ItemDisabledFn<T>) -> Self {
        Self {
            item_to_string,
            is_disabled,
            should_filter_item: None,
        }
    }

    /// Replace the display-string projector
    pub fn with_item_to_string(mut self, f: ItemToStringFn<T>) -> Self {
        self.item_to_string = f;
        self
    }

    /// Replace the disabled check
    pub fn with_is_disabled(mut self, f: ItemDisabledFn<T>) -> Self {
        self.is_disabled = f;
        self
    }

    /// Use a custom filter predicate instead of substring matching
    pub fn with_filter(mut self, f: ShouldFilterItemFn<T>) -> Self {
        self.should_filter_item = Some(f);
        self
    }

    /// Display string of an item
    pub fn label(&self, item: &T) -> String {
        (self.item_to_string)(item)
    }

    /// Whether an item is disabled
    pub fn is_disabled(&self, item: &T) -> bool {
        (self.is_disabled)(item)
    }

    /// Compute the ordered candidates for `query`
    ///
    /// In filter mode an empty query keeps every item; in typeahead mode it
    /// keeps none.
    pub fn match_items(&self, items: &[T], query: &str, mode: MatchMode) -> CandidateSet {
        items
            .iter()
            .enumerate()
            .filter_map(|(item_index, item)| {
                let label = self.label(item);
                let keep = match mode {
                    MatchMode::Filter => match self.should_filter_item {
                        Some(ref filter) => query.is_empty() || filter(item, query),
                        None => contains_ignore_case(&label, query),
                    },
                    MatchMode::Typeahead => starts_with_ignore_case(&label, query),
                };
                keep.then(|| Candidate {
                    item_index,
                    label,
                    disabled: self.is_disabled(item),
                })
            })
            .collect()
    }

    /// Typeahead completion for `query`
    ///
    /// The first enabled prefix match (typeahead mode) that is also one of
    /// the current filter `candidates`. Both lists keep item order, so this
    /// is the first prefix match in filter order.
    pub fn typeahead_suggestion(
        &self,
        items: &[T],
        candidates: &[Candidate],
        query: &str,
    ) -> Option<Candidate> {
        self.match_items(items, query, MatchMode::Typeahead)
            .into_iter()
            .find(|prefixed| {
                !prefixed.disabled
                    && candidates
                        .iter()
                        .any(|c| c.item_index == prefixed.item_index)
            })
    }
}
