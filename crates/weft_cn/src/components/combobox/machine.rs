//! Selection state machine
//!
//! Owns the menu state, the committed selection, the query text and the
//! highlight. Every public method is one transition; side effects for the
//! outside world (notifications, registry updates) are queued in [`Effects`]
//! and drained by the controller once the transition is complete.

use weft_core::fsm::{menu_events, MenuState, StateTransitions};

use super::highlight::HighlightTracker;
use super::matcher::{Candidate, CandidateSet, ItemMatcher, MatchMode};
use super::selection::Selection;
use super::{ChangeEvent, ItemEqualsFn};

/// Behavioral props of a combobox
pub(crate) struct ComboboxProps<T> {
    pub matcher: ItemMatcher<T>,
    pub item_equals: ItemEqualsFn<T>,
    pub allow_custom_value: bool,
    pub typeahead: bool,
    pub disabled: bool,
    pub read_only: bool,
}

/// Outside-world effects produced by a transition
pub(crate) struct Effects<T> {
    /// Selection change notification
    pub change: Option<ChangeEvent<T>>,
    /// Query text after a user edit
    pub input_change: Option<String>,
    /// Final menu state if the menu opened or closed
    pub menu: Option<MenuState>,
}

impl<T> Default for Effects<T> {
    fn default() -> Self {
        Self {
            change: None,
            input_change: None,
            menu: None,
        }
    }
}

pub(crate) struct ComboboxMachine<T> {
    items: Vec<T>,
    props: ComboboxProps<T>,
    menu: MenuState,
    selection: Selection<T>,
    query: String,
    /// Query edited by the user since the last settle point
    dirty: bool,
    candidates: CandidateSet,
    highlight: HighlightTracker,
    focused: bool,
    /// Set by Backspace so the next Tab will not autocomplete. Typing a
    /// character, `set_input_value`, a commit, a clear or a blur lifts it.
    suppress_typeahead: bool,
    /// Last committed free-text value
    custom_value: Option<String>,
    effects: Effects<T>,
}

impl<T: Clone> ComboboxMachine<T> {
    pub fn new(items: Vec<T>, props: ComboboxProps<T>, selection: Selection<T>) -> Self {
        let mut machine = Self {
            items,
            props,
            menu: MenuState::Closed,
            selection,
            query: String::new(),
            dirty: false,
            candidates: CandidateSet::new(),
            highlight: HighlightTracker::new(),
            focused: false,
            suppress_typeahead: false,
            custom_value: None,
            effects: Effects::default(),
        };
        machine.query = machine.selection_label();
        machine.recompute();
        machine
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    pub fn is_read_only(&self) -> bool {
        self.props.read_only
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selection.current()
    }

    pub fn custom_value(&self) -> Option<&str> {
        self.custom_value.as_deref()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlight.get()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index of the selected item in the item list
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selection.current()?;
        self.items
            .iter()
            .position(|item| (self.props.item_equals)(item, selected))
    }

    /// Typeahead completion the next Tab would accept
    pub fn typeahead_suggestion(&self) -> Option<Candidate> {
        if !self.props.typeahead || !self.dirty || self.suppress_typeahead || !self.is_open() {
            return None;
        }
        self.props
            .matcher
            .typeahead_suggestion(&self.items, &self.candidates, &self.query)
    }

    pub fn take_effects(&mut self) -> Effects<T> {
        std::mem::take(&mut self.effects)
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    fn is_interactive(&self) -> bool {
        !self.props.disabled && !self.props.read_only
    }

    fn selection_label(&self) -> String {
        self.selection
            .current()
            .map(|item| self.props.matcher.label(item))
            .unwrap_or_default()
    }

    fn same_selection(&self, a: Option<&T>, b: Option<&T>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => (self.props.item_equals)(a, b),
            _ => false,
        }
    }

    /// Rebuild the candidate set and highlight from the current query
    ///
    /// A clean query is the selection's own label, so it does not filter.
    fn recompute(&mut self) {
        let filter_query = if self.dirty { self.query.as_str() } else { "" };
        self.candidates = self
            .props
            .matcher
            .match_items(&self.items, filter_query, MatchMode::Filter);

        if !self.is_open() {
            self.highlight.clear();
        } else if self.dirty {
            self.highlight.set_from_query(&self.candidates, &self.query);
        } else {
            let selected = self.selected_index();
            self.highlight.set_to_item(&self.candidates, selected);
        }
    }

    fn set_menu(&mut self, event: u32) -> bool {
        let changed = self.menu.transition(event);
        if changed {
            tracing::debug!(state = ?self.menu, "combobox menu transition");
            self.effects.menu = Some(self.menu);
        }
        changed
    }

    fn open_menu(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        if self.set_menu(menu_events::OPEN) {
            self.recompute();
        }
        true
    }

    fn close_menu(&mut self) {
        self.set_menu(menu_events::CLOSE);
        self.highlight.clear();
    }

    /// Apply the settle rule to an edited query
    ///
    /// Without custom values, a query that equals no item's label reverts to
    /// the selection's label.
    fn settle_query(&mut self) {
        if !self.dirty {
            return;
        }
        let matches_item = self
            .items
            .iter()
            .any(|item| self.props.matcher.label(item) == self.query);
        if !self.props.allow_custom_value && !matches_item {
            tracing::trace!(query = %self.query, "discarding unmatched query");
            self.query = self.selection_label();
        }
        self.dirty = false;
        self.recompute();
    }

    /// Common tail of every user edit
    fn edited(&mut self) {
        self.dirty = true;
        self.effects.input_change = Some(self.query.clone());
        self.set_menu(menu_events::OPEN);
        self.recompute();
        tracing::trace!(query = %self.query, candidates = self.candidates.len(), "query edited");
    }

    fn commit_item(&mut self, item_index: usize) {
        let Some(item) = self.items.get(item_index).cloned() else {
            return;
        };
        let changed =
            self.custom_value.is_some() || !self.same_selection(self.selection.current(), Some(&item));
        let label = self.props.matcher.label(&item);

        self.selection.commit(Some(item.clone()));
        self.custom_value = None;
        self.query = label.clone();
        self.dirty = false;
        self.suppress_typeahead = false;
        self.close_menu();
        self.recompute();

        tracing::debug!(item_index, changed, "combobox commit");
        if changed {
            self.effects.change = Some(ChangeEvent {
                selected_item: Some(item),
                input_value: label,
            });
        }
    }

    fn commit_custom(&mut self) {
        let text = self.query.clone();
        let changed =
            self.selection.current().is_some() || self.custom_value.as_deref() != Some(text.as_str());

        self.selection.commit(None);
        self.custom_value = Some(text.clone());
        self.dirty = false;
        self.suppress_typeahead = false;
        self.close_menu();
        self.recompute();

        tracing::debug!(value = %text, changed, "combobox custom value commit");
        if changed {
            self.effects.change = Some(ChangeEvent {
                selected_item: None,
                input_value: text,
            });
        }
    }

    // =========================================================================
    // FOCUS & MENU
    // =========================================================================

    pub fn focus(&mut self) {
        if self.focused {
            return;
        }
        self.focused = true;
        self.open_menu();
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.suppress_typeahead = false;
        self.close_menu();
        self.settle_query();
    }

    /// Closed because another menu opened
    pub fn dismiss(&mut self) {
        tracing::debug!("combobox menu dismissed by another menu");
        self.blur();
    }

    /// Click on the input itself
    ///
    /// Opens whenever the input is editable, even if it already has focus
    /// (after a commit, or after being re-enabled).
    pub fn open(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.focused = true;
        self.open_menu()
    }

    /// Click on the toggle (chevron) control
    pub fn toggle(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        if self.is_open() {
            self.close_menu();
            self.settle_query();
        } else {
            self.focused = true;
            self.open_menu();
        }
        true
    }

    /// Alt+ArrowDown: open, keeping the highlight on the selection
    pub fn alt_open(&mut self) -> bool {
        if !self.open_menu() {
            return false;
        }
        let selected = self.selected_index();
        self.highlight.set_to_item(&self.candidates, selected);
        true
    }

    /// Alt+ArrowUp: close without touching selection or query
    pub fn alt_close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close_menu();
        true
    }

    pub fn escape(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close_menu();
        self.settle_query();
        true
    }

    // =========================================================================
    // QUERY EDITING
    // =========================================================================

    pub fn text_input(&mut self, c: char) -> bool {
        if !self.is_interactive() || c.is_control() {
            return false;
        }
        self.query.push(c);
        self.suppress_typeahead = false;
        self.edited();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        if self.query.pop().is_none() {
            return true;
        }
        self.suppress_typeahead = true;
        self.edited();
        true
    }

    pub fn set_input_value(&mut self, text: &str) -> bool {
        if !self.is_interactive() {
            return false;
        }
        if self.query == text {
            return true;
        }
        self.query = text.to_string();
        self.suppress_typeahead = false;
        self.edited();
        true
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    pub fn arrow(&mut self, step: isize) -> bool {
        if !self.is_interactive() {
            return false;
        }
        if !self.is_open() {
            self.open_menu();
            if self.highlight.get().is_none() {
                self.highlight.advance(&self.candidates, step);
            }
            return true;
        }
        self.highlight.advance(&self.candidates, step);
        true
    }

    pub fn home(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.highlight.first(&self.candidates);
        true
    }

    pub fn end(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.highlight.last(&self.candidates);
        true
    }

    // =========================================================================
    // COMMIT
    // =========================================================================

    /// Enter key
    ///
    /// Commits the highlighted (or exactly matching) candidate, or the query
    /// as a custom value. Without a candidate and without custom values the
    /// menu stays open.
    pub fn enter(&mut self) -> bool {
        if !self.is_interactive() || !self.is_open() {
            return false;
        }

        if let Some(pos) = self.highlight.get() {
            if let Some(candidate) = self.candidates.get(pos) {
                if !candidate.disabled {
                    let item_index = candidate.item_index;
                    self.commit_item(item_index);
                }
            }
            return true;
        }

        let query_lower = self.query.to_lowercase();
        let exact = self
            .candidates
            .iter()
            .find(|c| !c.disabled && c.label.to_lowercase() == query_lower)
            .map(|c| c.item_index);
        match exact {
            Some(item_index) => self.commit_item(item_index),
            None if self.props.allow_custom_value && !self.query.is_empty() => {
                self.commit_custom()
            }
            None => tracing::trace!("enter without candidate, menu stays open"),
        }
        true
    }

    /// Click on a rendered option row
    pub fn click_option(&mut self, position: usize) -> bool {
        if !self.is_interactive() || !self.is_open() {
            return false;
        }
        match self.candidates.get(position) {
            Some(candidate) if !candidate.disabled => {
                let item_index = candidate.item_index;
                self.commit_item(item_index);
                true
            }
            _ => false,
        }
    }

    /// Tab key: accept the typeahead suggestion, then let focus move on
    pub fn tab(&mut self) -> bool {
        let completion = if self.is_interactive() {
            self.typeahead_suggestion().map(|c| c.label)
        } else {
            None
        };
        let completed = completion.is_some();
        if let Some(label) = completion {
            tracing::debug!(from = %self.query, to = %label, "typeahead completion");
            self.query = label;
            self.effects.input_change = Some(self.query.clone());
            self.recompute();
        }
        self.blur();
        completed
    }

    /// Clear control
    pub fn clear(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        let had_text = !self.query.is_empty();

        self.selection.commit(None);
        self.custom_value = None;
        self.query.clear();
        self.dirty = false;
        self.suppress_typeahead = false;
        self.close_menu();
        self.recompute();

        tracing::debug!("combobox cleared");
        if had_text {
            self.effects.input_change = Some(String::new());
        }
        self.effects.change = Some(ChangeEvent {
            selected_item: None,
            input_value: String::new(),
        });
        true
    }

    // =========================================================================
    // OWNER UPDATES
    // =========================================================================

    /// Selection supplied by the owner
    ///
    /// An owner echoing the current selection (typically in response to our
    /// own notification) is a no-op.
    pub fn set_selected_item(&mut self, value: Option<T>) {
        let differs = !self.same_selection(self.selection.current(), value.as_ref());
        self.selection.pin(value.clone());
        if !differs {
            return;
        }

        self.query = self.selection_label();
        self.dirty = false;
        self.custom_value = None;
        self.recompute();

        tracing::debug!(has_value = value.is_some(), "combobox selection replaced by owner");
        self.effects.change = Some(ChangeEvent {
            selected_item: value,
            input_value: self.query.clone(),
        });
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.recompute();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.props.disabled = disabled;
        if !self.is_interactive() {
            self.close_menu();
        }
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.props.read_only = read_only;
        if !self.is_interactive() {
            self.close_menu();
        }
    }
}
