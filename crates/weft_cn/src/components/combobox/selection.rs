//! Controlled vs. uncontrolled selection
//!
//! The committed selection has two inputs: a value pinned by the owner
//! (controlled mode) and a value owned by the component (uncontrolled mode).
//! The pin wins while present. A commit writes the owned value and releases
//! the pin; the owner re-pins by supplying a new value.

/// Reconciled selection state
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<T> {
    pinned: Option<Option<T>>,
    owned: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            pinned: None,
            owned: None,
        }
    }
}

impl<T> Selection<T> {
    /// Uncontrolled selection starting at `initial`
    pub fn uncontrolled(initial: Option<T>) -> Self {
        Self {
            pinned: None,
            owned: initial,
        }
    }

    /// Controlled selection pinned to `value`
    pub fn controlled(value: Option<T>) -> Self {
        Self {
            pinned: Some(value),
            owned: None,
        }
    }

    /// The effective selection
    pub fn current(&self) -> Option<&T> {
        match self.pinned {
            Some(ref pinned) => pinned.as_ref(),
            None => self.owned.as_ref(),
        }
    }

    /// Whether the owner currently pins the value
    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }

    /// Record a commit made by the component itself
    pub fn commit(&mut self, value: Option<T>) {
        self.pinned = None;
        self.owned = value;
    }

    /// Record a value supplied by the owner
    pub fn pin(&mut self, value: Option<T>) {
        self.pinned = Some(value);
    }
}
