//! Highlight tracking: the keyboard-navigable candidate
//!
//! The highlight is a position in the current [`CandidateSet`], independent
//! of the committed selection. It is either unset or a valid position of an
//! enabled candidate.

use super::matcher::Candidate;

/// Tracks the highlighted candidate position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightTracker {
    index: Option<usize>,
}

impl HighlightTracker {
    /// Create a tracker with nothing highlighted
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted position, if any
    pub fn get(&self) -> Option<usize> {
        self.index
    }

    /// Clear the highlight
    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Recompute after the candidates changed for `query`
    ///
    /// An exact (case-insensitive) label match wins, otherwise the first
    /// enabled candidate, otherwise nothing.
    pub fn set_from_query(&mut self, candidates: &[Candidate], query: &str) -> Option<usize> {
        let query_lower = query.to_lowercase();
        let exact = candidates
            .iter()
            .position(|c| !c.disabled && c.label.to_lowercase() == query_lower);
        self.index = exact.or_else(|| first_enabled(candidates));
        self.index
    }

    /// Highlight the candidate for `item_index` (the current selection)
    pub fn set_to_item(&mut self, candidates: &[Candidate], item_index: Option<usize>) {
        self.index = item_index.and_then(|item_index| {
            candidates
                .iter()
                .position(|c| c.item_index == item_index && !c.disabled)
        });
    }

    /// Move to the next (`step > 0`) or previous enabled candidate, wrapping
    pub fn advance(&mut self, candidates: &[Candidate], step: isize) -> Option<usize> {
        let len = candidates.len();
        if len == 0 || candidates.iter().all(|c| c.disabled) {
            self.index = None;
            return None;
        }

        let forward = step >= 0;
        let mut pos = match self.index.filter(|&i| i < len) {
            Some(i) => i,
            // From nothing: +1 lands on the first, -1 on the last
            None if forward => len - 1,
            None => 0,
        };

        for _ in 0..len {
            pos = if forward {
                (pos + 1) % len
            } else if pos == 0 {
                len - 1
            } else {
                pos - 1
            };
            if !candidates[pos].disabled {
                break;
            }
        }

        tracing::trace!(from = ?self.index, to = pos, "highlight advanced");
        self.index = Some(pos);
        self.index
    }

    /// Highlight the first enabled candidate
    pub fn first(&mut self, candidates: &[Candidate]) -> Option<usize> {
        self.index = first_enabled(candidates);
        self.index
    }

    /// Highlight the last enabled candidate
    pub fn last(&mut self, candidates: &[Candidate]) -> Option<usize> {
        self.index = candidates.iter().rposition(|c| !c.disabled);
        self.index
    }
}

fn first_enabled(candidates: &[Candidate]) -> Option<usize> {
    candidates.iter().position(|c| !c.disabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(rows: &[(&str, bool)]) -> Vec<Candidate> {
        rows.iter()
            .enumerate()
            .map(|(i, (label, disabled))| Candidate {
                item_index: i * 10,
                label: label.to_string(),
                disabled: *disabled,
            })
            .collect()
    }

    #[test]
    fn test_set_from_query_prefers_exact_match() {
        let set = candidates(&[("Item 1", false), ("Item 10", false), ("item 1", false)]);
        let mut hl = HighlightTracker::new();
        // Case-insensitive exact match, first in order
        assert_eq!(hl.set_from_query(&set, "ITEM 1"), Some(0));
        assert_eq!(hl.set_from_query(&set, "Item 10"), Some(1));
        // No exact match: first candidate
        assert_eq!(hl.set_from_query(&set, "Item"), Some(0));
    }

    #[test]
    fn test_set_from_query_skips_disabled() {
        let set = candidates(&[("Item 2", true), ("Item 20", false)]);
        let mut hl = HighlightTracker::new();
        assert_eq!(hl.set_from_query(&set, "Item 2"), Some(1));

        let all_disabled = candidates(&[("Item 2", true)]);
        assert_eq!(hl.set_from_query(&all_disabled, "Item 2"), None);
        assert_eq!(hl.set_from_query(&[], "Item 2"), None);
    }

    #[test]
    fn test_advance_wraps_and_skips_disabled() {
        let set = candidates(&[("a", false), ("b", true), ("c", false)]);
        let mut hl = HighlightTracker::new();

        assert_eq!(hl.advance(&set, 1), Some(0));
        assert_eq!(hl.advance(&set, 1), Some(2));
        assert_eq!(hl.advance(&set, 1), Some(0));
        assert_eq!(hl.advance(&set, -1), Some(2));
        assert_eq!(hl.advance(&set, -1), Some(0));
    }

    #[test]
    fn test_advance_from_none_backwards_goes_to_last() {
        let set = candidates(&[("a", false), ("b", false), ("c", true)]);
        let mut hl = HighlightTracker::new();
        assert_eq!(hl.advance(&set, -1), Some(1));
    }

    #[test]
    fn test_advance_all_disabled_is_none() {
        let set = candidates(&[("a", true), ("b", true)]);
        let mut hl = HighlightTracker::new();
        assert_eq!(hl.advance(&set, 1), None);
        assert_eq!(hl.advance(&set, -1), None);
        assert_eq!(hl.get(), None);
    }

    #[test]
    fn test_set_to_item() {
        let set = candidates(&[("a", false), ("b", false), ("c", true)]);
        let mut hl = HighlightTracker::new();

        hl.set_to_item(&set, Some(10));
        assert_eq!(hl.get(), Some(1));

        // Disabled or missing selection leaves nothing highlighted
        hl.set_to_item(&set, Some(20));
        assert_eq!(hl.get(), None);
        hl.set_to_item(&set, None);
        assert_eq!(hl.get(), None);
    }

    #[test]
    fn test_first_last() {
        let set = candidates(&[("a", true), ("b", false), ("c", false), ("d", true)]);
        let mut hl = HighlightTracker::new();
        assert_eq!(hl.first(&set), Some(1));
        assert_eq!(hl.last(&set), Some(2));
        assert_eq!(hl.first(&[]), None);
    }
}
