//! Event-driven state transitions
//!
//! Small enum state machines implement [`StateTransitions`]: given an event
//! id they either return the next state or `None` when the event does not
//! apply in the current state.

use std::hash::Hash;

/// Trait for enum state types that react to event ids
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;

    /// Apply an event in place, returning whether the state changed
    fn transition(&mut self, event: u32) -> bool {
        match self.on_event(event) {
            Some(next) if next != *self => {
                *self = next;
                true
            }
            _ => false,
        }
    }
}

/// Event ids for popup menus
pub mod menu_events {
    /// Show the menu (Closed -> Open)
    pub const OPEN: u32 = 21001;
    /// Hide the menu (Open -> Closed)
    pub const CLOSE: u32 = 21002;
    /// Flip between open and closed
    pub const TOGGLE: u32 = 21003;
}

/// Open/closed state of a popup menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    /// Menu is hidden
    #[default]
    Closed,
    /// Menu is visible and its list is rendered
    Open,
}

impl MenuState {
    /// Check if the menu is visible
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }
}

impl StateTransitions for MenuState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use menu_events::*;
        use MenuState::*;

        match (self, event) {
            (Closed, OPEN) | (Closed, TOGGLE) => Some(Open),
            (Open, CLOSE) | (Open, TOGGLE) => Some(Closed),
            _ => None,
        }
    }
}
