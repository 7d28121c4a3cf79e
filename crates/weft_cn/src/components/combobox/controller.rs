//! Combobox controller
//!
//! Wraps the state machine behind a mutex so a host can drive it from event
//! handlers, keeps the shared menu registry in sync, and dispatches owner
//! callbacks after the machine lock has been released. Callbacks may
//! therefore call back into the same combobox (for example to echo a
//! controlled selection).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use weft_core::events::{key_codes, KeyEvent, KeyOutcome};
use weft_core::fsm::MenuState;
use weft_core::menu_state::{MenuDismiss, MenuId, MenuRegistry};

use super::machine::{ComboboxMachine, Effects};
use super::matcher::Candidate;
use super::view::{ComboboxView, Presentation};
use super::{ComboboxItem, OnChangeFn, OnInputChangeFn};

/// State shared between the controller and the menu registry
pub(crate) struct ComboboxShared<T> {
    machine: Mutex<ComboboxMachine<T>>,
    presentation: Presentation,
    on_change: Option<OnChangeFn<T>>,
    on_input_change: Option<OnInputChangeFn>,
}

impl<T: ComboboxItem> ComboboxShared<T> {
    pub(crate) fn new(
        machine: ComboboxMachine<T>,
        presentation: Presentation,
        on_change: Option<OnChangeFn<T>>,
        on_input_change: Option<OnInputChangeFn>,
    ) -> Self {
        Self {
            machine: Mutex::new(machine),
            presentation,
            on_change,
            on_input_change,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ComboboxMachine<T>> {
        self.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run owner callbacks for the queued effects
    fn dispatch(&self, effects: Effects<T>) {
        if let Some(text) = effects.input_change {
            if let Some(ref cb) = self.on_input_change {
                cb(&text);
            }
        }
        if let Some(event) = effects.change {
            tracing::debug!(input_value = %event.input_value, "combobox change");
            if let Some(ref cb) = self.on_change {
                cb(&event);
            }
        }
    }
}

impl<T: ComboboxItem> MenuDismiss for ComboboxShared<T> {
    fn dismiss_menu(&self) {
        let effects = {
            let mut machine = self.lock();
            machine.dismiss();
            machine.take_effects()
        };
        self.dispatch(effects);
    }
}

/// A mounted combobox
///
/// Created by [`ComboboxBuilder::build`](super::ComboboxBuilder::build).
/// Dropping it unregisters its menu from the registry.
pub struct Combobox<T: ComboboxItem> {
    shared: Arc<ComboboxShared<T>>,
    registry: Arc<MenuRegistry>,
    menu_id: MenuId,
}

impl<T: ComboboxItem> Combobox<T> {
    pub(crate) fn mount(shared: ComboboxShared<T>, registry: Arc<MenuRegistry>) -> Self {
        let shared = Arc::new(shared);
        let weak: Weak<dyn MenuDismiss> = Arc::downgrade(&shared) as Weak<dyn MenuDismiss>;
        let menu_id = registry.register(weak);
        tracing::debug!(?menu_id, "combobox mounted");
        Self {
            shared,
            registry,
            menu_id,
        }
    }

    /// Run one transition, then sync the registry and notify the owner
    fn apply<R>(&self, f: impl FnOnce(&mut ComboboxMachine<T>) -> R) -> R {
        let (result, mut effects) = {
            let mut machine = self.shared.lock();
            let result = f(&mut machine);
            (result, machine.take_effects())
        };

        match effects.menu.take() {
            Some(MenuState::Open) => self.registry.open(self.menu_id),
            Some(MenuState::Closed) => {
                self.registry.close(self.menu_id);
            }
            None => {}
        }

        self.shared.dispatch(effects);
        result
    }

    fn read<R>(&self, f: impl FnOnce(&ComboboxMachine<T>) -> R) -> R {
        let machine = self.shared.lock();
        f(&machine)
    }

    // =========================================================================
    // INPUT EVENTS
    // =========================================================================

    /// The input gained focus
    pub fn focus(&self) {
        self.apply(|m| m.focus());
    }

    /// The input lost focus (including a click outside)
    pub fn blur(&self) {
        self.apply(|m| m.blur());
    }

    /// A character was typed into the input
    pub fn text_input(&self, c: char) {
        self.apply(|m| m.text_input(c));
    }

    /// Type a string, one character event at a time
    pub fn type_text(&self, text: &str) {
        for c in text.chars() {
            self.text_input(c);
        }
    }

    /// Replace the input text as a single edit (paste, IME commit)
    pub fn set_input_value(&self, text: &str) {
        self.apply(|m| m.set_input_value(text));
    }

    /// Handle a key press
    pub fn key_down(&self, event: KeyEvent) -> KeyOutcome {
        let alt = event.modifiers.alt;
        let handled = match event.key_code {
            key_codes::ARROW_DOWN if alt => self.apply(|m| m.alt_open()),
            key_codes::ARROW_UP if alt => self.apply(|m| m.alt_close()),
            key_codes::ARROW_DOWN => self.apply(|m| m.arrow(1)),
            key_codes::ARROW_UP => self.apply(|m| m.arrow(-1)),
            key_codes::ENTER => self.apply(|m| m.enter()),
            key_codes::ESCAPE => self.apply(|m| m.escape()),
            key_codes::HOME => self.apply(|m| m.home()),
            key_codes::END => self.apply(|m| m.end()),
            key_codes::BACKSPACE => self.apply(|m| m.backspace()),
            key_codes::TAB => {
                self.apply(|m| m.tab());
                return KeyOutcome::MoveFocus;
            }
            _ => false,
        };

        tracing::trace!(key_code = event.key_code, handled, "combobox key");
        if handled {
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }

    /// A rendered option row was clicked
    ///
    /// `position` is the row index in the open menu. Returns whether an item
    /// was committed.
    pub fn click_option(&self, position: usize) -> bool {
        self.apply(|m| m.click_option(position))
    }

    /// The clear control was clicked
    pub fn click_clear(&self) {
        self.apply(|m| m.clear());
    }

    /// The input itself was clicked
    ///
    /// Opens the menu even when the input already has focus.
    pub fn click_input(&self) {
        self.apply(|m| m.open());
    }

    /// The toggle (chevron) control was clicked
    pub fn click_toggle(&self) {
        self.apply(|m| m.toggle());
    }

    // =========================================================================
    // OWNER UPDATES
    // =========================================================================

    /// Replace the selection from outside (controlled mode)
    ///
    /// Supplying the current selection again is a no-op.
    pub fn set_selected_item(&self, item: Option<T>) {
        self.apply(|m| m.set_selected_item(item));
    }

    /// Replace the item list
    pub fn set_items(&self, items: Vec<T>) {
        self.apply(|m| m.set_items(items));
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.apply(|m| m.set_disabled(disabled));
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.apply(|m| m.set_read_only(read_only));
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Current input text
    pub fn input_value(&self) -> String {
        self.read(|m| m.query().to_string())
    }

    /// Committed selection
    pub fn selected_item(&self) -> Option<T> {
        self.read(|m| m.selected_item().cloned())
    }

    /// Last committed free-text value, if the selection is a custom value
    pub fn custom_value(&self) -> Option<String> {
        self.read(|m| m.custom_value().map(str::to_string))
    }

    pub fn is_open(&self) -> bool {
        self.read(|m| m.is_open())
    }

    pub fn is_focused(&self) -> bool {
        self.read(|m| m.is_focused())
    }

    /// Highlighted position in [`candidates`](Self::candidates)
    pub fn highlighted_index(&self) -> Option<usize> {
        self.read(|m| m.highlighted())
    }

    /// Current candidates in display order
    pub fn candidates(&self) -> Vec<Candidate> {
        self.read(|m| m.candidates().to_vec())
    }

    pub fn items(&self) -> Vec<T> {
        self.read(|m| m.items().to_vec())
    }

    /// Snapshot for rendering
    pub fn view(&self) -> ComboboxView {
        self.read(|m| ComboboxView::snapshot(m, &self.shared.presentation))
    }

    /// Id of this combobox's menu in its registry
    pub fn menu_id(&self) -> MenuId {
        self.menu_id
    }
}

impl<T: ComboboxItem> Drop for Combobox<T> {
    fn drop(&mut self) {
        self.registry.unregister(self.menu_id);
        tracing::debug!(menu_id = ?self.menu_id, "combobox unmounted");
    }
}

impl<T: ComboboxItem + std::fmt::Debug> std::fmt::Debug for Combobox<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.read(|m| {
            f.debug_struct("Combobox")
                .field("menu_id", &self.menu_id)
                .field("input_value", &m.query())
                .field("selected_item", &m.selected_item())
                .field("is_open", &m.is_open())
                .finish()
        })
    }
}
