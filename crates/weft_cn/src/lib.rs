//! # Weft Component Library (weft_cn)
//!
//! Headless, state-driven components built on `weft_core` primitives.
//!
//! Components own their interaction state (focus, menus, selection, keyboard
//! navigation) and expose it as plain view snapshots. Drawing is left to the
//! host toolkit.
//!
//! - **Primitives**: `weft_core` provides key events, state transitions and the
//!   shared open-menu registry
//! - **Components**: `weft_cn` provides the component state machines and
//!   their fluent builders
//! - **Settings**: components can be declared in TOML via [`config`]
//!
//! ## Example
//!
//! ```ignore
//! use weft_cn::prelude::*;
//!
//! let fruit = cn::combobox_with(vec!["Apple", "Banana", "Cherry"])
//!     .placeholder("Pick a fruit")
//!     .typeahead(true)
//!     .on_change(|event| println!("Selected: {:?}", event.selected_item))
//!     .build();
//!
//! fruit.focus();
//! fruit.type_text("ch");
//! fruit.key_down(KeyEvent::new(key_codes::ENTER));
//! assert_eq!(fruit.input_value(), "Cherry");
//! ```
//!
//! ## Components
//!
//! - **Combobox** - filterable single-selection input with optional custom
//!   values and typeahead completion

pub mod components;
pub mod config;

pub use components::*;
pub use config::ComboboxSettings;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::combobox::{combobox, combobox_with};
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::combobox::{
        combobox, combobox_with, ChangeEvent, Combobox, ComboboxBuilder, ComboboxItem,
        ComboboxOption, ComboboxSize, ComboboxView, Validation,
    };
    pub use crate::config::ComboboxSettings;
    // Re-export commonly needed core types
    pub use weft_core::{key_codes, KeyEvent, KeyOutcome, MenuRegistry, Modifiers};
}
