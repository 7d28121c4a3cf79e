//! Headless components built on weft_core primitives
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `combobox()`)
//! - Size enum (e.g., `ComboboxSize`)
//! - A mounted controller that takes input events and yields view snapshots

pub mod combobox;

pub use combobox::{
    combobox, combobox_with, ChangeEvent, Combobox, ComboboxBuilder, ComboboxItem,
    ComboboxOption, ComboboxSize, ComboboxView, OptionView, Validation,
};
