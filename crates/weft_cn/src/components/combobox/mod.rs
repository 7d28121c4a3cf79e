//! Combobox component - filterable single-selection input
//!
//! A headless combobox: a text input backed by a list of items, with
//! type-to-filter, keyboard navigation, highlight tracking, optional custom
//! (free-text) values and optional typeahead completion. The component owns
//! the interaction state; a rendering layer reads [`ComboboxView`] snapshots.
//!
//! # Example
//!
//! ```ignore
//! use weft_cn::prelude::*;
//!
//! let country = cn::combobox()
//!     .placeholder("Search countries...")
//!     .option("us", "United States")
//!     .option("uk", "United Kingdom")
//!     .option_disabled("de", "Germany")
//!     .on_change(|event| println!("Selected: {:?}", event.selected_item))
//!     .build();
//!
//! country.focus();
//! country.text_input('u');
//! country.key_down(KeyEvent::new(key_codes::ENTER));
//!
//! // Arbitrary item types with a projector
//! cn::combobox_with(users)
//!     .item_to_string(|user: &User| user.name.clone())
//!     .item_equals(|a, b| a.id == b.id)
//!     .typeahead(true)
//!     .build();
//!
//! // Allow custom values (not just from items)
//! cn::combobox_with(vec!["Apple", "Banana"])
//!     .allow_custom_value(true)
//!     .build();
//! ```

mod builder;
mod controller;
mod highlight;
mod machine;
mod matcher;
mod selection;
mod view;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use builder::{combobox, combobox_with, ComboboxBuilder};
pub use controller::Combobox;
pub use highlight::HighlightTracker;
pub use matcher::{Candidate, CandidateSet, ItemMatcher, MatchMode};
pub use selection::Selection;
pub use view::{ComboboxView, OptionView, Validation};

/// Combobox size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboboxSize {
    /// Small combobox (height: 32px, text: 13px)
    Small,
    /// Medium combobox (height: 40px, text: 14px)
    #[default]
    Medium,
    /// Large combobox (height: 48px, text: 16px)
    Large,
}

impl ComboboxSize {
    /// Get the height for this size
    pub fn height(&self) -> f32 {
        match self {
            ComboboxSize::Small => 32.0,
            ComboboxSize::Medium => 40.0,
            ComboboxSize::Large => 48.0,
        }
    }

    /// Get the font size for this size
    pub fn font_size(&self) -> f32 {
        match self {
            ComboboxSize::Small => 13.0,
            ComboboxSize::Medium => 14.0,
            ComboboxSize::Large => 16.0,
        }
    }

    /// Get the padding for this size
    pub fn padding(&self) -> f32 {
        match self {
            ComboboxSize::Small => 8.0,
            ComboboxSize::Medium => 12.0,
            ComboboxSize::Large => 16.0,
        }
    }
}

/// An item that can be listed in a combobox
///
/// The display string and disabled flag are the defaults used when the
/// builder is not given an explicit projector. Equality (`PartialEq`) is the
/// default identity used to decide whether a selection changed.
pub trait ComboboxItem: Clone + PartialEq + Send + Sync + 'static {
    /// Display string used for the input text and for filtering
    fn item_to_string(&self) -> String;

    /// Whether the item is listed but cannot be selected
    fn is_disabled(&self) -> bool {
        false
    }
}

impl ComboboxItem for String {
    fn item_to_string(&self) -> String {
        self.clone()
    }
}

impl ComboboxItem for &'static str {
    fn item_to_string(&self) -> String {
        (*self).to_string()
    }
}

/// A value/label option in the combobox list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboboxOption {
    /// The value reported to the owner
    pub value: String,
    /// The display label (used for the input text and for filtering)
    pub label: String,
    /// Whether this option is disabled
    #[serde(default)]
    pub disabled: bool,
}

impl ComboboxOption {
    /// Create a new option with value and label
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark this option as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl ComboboxItem for ComboboxOption {
    fn item_to_string(&self) -> String {
        self.label.clone()
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Payload of the change notification
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeEvent<T> {
    /// The committed item, `None` when cleared or when a custom value was entered
    pub selected_item: Option<T>,
    /// The input text after the change
    pub input_value: String,
}

/// Projects an item to its display string
pub type ItemToStringFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Decides whether two items are the same selection
pub type ItemEqualsFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Decides whether an item is disabled
pub type ItemDisabledFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Filter predicate: `(item, query) -> keep`
pub type ShouldFilterItemFn<T> = Arc<dyn Fn(&T, &str) -> bool + Send + Sync>;

/// Selection change callback
pub type OnChangeFn<T> = Arc<dyn Fn(&ChangeEvent<T>) + Send + Sync>;

/// Input text change callback
pub type OnInputChangeFn = Arc<dyn Fn(&str) + Send + Sync>;
