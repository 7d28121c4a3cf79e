//! Fluent builder for [`Combobox`]

use std::sync::Arc;

use weft_core::menu_state::MenuRegistry;

use crate::config::ComboboxSettings;

use super::controller::{Combobox, ComboboxShared};
use super::machine::{ComboboxMachine, ComboboxProps};
use super::matcher::ItemMatcher;
use super::selection::Selection;
use super::view::Presentation;
use super::{
    ChangeEvent, ComboboxItem, ComboboxOption, ComboboxSize, ItemEqualsFn, OnChangeFn,
    OnInputChangeFn,
};

/// Internal configuration for building a Combobox
struct ComboboxConfig<T> {
    items: Vec<T>,
    matcher: ItemMatcher<T>,
    item_equals: ItemEqualsFn<T>,
    initial_selected_item: Option<T>,
    /// `Some` when the owner controls the selection
    selected_item: Option<Option<T>>,
    allow_custom_value: bool,
    typeahead: bool,
    disabled: bool,
    read_only: bool,
    presentation: Presentation,
    on_change: Option<OnChangeFn<T>>,
    on_input_change: Option<OnInputChangeFn>,
    registry: Option<Arc<MenuRegistry>>,
}

impl<T: ComboboxItem> ComboboxConfig<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items,
            matcher: ItemMatcher::default(),
            item_equals: Arc::new(|a: &T, b: &T| a == b),
            initial_selected_item: None,
            selected_item: None,
            allow_custom_value: false,
            typeahead: false,
            disabled: false,
            read_only: false,
            presentation: Presentation::default(),
            on_change: None,
            on_input_change: None,
            registry: None,
        }
    }
}

/// Builder for creating Combobox components with fluent API
pub struct ComboboxBuilder<T: ComboboxItem> {
    config: ComboboxConfig<T>,
}

impl<T: ComboboxItem> ComboboxBuilder<T> {
    /// Create a builder over `items`
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            config: ComboboxConfig::new(items.into_iter().collect()),
        }
    }

    /// Add one item
    pub fn item(mut self, item: T) -> Self {
        self.config.items.push(item);
        self
    }

    /// Add multiple items
    pub fn items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.config.items.extend(items);
        self
    }

    /// Set the display-string projector
    pub fn item_to_string<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.config.matcher = self.config.matcher.with_item_to_string(Arc::new(f));
        self
    }

    /// Set the identity used to decide whether the selection changed
    pub fn item_equals<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.config.item_equals = Arc::new(f);
        self
    }

    /// Set the disabled check
    pub fn item_disabled<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.config.matcher = self.config.matcher.with_is_disabled(Arc::new(f));
        self
    }

    /// Replace substring filtering with a custom predicate `(item, query) -> keep`
    pub fn should_filter_item<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &str) -> bool + Send + Sync + 'static,
    {
        self.config.matcher = self.config.matcher.with_filter(Arc::new(f));
        self
    }

    /// Uncontrolled starting selection
    pub fn initial_selected_item(mut self, item: T) -> Self {
        self.config.initial_selected_item = Some(item);
        self
    }

    /// Controlled selection
    ///
    /// The owner updates it afterwards with [`Combobox::set_selected_item`].
    pub fn selected_item(mut self, item: Option<T>) -> Self {
        self.config.selected_item = Some(item);
        self
    }

    /// Allow committing text that matches no item
    pub fn allow_custom_value(mut self, allow: bool) -> Self {
        self.config.allow_custom_value = allow;
        self
    }

    /// Enable Tab completion of the first prefix match
    pub fn typeahead(mut self, typeahead: bool) -> Self {
        self.config.typeahead = typeahead;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set read-only state
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.config.read_only = read_only;
        self
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.presentation.placeholder = Some(placeholder.into());
        self
    }

    /// Add a label above the combobox
    pub fn title_text(mut self, title: impl Into<String>) -> Self {
        self.config.presentation.title_text = Some(title.into());
        self
    }

    /// Add helper text below the combobox
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.config.presentation.helper_text = Some(text.into());
        self
    }

    /// Set the combobox size
    pub fn size(mut self, size: ComboboxSize) -> Self {
        self.config.presentation.size = size;
        self
    }

    /// Show the invalid state with a message
    pub fn invalid(mut self, text: impl Into<String>) -> Self {
        self.config.presentation.invalid_text = Some(text.into());
        self
    }

    /// Show the warning state with a message
    pub fn warn(mut self, text: impl Into<String>) -> Self {
        self.config.presentation.warn_text = Some(text.into());
        self
    }

    /// Set the selection change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ChangeEvent<T>) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(callback));
        self
    }

    /// Set the callback for user edits of the input text
    pub fn on_input_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.config.on_input_change = Some(Arc::new(callback));
        self
    }

    /// Use a specific menu registry instead of the global one
    pub fn registry(mut self, registry: Arc<MenuRegistry>) -> Self {
        self.config.registry = Some(registry);
        self
    }

    /// Apply flags and presentation from settings
    pub fn settings(mut self, settings: &ComboboxSettings) -> Self {
        let presentation = &mut self.config.presentation;
        presentation.placeholder = settings.placeholder.clone();
        presentation.title_text = settings.title_text.clone();
        presentation.helper_text = settings.helper_text.clone();
        presentation.size = settings.size;
        presentation.invalid_text = settings.invalid_text.clone();
        presentation.warn_text = settings.warn_text.clone();

        self.config.allow_custom_value = settings.allow_custom_value;
        self.config.typeahead = settings.typeahead;
        self.config.disabled = settings.disabled;
        self.config.read_only = settings.read_only;
        self
    }

    /// Mount the combobox
    pub fn build(self) -> Combobox<T> {
        let config = self.config;

        let selection = match config.selected_item {
            Some(pinned) => Selection::controlled(pinned),
            None => Selection::uncontrolled(config.initial_selected_item),
        };
        let props = ComboboxProps {
            matcher: config.matcher,
            item_equals: config.item_equals,
            allow_custom_value: config.allow_custom_value,
            typeahead: config.typeahead,
            disabled: config.disabled,
            read_only: config.read_only,
        };
        tracing::debug!(
            items = config.items.len(),
            controlled = selection.is_pinned(),
            "building combobox"
        );

        let machine = ComboboxMachine::new(config.items, props, selection);
        let shared = ComboboxShared::new(
            machine,
            config.presentation,
            config.on_change,
            config.on_input_change,
        );
        let registry = config.registry.unwrap_or_else(MenuRegistry::global);
        Combobox::mount(shared, registry)
    }
}

impl ComboboxBuilder<ComboboxOption> {
    /// Add an option with value and label
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.config.items.push(ComboboxOption::new(value, label));
        self
    }

    /// Add a disabled option
    pub fn option_disabled(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.config
            .items
            .push(ComboboxOption::new(value, label).disabled());
        self
    }

    /// Add multiple options
    pub fn options(self, options: impl IntoIterator<Item = ComboboxOption>) -> Self {
        self.items(options)
    }

    /// Build from a settings file: options, initial selection, flags and presentation
    pub fn from_settings(settings: &ComboboxSettings) -> weft_core::Result<Self> {
        settings.validate()?;
        let mut builder = combobox().options(settings.options.clone()).settings(settings);
        if let Some(selected) = settings.selected_option() {
            builder = builder.initial_selected_item(selected.clone());
        }
        Ok(builder)
    }
}

/// Create a combobox over value/label options
pub fn combobox() -> ComboboxBuilder<ComboboxOption> {
    ComboboxBuilder::new(Vec::new())
}

/// Create a combobox over arbitrary items
pub fn combobox_with<T: ComboboxItem>(items: impl IntoIterator<Item = T>) -> ComboboxBuilder<T> {
    ComboboxBuilder::new(items)
}
