//! Render snapshot
//!
//! [`ComboboxView`] is everything a rendering layer needs to draw one frame
//! of the combobox. It is derived from the machine state and the static
//! presentation props; it never feeds back into behavior.

use super::machine::ComboboxMachine;
use super::{ComboboxItem, ComboboxSize};

/// Static presentation props
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Presentation {
    pub placeholder: Option<String>,
    pub title_text: Option<String>,
    pub helper_text: Option<String>,
    pub size: ComboboxSize,
    pub invalid_text: Option<String>,
    pub warn_text: Option<String>,
}

/// Validation message shown under the input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    #[default]
    None,
    /// Error state with its message
    Invalid(String),
    /// Warning state with its message
    Warn(String),
}

impl Validation {
    /// Invalid wins over warn; neither is shown on a disabled or read-only input
    fn resolve(presentation: &Presentation, disabled: bool, read_only: bool) -> Self {
        if disabled || read_only {
            return Validation::None;
        }
        match (&presentation.invalid_text, &presentation.warn_text) {
            (Some(text), _) => Validation::Invalid(text.clone()),
            (None, Some(text)) => Validation::Warn(text.clone()),
            (None, None) => Validation::None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Validation::Invalid(_))
    }

    pub fn is_warn(&self) -> bool {
        matches!(self, Validation::Warn(_))
    }
}

/// One rendered row of the open menu
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    /// Index into the caller's item list
    pub item_index: usize,
    pub highlighted: bool,
    pub selected: bool,
    pub disabled: bool,
}

/// Snapshot of a combobox for rendering
#[derive(Clone, Debug, PartialEq)]
pub struct ComboboxView {
    pub input_value: String,
    pub placeholder: Option<String>,
    pub title_text: Option<String>,
    pub helper_text: Option<String>,
    pub size: ComboboxSize,
    /// Input height in pixels for `size`
    pub height: f32,
    pub font_size: f32,
    pub padding: f32,
    pub is_open: bool,
    /// Rows of the menu; empty while the menu is closed
    pub options: Vec<OptionView>,
    /// Typeahead completion shown after the typed text
    pub suggestion: Option<String>,
    /// Whether the clear control is shown
    pub show_clear: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub validation: Validation,
}

impl ComboboxView {
    pub(crate) fn snapshot<T: ComboboxItem>(
        machine: &ComboboxMachine<T>,
        presentation: &Presentation,
    ) -> Self {
        let disabled = machine.is_disabled();
        let read_only = machine.is_read_only();
        let selected_index = machine.selected_index();

        let options = if machine.is_open() {
            let highlighted = machine.highlighted();
            machine
                .candidates()
                .iter()
                .enumerate()
                .map(|(pos, candidate)| OptionView {
                    label: candidate.label.clone(),
                    item_index: candidate.item_index,
                    highlighted: highlighted == Some(pos),
                    selected: selected_index == Some(candidate.item_index),
                    disabled: candidate.disabled,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            input_value: machine.query().to_string(),
            placeholder: presentation.placeholder.clone(),
            title_text: presentation.title_text.clone(),
            helper_text: presentation.helper_text.clone(),
            size: presentation.size,
            height: presentation.size.height(),
            font_size: presentation.size.font_size(),
            padding: presentation.size.padding(),
            is_open: machine.is_open(),
            options,
            suggestion: machine.typeahead_suggestion().map(|c| c.label),
            show_clear: !machine.query().is_empty() && !disabled && !read_only,
            disabled,
            read_only,
            validation: Validation::resolve(presentation, disabled, read_only),
        }
    }

    /// Position of the highlighted row, if any
    pub fn highlighted_position(&self) -> Option<usize> {
        self.options.iter().position(|o| o.highlighted)
    }
}
