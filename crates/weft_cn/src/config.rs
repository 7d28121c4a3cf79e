//! Combobox settings files
//!
//! A combobox can be described declaratively in TOML:
//!
//! ```toml
//! placeholder = "Search countries..."
//! title_text = "Country"
//! size = "large"
//! typeahead = true
//! selected = "uk"
//!
//! [[option]]
//! value = "us"
//! label = "United States"
//!
//! [[option]]
//! value = "uk"
//! label = "United Kingdom"
//!
//! [[option]]
//! value = "de"
//! label = "Germany"
//! disabled = true
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_core::{Result, WeftError};

use crate::components::combobox::{ComboboxOption, ComboboxSize};

/// Declarative combobox configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ComboboxSettings {
    pub placeholder: Option<String>,
    pub title_text: Option<String>,
    pub helper_text: Option<String>,
    pub size: ComboboxSize,
    pub allow_custom_value: bool,
    pub typeahead: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub invalid_text: Option<String>,
    pub warn_text: Option<String>,
    /// Value of the initially selected option
    pub selected: Option<String>,
    #[serde(rename = "option")]
    pub options: Vec<ComboboxOption>,
}

impl ComboboxSettings {
    /// Parse and validate settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: ComboboxSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading combobox settings");
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check option values are unique and the selection names an enabled option
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.value.as_str()) {
                return Err(WeftError::InvalidSettings(format!(
                    "duplicate option value `{}`",
                    option.value
                )));
            }
        }

        if let Some(ref selected) = self.selected {
            match self.selected_option() {
                None => {
                    return Err(WeftError::InvalidSettings(format!(
                        "selected value `{selected}` is not an option"
                    )))
                }
                Some(option) if option.disabled => {
                    return Err(WeftError::InvalidSettings(format!(
                        "selected option `{selected}` is disabled"
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// The option named by `selected`
    pub fn selected_option(&self) -> Option<&ComboboxOption> {
        let selected = self.selected.as_deref()?;
        self.options.iter().find(|o| o.value == selected)
    }
}
