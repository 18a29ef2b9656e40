use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// A dropdown with display texts and an optional current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownControl {
    pub id: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub selected_index: Option<usize>,
}

impl DropdownControl {
    #[must_use]
    pub fn new(id: impl Into<String>, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            options: options.into_iter().map(Into::into).collect(),
            selected_index: None,
        }
    }

    #[must_use]
    pub fn with_selected_index(mut self, index: usize) -> Self {
        self.selected_index = Some(index);
        self
    }

    /// Selects the first option whose text equals `text`.
    ///
    /// Returns `false` and leaves the selection untouched when no option matches.
    pub fn select_text(&mut self, text: &str) -> bool {
        match self.options.iter().position(|option| option == text) {
            Some(index) => {
                self.selected_index = Some(index);
                true
            }
            None => false,
        }
    }

    /// Text of the selected option; errors when nothing non-empty is selected.
    pub fn selected_text(&self) -> ChartResult<&str> {
        self.selected_index
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ChartError::EmptySelection(self.id.clone()))
    }
}

/// Lookup of dropdown controls by id.
pub trait ControlSurface {
    fn dropdown(&self, id: &str) -> Option<&DropdownControl>;

    /// Like [`ControlSurface::dropdown`] but a missing control is an error.
    fn require_dropdown(&self, id: &str) -> ChartResult<&DropdownControl> {
        self.dropdown(id)
            .ok_or_else(|| ChartError::MissingControl(id.to_owned()))
    }
}

/// In-memory set of dropdown controls keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlRegistry {
    controls: IndexMap<String, DropdownControl>,
}

impl ControlRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a control, keyed by its id.
    pub fn insert(&mut self, control: DropdownControl) -> Option<DropdownControl> {
        self.controls.insert(control.id.clone(), control)
    }

    #[must_use]
    pub fn with_control(mut self, control: DropdownControl) -> Self {
        self.insert(control);
        self
    }

    pub fn dropdown_mut(&mut self, id: &str) -> Option<&mut DropdownControl> {
        self.controls.get_mut(id)
    }

    /// Selects `text` on control `id`; a missing control is an error.
    pub fn select_text(&mut self, id: &str, text: &str) -> ChartResult<bool> {
        self.dropdown_mut(id)
            .map(|control| control.select_text(text))
            .ok_or_else(|| ChartError::MissingControl(id.to_owned()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl ControlSurface for ControlRegistry {
    fn dropdown(&self, id: &str) -> Option<&DropdownControl> {
        self.controls.get(id)
    }
}
