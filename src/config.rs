//! Names the panel behaviour depends on: element ids, cookie, classes, glyphs.

use serde::{Deserialize, Serialize};

use crate::classes::{ClassList, ClassSet};
use crate::error::{PanelError, PanelResult};
use crate::state::ToggleState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Id of the control that folds/unfolds the panel.
    pub toggle_id: String,
    /// Id of the panel container.
    pub panel_id: String,
    /// Selector for the icon element inside the toggle control.
    pub icon_selector: String,
    pub cookie_name: String,
    /// Class carried by the panel while expanded.
    pub normal_class: String,
    /// Class carried by the panel while folded.
    pub folded_class: String,
    /// Marker that enables the fold animation once the panel has settled.
    pub transition_class: String,
    /// Glyph shown while folded.
    pub expand_glyph: String,
    /// Glyph shown while expanded.
    pub compress_glyph: String,
    /// Classes the icon always carries, next to the glyph.
    pub icon_base_classes: Vec<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            toggle_id: "resize-menu".to_string(),
            panel_id: "left-menu".to_string(),
            icon_selector: "i".to_string(),
            cookie_name: "resized-menu".to_string(),
            normal_class: "col-lg-2".to_string(),
            folded_class: "folded-left-col".to_string(),
            transition_class: "animated".to_string(),
            expand_glyph: "fa-expand".to_string(),
            compress_glyph: "fa-compress".to_string(),
            icon_base_classes: vec!["fa".to_string()],
        }
    }
}

impl PanelConfig {
    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> PanelResult<Self> {
        let config: PanelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PanelResult<()> {
        for (field, value) in [
            ("toggle_id", &self.toggle_id),
            ("panel_id", &self.panel_id),
            ("icon_selector", &self.icon_selector),
        ] {
            if value.trim().is_empty() {
                return Err(PanelError::InvalidConfig(format!("{field} must not be empty")));
            }
        }

        if self.cookie_name.is_empty()
            || self
                .cookie_name
                .chars()
                .any(|c| c == '=' || c == ';' || c.is_whitespace())
        {
            return Err(PanelError::InvalidConfig(format!(
                "cookie_name '{}' is not a valid cookie name",
                self.cookie_name
            )));
        }

        let tokens = [
            ("normal_class", &self.normal_class),
            ("folded_class", &self.folded_class),
            ("transition_class", &self.transition_class),
            ("expand_glyph", &self.expand_glyph),
            ("compress_glyph", &self.compress_glyph),
        ];
        for (field, token) in tokens
            .into_iter()
            .chain(self.icon_base_classes.iter().map(|c| ("icon_base_classes", c)))
        {
            if token.is_empty() || token.chars().any(char::is_whitespace) {
                return Err(PanelError::InvalidConfig(format!(
                    "{field} '{token}' is not a single class name"
                )));
            }
        }

        if self.normal_class == self.folded_class {
            return Err(PanelError::InvalidConfig(
                "normal_class and folded_class must differ".to_string(),
            ));
        }
        if self.expand_glyph == self.compress_glyph {
            return Err(PanelError::InvalidConfig(
                "expand_glyph and compress_glyph must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Glyph the icon shows for `state`.
    pub fn glyph_for(&self, state: ToggleState) -> &str {
        match state {
            ToggleState::Folded => &self.expand_glyph,
            ToggleState::Expanded => &self.compress_glyph,
        }
    }

    /// Panel classes as server-rendered markup would carry them for `state`.
    pub fn panel_classes_for(&self, state: ToggleState) -> ClassSet {
        let mut classes = ClassSet::new();
        match state {
            ToggleState::Expanded => classes.add(&self.normal_class),
            ToggleState::Folded => classes.add(&self.folded_class),
        }
        classes
    }

    /// Icon classes for `state`: the base classes followed by the glyph.
    pub fn icon_classes_for(&self, state: ToggleState) -> ClassSet {
        let mut classes: ClassSet = self.icon_base_classes.iter().collect();
        classes.add(self.glyph_for(state));
        classes
    }
}
