//! Fold state of the panel and its persisted form.

use std::fmt;
use std::str::FromStr;

use crate::classes::ClassList;
use crate::config::PanelConfig;
use crate::error::PanelError;

/// Logical state of the navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleState {
    #[default]
    Expanded,
    Folded,
}

impl ToggleState {
    /// Derive the state from the panel's class set.
    ///
    /// The panel is folded whenever it does not carry the normal-size class,
    /// whatever else it carries.
    pub fn from_panel<L: ClassList + ?Sized>(panel: &L, config: &PanelConfig) -> Self {
        if panel.contains(&config.normal_class) {
            ToggleState::Expanded
        } else {
            ToggleState::Folded
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ToggleState::Expanded => ToggleState::Folded,
            ToggleState::Folded => ToggleState::Expanded,
        }
    }

    pub fn is_folded(self) -> bool {
        self == ToggleState::Folded
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToggleState::Expanded => "expanded",
            ToggleState::Folded => "folded",
        }
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted fold preference, encoded as `"true"` (reduced) or `"false"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Preference {
    reduced: bool,
}

impl Preference {
    pub const EXPANDED: Preference = Preference { reduced: false };
    pub const FOLDED: Preference = Preference { reduced: true };

    pub fn is_reduced(self) -> bool {
        self.reduced
    }

    pub fn state(self) -> ToggleState {
        if self.reduced {
            ToggleState::Folded
        } else {
            ToggleState::Expanded
        }
    }

    pub fn as_str(self) -> &'static str {
        if self.reduced {
            "true"
        } else {
            "false"
        }
    }
}

impl From<ToggleState> for Preference {
    fn from(state: ToggleState) -> Self {
        Preference {
            reduced: state.is_folded(),
        }
    }
}

impl FromStr for Preference {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Preference::FOLDED),
            "false" => Ok(Preference::EXPANDED),
            other => Err(PanelError::MalformedPreference(other.to_string())),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
