//! Keeps the panel classes, the toggle icon and the stored preference in step.

use crate::classes::ClassList;
use crate::config::PanelConfig;
use crate::cookie::{CookieJar, PreferenceStore};
use crate::state::{Preference, ToggleState};

/// An event whose default browser action can be suppressed.
pub trait DefaultAction {
    fn prevent_default(&self);
}

/// For toggles that do not come from an event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDefaultAction;

impl DefaultAction for NoDefaultAction {
    fn prevent_default(&self) {}
}

impl DefaultAction for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// Folds and unfolds the panel.
///
/// The panel's class set is the only record of the fold state: every
/// operation re-reads it instead of remembering what it last did.
#[derive(Debug)]
pub struct PanelToggleController<P, I, J> {
    config: PanelConfig,
    panel: P,
    icon: I,
    preferences: PreferenceStore<J>,
}

impl<P, I, J> PanelToggleController<P, I, J>
where
    P: ClassList,
    I: ClassList,
    J: CookieJar,
{
    pub fn new(config: PanelConfig, panel: P, icon: I, jar: J) -> Self {
        let preferences = PreferenceStore::new(config.cookie_name.clone(), jar);
        Self {
            config,
            panel,
            icon,
            preferences,
        }
    }

    /// Sync the icon with the stored preference.
    ///
    /// A missing or unreadable cookie counts as expanded. Neither the panel
    /// classes nor the cookie are touched.
    pub fn initialize(&mut self) -> ToggleState {
        let state = self.preferences.read_or(Preference::EXPANDED).state();
        self.sync_icon(state);
        log::debug!("panel '{}' initialized {state}", self.config.panel_id);
        state
    }

    /// Arm the fold animation on a panel that starts out expanded.
    pub fn prime_transition_marker(&mut self) {
        if self.panel.contains(&self.config.normal_class) {
            self.panel.add(&self.config.transition_class);
        }
    }

    /// User asked to fold or unfold. Suppresses `event`'s default action,
    /// flips the panel and stores the result.
    pub fn on_toggle_requested<E: DefaultAction + ?Sized>(&mut self, event: &E) -> ToggleState {
        event.prevent_default();
        let state = self.flip();
        if let Err(err) = self.preferences.write(state.into()) {
            log::warn!("could not store '{}' preference: {err}", self.preferences.name());
        }
        log::debug!("panel '{}' {state}", self.config.panel_id);
        state
    }

    /// Flip the panel without storing the preference, for a fold that was
    /// already recorded elsewhere.
    pub fn mirror_toggle(&mut self) -> ToggleState {
        let state = self.flip();
        log::debug!("panel '{}' {state} (mirrored)", self.config.panel_id);
        state
    }

    /// The panel finished an animation.
    pub fn on_transition_settled(&mut self) {
        if !self.panel.contains(&self.config.transition_class) {
            self.panel.add(&self.config.transition_class);
        }
    }

    pub fn state(&self) -> ToggleState {
        ToggleState::from_panel(&self.panel, &self.config)
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn icon(&self) -> &I {
        &self.icon
    }

    pub fn preferences(&self) -> &PreferenceStore<J> {
        &self.preferences
    }

    fn flip(&mut self) -> ToggleState {
        self.panel.toggle(&self.config.normal_class);
        self.panel.toggle(&self.config.folded_class);
        let state = self.state();
        self.sync_icon(state);
        state
    }

    fn sync_icon(&mut self, state: ToggleState) {
        let target = self.config.glyph_for(state);
        let other = self.config.glyph_for(state.flipped());
        if !self.icon.replace(other, target) {
            self.icon.add(target);
        }
    }
}
