use dioxus::prelude::*;

use crate::classes::{ClassList, ClassSet};
use crate::config::PanelConfig;
use crate::controller::{DefaultAction, PanelToggleController};
use crate::cookie::{PlatformCookieJar, PreferenceStore};
use crate::state::{Preference, ToggleState};

/// Rendered class attributes are the class lists the controller mutates.
impl ClassList for Signal<ClassSet> {
    fn contains(&self, class: &str) -> bool {
        ClassList::contains(&*self.peek(), class)
    }

    fn add(&mut self, class: &str) {
        if !ClassList::contains(self, class) {
            ClassList::add(&mut *self.write(), class);
        }
    }

    fn remove(&mut self, class: &str) {
        if ClassList::contains(self, class) {
            ClassList::remove(&mut *self.write(), class);
        }
    }

    fn replace(&mut self, old: &str, new: &str) -> bool {
        if !ClassList::contains(self, old) {
            return false;
        }
        ClassList::replace(&mut *self.write(), old, new)
    }
}

impl<T: 'static> DefaultAction for Event<T> {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

type SignalController = PanelToggleController<Signal<ClassSet>, Signal<ClassSet>, PlatformCookieJar>;

/// Handle to a folding panel owned by a component.
#[derive(Clone, Copy, PartialEq)]
pub struct FoldingPanel {
    pub panel_classes: Signal<ClassSet>,
    pub icon_classes: Signal<ClassSet>,
    controller: Signal<SignalController>,
}

/// Set up a folding panel for the calling component.
///
/// The panel renders with the classes matching the preference stored in
/// `jar`, then the controller syncs the icon and arms the fold animation,
/// once per component instance. Pass the same jar to every mount so the
/// preference outlives the component.
pub fn use_folding_panel(config: PanelConfig, jar: PlatformCookieJar) -> FoldingPanel {
    let panel = use_hook(move || {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("{err}; using the default panel config");
                PanelConfig::default()
            }
        };

        let stored = PreferenceStore::new(config.cookie_name.clone(), jar.clone())
            .read_or(Preference::EXPANDED);

        let panel_classes = Signal::new(config.panel_classes_for(stored.state()));
        let icon_classes = Signal::new(config.icon_classes_for(ToggleState::Expanded));

        let mut controller = PanelToggleController::new(config, panel_classes, icon_classes, jar);
        controller.initialize();
        controller.prime_transition_marker();

        FoldingPanel {
            panel_classes,
            icon_classes,
            controller: Signal::new(controller),
        }
    });

    let panel_id = panel.panel_id();
    use_drop(move || log::debug!("panel '{panel_id}' disposed"));

    panel
}

impl FoldingPanel {
    pub fn toggle<E: DefaultAction + ?Sized>(&self, event: &E) -> ToggleState {
        let mut controller = self.controller;
        controller.with_mut(|c| c.on_toggle_requested(event))
    }

    pub fn mirror_toggle(&self) -> ToggleState {
        let mut controller = self.controller;
        controller.with_mut(|c| c.mirror_toggle())
    }

    /// Forward an `animationend` from the panel.
    pub fn settle(&self) {
        let mut controller = self.controller;
        controller.with_mut(|c| c.on_transition_settled());
    }

    pub fn state(&self) -> ToggleState {
        self.controller.peek().state()
    }

    pub fn panel_id(&self) -> String {
        self.controller.peek().config().panel_id.clone()
    }

    pub fn toggle_id(&self) -> String {
        self.controller.peek().config().toggle_id.clone()
    }
}
