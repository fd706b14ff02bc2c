//! WASM bindings for pages that are not rendered by Dioxus
//!
//! Attaches the folding behaviour to markup that already exists:
//!
//! ```js
//! import init, { FoldingPanel, installDiagnostics } from "./folding_panel.js";
//!
//! await init();
//! installDiagnostics("debug");
//! const panel = new FoldingPanel({ panel_id: "left-menu" });
//! // ...
//! panel.dispose();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use log::LevelFilter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::classes::DomClassList;
use crate::config::PanelConfig;
use crate::controller::{NoDefaultAction, PanelToggleController};
use crate::cookie::DocumentCookieJar;
use crate::error::{PanelError, PanelResult};

type DomController = PanelToggleController<DomClassList, DomClassList, DocumentCookieJar>;
type Listener = Closure<dyn FnMut(web_sys::Event)>;

impl From<PanelError> for JsValue {
    fn from(err: PanelError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Install the console logger and panic hook.
#[wasm_bindgen(js_name = installDiagnostics)]
pub fn install_diagnostics(level: Option<String>) {
    let level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    crate::logging::init(level);
}

/// A folding panel bound to live DOM elements.
#[wasm_bindgen(js_name = FoldingPanel)]
pub struct WebFoldingPanel {
    controller: Rc<RefCell<DomController>>,
    toggle: web_sys::Element,
    panel: web_sys::Element,
    on_click: Option<Listener>,
    on_animation_end: Option<Listener>,
}

#[wasm_bindgen(js_class = FoldingPanel)]
impl WebFoldingPanel {
    /// `config` is a partial `PanelConfig` object; omitted fields keep their
    /// defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WebFoldingPanel, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            PanelConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|err| PanelError::InvalidConfig(err.to_string()))?
        };
        Ok(Self::attach(config)?)
    }

    /// `"expanded"` or `"folded"`.
    pub fn state(&self) -> String {
        self.controller.borrow().state().to_string()
    }

    /// Fold or unfold and store the preference, as a click would.
    pub fn toggle(&self) -> String {
        self.controller
            .borrow_mut()
            .on_toggle_requested(&NoDefaultAction)
            .to_string()
    }

    /// Fold or unfold without storing the preference.
    #[wasm_bindgen(js_name = mirrorToggle)]
    pub fn mirror_toggle(&self) -> String {
        self.controller.borrow_mut().mirror_toggle().to_string()
    }

    /// Detach the listeners. Calling it again does nothing.
    pub fn dispose(&mut self) {
        if self.on_click.is_none() && self.on_animation_end.is_none() {
            return;
        }
        if let Some(listener) = self.on_click.take() {
            remove_listener(&self.toggle, "click", &listener);
        }
        if let Some(listener) = self.on_animation_end.take() {
            remove_listener(&self.panel, "animationend", &listener);
        }
        log::debug!("panel '{}' disposed", self.controller.borrow().config().panel_id);
    }
}

impl WebFoldingPanel {
    /// Find the toggle, icon and panel in the current document, sync the icon
    /// with the stored preference and start listening.
    pub fn attach(config: PanelConfig) -> PanelResult<Self> {
        config.validate()?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PanelError::NoDocument)?;

        let toggle = document
            .get_element_by_id(&config.toggle_id)
            .ok_or_else(|| PanelError::ElementNotFound(config.toggle_id.clone()))?;
        let panel = document
            .get_element_by_id(&config.panel_id)
            .ok_or_else(|| PanelError::ElementNotFound(config.panel_id.clone()))?;
        let icon = toggle
            .query_selector(&config.icon_selector)
            .map_err(PanelError::from_js)?
            .ok_or_else(|| {
                PanelError::ElementNotFound(format!("#{} {}", config.toggle_id, config.icon_selector))
            })?;

        let mut controller = PanelToggleController::new(
            config,
            DomClassList::new(&panel),
            DomClassList::new(&icon),
            DocumentCookieJar::new(&document),
        );
        controller.initialize();
        controller.prime_transition_marker();

        let mut handle = Self {
            controller: Rc::new(RefCell::new(controller)),
            toggle,
            panel,
            on_click: None,
            on_animation_end: None,
        };
        handle.listen()?;
        Ok(handle)
    }

    fn listen(&mut self) -> PanelResult<()> {
        let controller = Rc::clone(&self.controller);
        let on_click = Listener::new(move |event: web_sys::Event| {
            controller.borrow_mut().on_toggle_requested(&event);
        });
        self.toggle
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(PanelError::from_js)?;
        self.on_click = Some(on_click);

        let controller = Rc::clone(&self.controller);
        let on_animation_end = Listener::new(move |_event: web_sys::Event| {
            controller.borrow_mut().on_transition_settled();
        });
        self.panel
            .add_event_listener_with_callback("animationend", on_animation_end.as_ref().unchecked_ref())
            .map_err(PanelError::from_js)?;
        self.on_animation_end = Some(on_animation_end);

        Ok(())
    }
}

impl Drop for WebFoldingPanel {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn remove_listener(target: &web_sys::Element, event: &str, listener: &Listener) {
    if let Err(err) = target.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
        log::warn!("could not remove {event} listener: {}", PanelError::from_js(err));
    }
}
