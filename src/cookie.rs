//! Cookie-backed persistence of the fold preference.

use std::cell::RefCell;
use std::rc::Rc;

use cookie::Cookie;

use crate::error::{PanelError, PanelResult};
use crate::state::Preference;

/// A `document.cookie`-style store.
pub trait CookieJar {
    /// Every visible cookie, as `name=value` pairs joined by `"; "`.
    fn raw(&self) -> PanelResult<String>;

    /// Apply a single `name=value[; attributes]` assignment.
    fn assign(&mut self, assignment: &str) -> PanelResult<()>;
}

/// Value of cookie `name` in a raw cookie string, if present.
///
/// Only the text up to a second `=` counts, so `resized-menu=true=1` reads
/// as `true`.
pub fn lookup(raw: &str, name: &str) -> Option<String> {
    Cookie::split_parse(raw)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .and_then(|cookie| cookie.value().split('=').next().map(str::to_string))
}

/// Typed accessor for the preference cookie.
#[derive(Clone, Debug)]
pub struct PreferenceStore<J> {
    name: String,
    jar: J,
}

impl<J: CookieJar> PreferenceStore<J> {
    pub fn new(name: impl Into<String>, jar: J) -> Self {
        Self {
            name: name.into(),
            jar,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// `Ok(None)` when the cookie is absent; an error when the jar fails or
    /// the stored value is not a boolean.
    pub fn read(&self) -> PanelResult<Option<Preference>> {
        let raw = self.jar.raw()?;
        lookup(&raw, &self.name)
            .map(|value| value.parse::<Preference>())
            .transpose()
    }

    /// Read the preference, substituting `default` for anything unusable.
    pub fn read_or(&self, default: Preference) -> Preference {
        match self.read() {
            Ok(Some(preference)) => preference,
            Ok(None) => {
                log::debug!("no '{}' cookie, using {default}", self.name);
                default
            }
            Err(err) => {
                log::warn!("ignoring '{}' cookie: {err}; using {default}", self.name);
                default
            }
        }
    }

    pub fn write(&mut self, preference: Preference) -> PanelResult<()> {
        let cookie = Cookie::new(self.name.as_str(), preference.as_str());
        self.jar.assign(&cookie.to_string())
    }
}

/// In-memory cookie jar. Clones share the same cookies.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookieJar {
    inner: Rc<RefCell<MemoryCookies>>,
}

#[derive(Debug, Default)]
struct MemoryCookies {
    jar: cookie::CookieJar,
    unavailable: bool,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar pre-populated from a raw cookie string.
    pub fn with_cookies(raw: &str) -> Self {
        let jar = Self::new();
        {
            let mut inner = jar.inner.borrow_mut();
            for cookie in Cookie::split_parse(raw).filter_map(Result::ok) {
                inner.jar.add(cookie.into_owned());
            }
        }
        jar
    }

    /// Jar whose every read and write fails, like a cookie API that throws.
    pub fn unavailable() -> Self {
        let jar = Self::new();
        jar.inner.borrow_mut().unavailable = true;
        jar
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .jar
            .get(name)
            .map(|cookie| cookie.value().to_string())
    }
}

impl CookieJar for MemoryCookieJar {
    fn raw(&self) -> PanelResult<String> {
        let inner = self.inner.borrow();
        if inner.unavailable {
            return Err(PanelError::CookieUnavailable("cookie access denied".to_string()));
        }
        Ok(inner
            .jar
            .iter()
            .map(|cookie| cookie.stripped().to_string())
            .collect::<Vec<_>>()
            .join("; "))
    }

    fn assign(&mut self, assignment: &str) -> PanelResult<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(PanelError::CookieUnavailable("cookie access denied".to_string()));
        }
        let cookie = Cookie::parse(assignment)?;
        inner.jar.add(cookie.into_owned());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use document::DocumentCookieJar;

#[cfg(target_arch = "wasm32")]
mod document {
    use wasm_bindgen::JsCast;

    use super::CookieJar;
    use crate::error::{PanelError, PanelResult};

    /// The page's `document.cookie`.
    #[derive(Clone, Debug)]
    pub struct DocumentCookieJar {
        document: Option<web_sys::HtmlDocument>,
    }

    impl DocumentCookieJar {
        pub fn new(document: &web_sys::Document) -> Self {
            Self {
                document: document.dyn_ref::<web_sys::HtmlDocument>().cloned(),
            }
        }

        /// Jar of the current window's document. Without one, every access
        /// fails and readers fall back to their default.
        pub fn current() -> Self {
            match web_sys::window().and_then(|w| w.document()) {
                Some(document) => Self::new(&document),
                None => Self { document: None },
            }
        }

        fn document(&self) -> PanelResult<&web_sys::HtmlDocument> {
            self.document
                .as_ref()
                .ok_or_else(|| PanelError::CookieUnavailable("not an HTML document".to_string()))
        }
    }

    impl CookieJar for DocumentCookieJar {
        fn raw(&self) -> PanelResult<String> {
            self.document()?
                .cookie()
                .map_err(|err| PanelError::CookieUnavailable(PanelError::from_js(err).to_string()))
        }

        fn assign(&mut self, assignment: &str) -> PanelResult<()> {
            self.document()?
                .set_cookie(assignment)
                .map_err(|err| PanelError::CookieUnavailable(PanelError::from_js(err).to_string()))
        }
    }
}

/// Cookie jar the Dioxus app provides to its panels on the current target.
#[cfg(target_arch = "wasm32")]
pub type PlatformCookieJar = DocumentCookieJar;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformCookieJar = MemoryCookieJar;

#[cfg(target_arch = "wasm32")]
pub fn platform_cookie_jar() -> PlatformCookieJar {
    DocumentCookieJar::current()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_cookie_jar() -> PlatformCookieJar {
    MemoryCookieJar::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let raw = "csrftoken=abc; resized-menu=true; theme=dark";
        assert_eq!(lookup(raw, "resized-menu").as_deref(), Some("true"));
        assert_eq!(lookup(raw, "theme").as_deref(), Some("dark"));
        assert_eq!(lookup(raw, "missing"), None);
        assert_eq!(lookup("", "resized-menu"), None);
    }

    #[test]
    fn test_lookup_needs_exact_name() {
        let raw = "xresized-menu=true; resized-menu-old=true";
        assert_eq!(lookup(raw, "resized-menu"), None);
    }

    #[test]
    fn test_lookup_stops_at_second_equals() {
        assert_eq!(lookup("token=a=b", "token").as_deref(), Some("a"));
        assert_eq!(lookup("resized-menu=true=1", "resized-menu").as_deref(), Some("true"));
    }

    #[test]
    fn test_read_value_with_trailing_equals() {
        let store = PreferenceStore::new("resized-menu", MemoryCookieJar::with_cookies("resized-menu=true=1"));
        assert_eq!(store.read().unwrap(), Some(Preference::FOLDED));
    }

    #[test]
    fn test_assign_ignores_attributes() {
        let mut jar = MemoryCookieJar::new();
        jar.assign("resized-menu=true; Path=/").unwrap();
        assert_eq!(jar.get("resized-menu").as_deref(), Some("true"));
        assert_eq!(jar.raw().unwrap(), "resized-menu=true");
    }

    #[test]
    fn test_assign_rejects_garbage() {
        let mut jar = MemoryCookieJar::new();
        assert!(matches!(jar.assign("no-equals-sign"), Err(PanelError::CookieParse(_))));
    }

    #[test]
    fn test_read_variants() {
        let store = PreferenceStore::new("resized-menu", MemoryCookieJar::with_cookies("resized-menu=true"));
        assert_eq!(store.read().unwrap(), Some(Preference::FOLDED));

        let store = PreferenceStore::new("resized-menu", MemoryCookieJar::new());
        assert_eq!(store.read().unwrap(), None);

        let store = PreferenceStore::new("resized-menu", MemoryCookieJar::with_cookies("resized-menu=xyz"));
        assert!(matches!(store.read(), Err(PanelError::MalformedPreference(_))));

        let store = PreferenceStore::new("resized-menu", MemoryCookieJar::unavailable());
        assert!(matches!(store.read(), Err(PanelError::CookieUnavailable(_))));
    }

    #[test]
    fn test_read_or_falls_back() {
        for raw in ["", "resized-menu=xyz", "resized-menu="] {
            let store = PreferenceStore::new("resized-menu", MemoryCookieJar::with_cookies(raw));
            assert_eq!(store.read_or(Preference::EXPANDED), Preference::EXPANDED);
        }
        let store = PreferenceStore::new("resized-menu", MemoryCookieJar::unavailable());
        assert_eq!(store.read_or(Preference::EXPANDED), Preference::EXPANDED);
    }

    #[test]
    fn test_write_then_read() {
        let jar = MemoryCookieJar::with_cookies("theme=dark");
        let mut store = PreferenceStore::new("resized-menu", jar.clone());

        store.write(Preference::FOLDED).unwrap();
        assert_eq!(jar.get("resized-menu").as_deref(), Some("true"));
        assert_eq!(jar.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.read().unwrap(), Some(Preference::FOLDED));

        store.write(Preference::EXPANDED).unwrap();
        assert_eq!(jar.get("resized-menu").as_deref(), Some("false"));
    }

    #[test]
    fn test_write_to_unavailable_jar_fails() {
        let mut store = PreferenceStore::new("resized-menu", MemoryCookieJar::unavailable());
        assert!(store.write(Preference::FOLDED).is_err());
    }
}
