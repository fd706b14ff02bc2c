//! CSS class lists the controller mutates.
//!
//! `ClassList` is the seam between the toggle logic and whatever owns the
//! element: a live `DOMTokenList` in the browser, or an in-memory
//! [`ClassSet`] for Dioxus-rendered markup and tests.

use std::fmt;
use std::str::FromStr;

use crate::error::PanelError;

/// The class set of a single element.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;

    /// Add `class` unless it is already present.
    fn add(&mut self, class: &str);

    fn remove(&mut self, class: &str);

    /// Flip `class`, returning whether it is present afterwards.
    fn toggle(&mut self, class: &str) -> bool {
        if self.contains(class) {
            self.remove(class);
            false
        } else {
            self.add(class);
            true
        }
    }

    /// Swap `old` for `new` in place. Returns false, changing nothing, when
    /// `old` is absent.
    fn replace(&mut self, old: &str, new: &str) -> bool;
}

/// Ordered, duplicate-free set of class names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: Vec<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Number of times `class` appears; never more than one.
    pub fn occurrences(&self, class: &str) -> usize {
        self.classes.iter().filter(|c| *c == class).count()
    }
}

impl ClassList for ClassSet {
    fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn replace(&mut self, old: &str, new: &str) -> bool {
        let Some(index) = self.classes.iter().position(|c| c == old) else {
            return false;
        };
        if self.contains(new) {
            self.classes.remove(index);
        } else {
            self.classes[index] = new.to_string();
        }
        true
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ClassSet::new();
        for class in iter {
            set.add(class.as_ref());
        }
        set
    }
}

/// Parses a `class` attribute value.
impl FromStr for ClassSet {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.split_whitespace().collect())
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomClassList;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::ClassList;
    use crate::error::PanelError;

    /// Live class list of a DOM element.
    ///
    /// `DOMTokenList` only throws for empty or whitespace tokens, which a
    /// validated `PanelConfig` never produces, so failures are logged rather
    /// than returned.
    #[derive(Clone, Debug)]
    pub struct DomClassList {
        tokens: web_sys::DomTokenList,
    }

    impl DomClassList {
        pub fn new(element: &web_sys::Element) -> Self {
            Self {
                tokens: element.class_list(),
            }
        }

        fn report(result: Result<(), wasm_bindgen::JsValue>, op: &str, class: &str) {
            if let Err(err) = result {
                log::error!("classList.{op}({class:?}) failed: {}", PanelError::from_js(err));
            }
        }
    }

    impl ClassList for DomClassList {
        fn contains(&self, class: &str) -> bool {
            self.tokens.contains(class)
        }

        fn add(&mut self, class: &str) {
            Self::report(self.tokens.add_1(class), "add", class);
        }

        fn remove(&mut self, class: &str) {
            Self::report(self.tokens.remove_1(class), "remove", class);
        }

        fn toggle(&mut self, class: &str) -> bool {
            match self.tokens.toggle(class) {
                Ok(present) => present,
                Err(err) => {
                    log::error!("classList.toggle({class:?}) failed: {}", PanelError::from_js(err));
                    self.tokens.contains(class)
                }
            }
        }

        fn replace(&mut self, old: &str, new: &str) -> bool {
            match self.tokens.replace(old, new) {
                Ok(replaced) => replaced,
                Err(err) => {
                    log::error!("classList.replace({old:?}, {new:?}) failed: {}", PanelError::from_js(err));
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let set: ClassSet = "  col-lg-2   sidebar col-lg-2 ".parse().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "col-lg-2 sidebar");
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut set = ClassSet::new();
        set.add("animated");
        set.add("animated");
        assert_eq!(set.occurrences("animated"), 1);
    }

    #[test]
    fn test_toggle() {
        let mut set: ClassSet = "a b".parse().unwrap();
        assert!(!set.toggle("a"));
        assert!(!set.contains("a"));
        assert!(set.toggle("a"));
        assert_eq!(set.to_string(), "b a");
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut set: ClassSet = "fa fa-compress pull-right".parse().unwrap();
        assert!(set.replace("fa-compress", "fa-expand"));
        assert_eq!(set.to_string(), "fa fa-expand pull-right");

        // Nothing to swap out
        assert!(!set.replace("fa-compress", "fa-expand"));
        assert_eq!(set.to_string(), "fa fa-expand pull-right");
    }

    #[test]
    fn test_replace_onto_existing_class_dedups() {
        let mut set: ClassSet = "x y".parse().unwrap();
        assert!(set.replace("x", "y"));
        assert_eq!(set.to_string(), "y");
    }
}
