//! In-memory [`PreferenceStore`] and [`ThemeDom`] implementations.
//!
//! Used by the test suite and by hosts without a browser document. Clicks are
//! simulated with [`MemoryDom::click`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::ThemeError;
use crate::util::dom::{PreferenceStore, ThemeDom, class_swap};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// `HashMap`-backed storage that can be switched off to exercise failure paths.
#[derive(Debug)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    available: Cell<bool>,
    writes: Cell<usize>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            available: Cell::new(true),
            writes: Cell::new(0),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry. Seeding does not count as a write.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Make every subsequent read and write fail (or succeed again).
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Read an entry directly, bypassing availability.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn check_available(&self) -> Result<(), ThemeError> {
        if self.available.get() {
            Ok(())
        } else {
            Err(ThemeError::Storage("storage unavailable".into()))
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.check_available()?;
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.check_available()?;
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// An element: its class tokens and any other attributes.
#[derive(Debug, Default)]
struct MemoryElement {
    classes: Vec<String>,
    attributes: HashMap<String, String>,
}

/// A document with a root element and a flat set of elements by id.
#[derive(Default)]
pub struct MemoryDom {
    root: RefCell<HashMap<String, String>>,
    elements: RefCell<HashMap<String, MemoryElement>>,
    handlers: RefCell<HashMap<String, Vec<Box<dyn FnMut()>>>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryDom::insert_element`].
    #[must_use]
    pub fn with_element(self, id: &str, class: &str) -> Self {
        self.insert_element(id, class);
        self
    }

    /// Add (or replace) an element with the given class attribute. A
    /// replaced element starts with no attributes and no handlers.
    pub fn insert_element(&self, id: &str, class: &str) {
        let element = MemoryElement {
            classes: class.split_whitespace().map(str::to_owned).collect(),
            attributes: HashMap::new(),
        };
        self.elements.borrow_mut().insert(id.to_owned(), element);
        self.handlers.borrow_mut().remove(id);
    }

    /// Remove an element and any handlers attached to it.
    pub fn remove_element(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
        self.handlers.borrow_mut().remove(id);
    }

    /// The element's class attribute, tokens joined by single spaces.
    pub fn class_name(&self, id: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(id)
            .map(|element| element.classes.join(" "))
    }

    /// Number of click handlers attached to an element.
    pub fn handler_count(&self, id: &str) -> usize {
        self.handlers.borrow().get(id).map_or(0, Vec::len)
    }

    /// Simulate a click. Returns `true` if at least one handler ran.
    ///
    /// There is no event object here, so the default-action and propagation
    /// suppression promised by [`ThemeDom::on_click`] is only exercised by
    /// the browser adapter.
    pub fn click(&self, id: &str) -> bool {
        if !self.has_element(id) {
            return false;
        }
        // Handlers mutate the DOM, so run them with the handler map released.
        let Some(mut running) = self.handlers.borrow_mut().remove(id) else {
            return false;
        };
        for handler in &mut running {
            handler();
        }
        let fired = !running.is_empty();
        let mut handlers = self.handlers.borrow_mut();
        let slot = handlers.entry(id.to_owned()).or_default();
        running.append(slot);
        *slot = running;
        fired
    }

    fn missing(id: &str) -> ThemeError {
        ThemeError::Dom(format!("no element #{id}"))
    }
}

impl ThemeDom for MemoryDom {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.borrow().get(name).cloned()
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.root.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn element_attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.borrow().get(id)?.attributes.get(name).cloned()
    }

    fn set_element_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), ThemeError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements.get_mut(id).ok_or_else(|| Self::missing(id))?;
        element.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn replace_classes(&self, id: &str, remove: &str, add: &str) -> Result<(), ThemeError> {
        let mut elements = self.elements.borrow_mut();
        let tokens = &mut elements.get_mut(id).ok_or_else(|| Self::missing(id))?.classes;
        let (drops, adds) = class_swap(remove, add);
        tokens.retain(|token| !drops.contains(&token.as_str()));
        for token in adds {
            if !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_owned());
            }
        }
        Ok(())
    }

    fn on_click(&self, id: &str, handler: Box<dyn FnMut()>) -> Result<(), ThemeError> {
        if !self.has_element(id) {
            return Err(Self::missing(id));
        }
        self.handlers
            .borrow_mut()
            .entry(id.to_owned())
            .or_default()
            .push(handler);
        Ok(())
    }
}
