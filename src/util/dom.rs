//! Capability traits for the two things the controller touches: durable
//! key-value storage and the page's DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both traits take `&self`; implementations use interior mutability since
//! everything runs on the single browser UI thread and the click handler
//! holds its own `Rc` handle to each collaborator.

use crate::error::ThemeError;

/// Origin-scoped durable key-value storage (`localStorage` in the browser).
pub trait PreferenceStore {
    /// Read a value; `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if storage is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if storage is unavailable or full.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The slice of the document the controller reads and mutates.
pub trait ThemeDom {
    /// Read an attribute from the document root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute on the document root element.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the root is missing or rejects the write.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Whether an element with this id is currently in the document.
    fn has_element(&self, id: &str) -> bool;

    /// Read an attribute from the element with this id.
    fn element_attribute(&self, id: &str, name: &str) -> Option<String>;

    /// Set an attribute on the element with this id.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the element is missing or rejects the write.
    fn set_element_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Swap one set of class tokens for another on an element, leaving
    /// unrelated classes alone. See [`class_swap`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the element is missing or rejects the change.
    fn replace_classes(&self, id: &str, remove: &str, add: &str) -> Result<(), ThemeError>;

    /// Attach a click handler. Implementations suppress the click's default
    /// action and propagation before invoking `handler`, and keep the handler
    /// alive for the rest of the page session.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the element is missing or the listener
    /// cannot be attached.
    fn on_click(&self, id: &str, handler: Box<dyn FnMut()>) -> Result<(), ThemeError>;
}

/// Split a swap from `remove` to `add` into tokens to drop and tokens to add.
///
/// Tokens shared by both strings (`bi` in `"bi bi-sun-fill"` / `"bi bi-moon-fill"`)
/// are not dropped, so they keep their position in the class list.
pub fn class_swap<'a>(remove: &'a str, add: &'a str) -> (Vec<&'a str>, Vec<&'a str>) {
    let adds: Vec<&str> = add.split_whitespace().collect();
    let drops = remove
        .split_whitespace()
        .filter(|token| !adds.contains(token))
        .collect();
    (drops, adds)
}
