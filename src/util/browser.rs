//! `localStorage` and `document` adapters for the controller traits.
//!
//! Only compiled with the `hydrate` feature; everything else in the crate
//! runs against [`MemoryStore`](crate::MemoryStore) / [`MemoryDom`](crate::MemoryDom)
//! when there is no browser.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Storage};

use crate::error::ThemeError;
use crate::util::dom::{PreferenceStore, ThemeDom, class_swap};

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`, looked up on every call so a storage that becomes
/// available later (or is revoked) is picked up.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, ThemeError> {
        let window = web_sys::window().ok_or_else(|| ThemeError::Storage("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| ThemeError::Storage(js_error(e)))?
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_error(e)))
    }
}

/// The live page document.
#[derive(Clone, Debug)]
pub struct DocumentDom {
    document: Document,
}

impl DocumentDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Result<Element, ThemeError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ThemeError::Dom(format!("no element #{id}")))
    }
}

impl ThemeDom for DocumentDom {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".into()))?;
        root.set_attribute(name, value).map_err(|e| ThemeError::Dom(js_error(e)))
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn element_attribute(&self, id: &str, name: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.get_attribute(name)
    }

    fn set_element_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element(id)?
            .set_attribute(name, value)
            .map_err(|e| ThemeError::Dom(js_error(e)))
    }

    fn replace_classes(&self, id: &str, remove: &str, add: &str) -> Result<(), ThemeError> {
        let class_list = self.element(id)?.class_list();
        let (drops, adds) = class_swap(remove, add);
        for token in drops {
            class_list.remove_1(token).map_err(|e| ThemeError::Dom(js_error(e)))?;
        }
        for token in adds {
            class_list.add_1(token).map_err(|e| ThemeError::Dom(js_error(e)))?;
        }
        Ok(())
    }

    fn on_click(&self, id: &str, mut handler: Box<dyn FnMut()>) -> Result<(), ThemeError> {
        let element = self.element(id)?;
        let cb = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            handler();
        }) as Box<dyn FnMut(Event)>);
        element
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(js_error(e)))?;
        // The listener lives as long as the page.
        cb.forget();
        Ok(())
    }
}
