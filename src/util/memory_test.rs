use super::*;

use std::rc::Rc;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme").unwrap(), None);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn store_seeded_entry_is_not_a_write() {
    let store = MemoryStore::with_entry("theme", "dark");
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn store_set_overwrites_and_counts() {
    let store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    store.set("theme", "light").unwrap();
    assert_eq!(store.peek("theme").as_deref(), Some("light"));
    assert_eq!(store.write_count(), 2);
}

#[test]
fn store_unavailable_fails_reads_and_writes() {
    let store = MemoryStore::with_entry("theme", "dark");
    store.set_available(false);
    assert!(matches!(store.get("theme"), Err(ThemeError::Storage(_))));
    assert!(matches!(store.set("theme", "light"), Err(ThemeError::Storage(_))));
    assert_eq!(store.peek("theme").as_deref(), Some("dark"));
}

// =============================================================
// MemoryDom classes
// =============================================================

#[test]
fn replace_classes_swaps_icon_tokens() {
    let dom = MemoryDom::new().with_element("themeIcon", "bi bi-sun-fill");
    dom.replace_classes("themeIcon", "bi bi-sun-fill", "bi bi-moon-fill").unwrap();
    assert_eq!(dom.class_name("themeIcon").as_deref(), Some("bi bi-moon-fill"));
}

#[test]
fn replace_classes_keeps_unrelated_tokens() {
    let dom = MemoryDom::new().with_element("themeIcon", "me-1 bi bi-moon-fill");
    dom.replace_classes("themeIcon", "bi bi-moon-fill", "bi bi-sun-fill").unwrap();
    assert_eq!(dom.class_name("themeIcon").as_deref(), Some("me-1 bi bi-sun-fill"));
}

#[test]
fn replace_classes_on_empty_class_adds_all_tokens() {
    let dom = MemoryDom::new().with_element("themeIcon", "");
    dom.replace_classes("themeIcon", "bi bi-moon-fill", "bi bi-sun-fill").unwrap();
    assert_eq!(dom.class_name("themeIcon").as_deref(), Some("bi bi-sun-fill"));
}

#[test]
fn replace_classes_missing_element_is_dom_error() {
    let dom = MemoryDom::new();
    let err = dom.replace_classes("themeIcon", "a", "b").unwrap_err();
    assert!(matches!(err, ThemeError::Dom(_)));
}

#[test]
fn class_swap_keeps_shared_tokens() {
    let (drops, adds) = class_swap("bi bi-sun-fill", "bi bi-moon-fill");
    assert_eq!(drops, vec!["bi-sun-fill"]);
    assert_eq!(adds, vec!["bi", "bi-moon-fill"]);
}

// =============================================================
// MemoryDom clicks
// =============================================================

#[test]
fn click_without_handlers_reports_false() {
    let dom = MemoryDom::new().with_element("themeToggle", "btn");
    assert!(!dom.click("themeToggle"));
    assert!(!dom.click("missing"));
}

#[test]
fn click_runs_every_handler_each_time() {
    let dom = MemoryDom::new().with_element("themeToggle", "btn");
    let hits = Rc::new(Cell::new(0));
    for _ in 0..2 {
        let hits = Rc::clone(&hits);
        dom.on_click("themeToggle", Box::new(move || hits.set(hits.get() + 1))).unwrap();
    }
    assert!(dom.click("themeToggle"));
    assert!(dom.click("themeToggle"));
    assert_eq!(hits.get(), 4);
    assert_eq!(dom.handler_count("themeToggle"), 2);
}

#[test]
fn on_click_missing_element_is_dom_error() {
    let dom = MemoryDom::new();
    assert!(dom.on_click("themeToggle", Box::new(|| {})).is_err());
    assert_eq!(dom.handler_count("themeToggle"), 0);
}

#[test]
fn removed_element_drops_handlers() {
    let dom = MemoryDom::new().with_element("themeToggle", "btn");
    dom.on_click("themeToggle", Box::new(|| {})).unwrap();
    dom.remove_element("themeToggle");
    assert!(!dom.click("themeToggle"));
    assert_eq!(dom.handler_count("themeToggle"), 0);
}

#[test]
fn replacing_element_drops_handlers_and_attributes() {
    let dom = MemoryDom::new().with_element("themeToggle", "btn");
    dom.on_click("themeToggle", Box::new(|| {})).unwrap();
    dom.set_element_attribute("themeToggle", "data-theme-bound", "true").unwrap();

    dom.insert_element("themeToggle", "btn");
    assert_eq!(dom.handler_count("themeToggle"), 0);
    assert_eq!(dom.element_attribute("themeToggle", "data-theme-bound"), None);
}

#[test]
fn element_attributes_round_trip() {
    let dom = MemoryDom::new().with_element("themeToggle", "btn");
    assert_eq!(dom.element_attribute("themeToggle", "title"), None);
    dom.set_element_attribute("themeToggle", "title", "Toggle theme").unwrap();
    assert_eq!(
        dom.element_attribute("themeToggle", "title").as_deref(),
        Some("Toggle theme")
    );
    assert_eq!(dom.class_name("themeToggle").as_deref(), Some("btn"));
}

#[test]
fn element_attribute_on_missing_element() {
    let dom = MemoryDom::new();
    assert_eq!(dom.element_attribute("themeToggle", "title"), None);
    let err = dom.set_element_attribute("themeToggle", "title", "x").unwrap_err();
    assert!(matches!(err, ThemeError::Dom(_)));
}

#[test]
fn root_attribute_round_trips() {
    let dom = MemoryDom::new();
    assert_eq!(dom.root_attribute("data-theme"), None);
    dom.set_root_attribute("data-theme", "dark").unwrap();
    assert_eq!(dom.root_attribute("data-theme").as_deref(), Some("dark"));
}
