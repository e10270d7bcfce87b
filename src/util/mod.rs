//! Utility helpers behind the controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser/environment concerns are isolated here so the controller can be
//! driven by in-memory collaborators in tests and by `web-sys` in the page.

pub mod boot;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod dom;
pub mod memory;
