//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure render/dispatch logic and the diagnostic channel live here so pages
//! and components stay thin and the behavior is testable without a browser.

pub mod actions;
pub mod diagnostics;
pub mod history_view;
