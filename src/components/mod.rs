//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context and draw it; rendering
//! decisions come from `util::history_view` so they stay testable.

pub mod filter_bar;
pub mod history_list;
pub mod notice_banner;
