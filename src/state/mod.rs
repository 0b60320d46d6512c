//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `history` owns the loaded records and active filter; `ui` holds transient
//! presentation state. Both are provided as `RwSignal` context by `App`.

pub mod history;
pub mod ui;
