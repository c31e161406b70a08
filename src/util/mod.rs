//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, scrolling, observers)
//! from component markup so the decisions behind them can be tested natively.

pub mod dark_mode;
pub mod header_style;
pub mod mailto;
pub mod nav_scroll;
pub mod reveal;
