//! Page components.
//!
//! Each section of the portfolio is its own component; behavior that outlives
//! a single render (theme, toasts) comes in through context.

pub mod contact_form;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod projects;
pub mod skills;
pub mod theme_toggle;
pub mod toaster;
