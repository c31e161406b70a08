//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each model is plain Rust with no reactive types so it can be unit tested
//! without a browser; components wrap them in signals.

pub mod contact;
pub mod notification;
pub mod theme;
