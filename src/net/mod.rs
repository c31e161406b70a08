//! Network collaborators.
//!
//! The site has no backend of its own; the only remote call is the EmailJS
//! send used by the contact form.

pub mod emailjs;
