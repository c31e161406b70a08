//! Site-wide settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is a static bundle with no runtime environment, so everything here
//! is fixed at build time. EmailJS credentials come from `option_env!` so they
//! never live in the source tree; a build without them ships the `mailto:`
//! fallback only.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::emailjs::{EmailCapability, EmailJsConfig};

/// Address every contact message is delivered to.
pub const RECIPIENT: &str = "simphiweasanda64@gmail.com";

/// Height of the fixed header; in-page scroll targets land this far below the top.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Scroll offset past which the header switches to its "scrolled" style.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Timings for the toast lifecycle.
pub const NOTIFY_ENTER_DELAY_MS: u32 = 100;
pub const NOTIFY_VISIBLE_MS: u32 = 5_000;
pub const NOTIFY_EXIT_MS: u32 = 300;

/// Delay between a level bar being revealed and its width animating.
pub const LEVEL_BAR_DELAY_MS: u32 = 300;

/// Resolved settings handed to the app root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub recipient: String,
    pub email: EmailCapability,
}

impl SiteConfig {
    /// Build the configuration baked into this binary.
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
            option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
            option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
        )
    }

    /// Assemble a configuration from optional EmailJS credentials.
    ///
    /// All three identifiers must be present and non-blank for the remote
    /// capability to be considered available.
    pub fn from_parts(public_key: Option<&str>, service_id: Option<&str>, template_id: Option<&str>) -> Self {
        let present = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);
        let email = match (present(public_key), present(service_id), present(template_id)) {
            (Some(public_key), Some(service_id), Some(template_id)) => {
                EmailCapability::EmailJs(EmailJsConfig { public_key, service_id, template_id })
            }
            _ => EmailCapability::Unavailable,
        };
        Self { recipient: RECIPIENT.to_owned(), email }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}
