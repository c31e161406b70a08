//! `mailto:` link construction for the contact fallback.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use crate::state::contact::ContactFields;

/// Build a `mailto:` URI addressed to `recipient` carrying the form values.
///
/// The body uses CRLF line breaks; both subject and body are percent-encoded
/// as URI components, so each break appears as `%0D%0A`.
pub fn build_mailto(recipient: &str, fields: &ContactFields) -> String {
    let body = format!(
        "Name: {}\r\nEmail: {}\r\n\r\nMessage:\r\n{}",
        fields.name, fields.email, fields.message
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&fields.subject),
        urlencoding::encode(&body)
    )
}

/// Navigate the current window to `href`, handing off to the mail client.
pub fn open_mail_client(href: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.location().set_href(href).is_err() {
            leptos::logging::warn!("could not open mail client");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}
