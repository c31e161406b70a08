//! EmailJS delivery for the contact form.
//!
//! Client-side (csr): a JSON `POST` to the EmailJS REST endpoint via `gloo-net`.
//! Native builds: the call always fails, which routes the submitter to the
//! `mailto:` fallback exactly as an unavailable capability would.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`SendError`]. Callers log it and fall back;
//! nothing downstream branches on the variant.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use serde::Serialize;

use crate::state::contact::ContactFields;

/// REST endpoint for template-based sends.
pub const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifiers addressing one EmailJS account, service and template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

/// Whether the remote email capability exists in this build.
///
/// Resolved once at startup; the submitter never probes for it at runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EmailCapability {
    #[default]
    Unavailable,
    EmailJs(EmailJsConfig),
}

impl EmailCapability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::EmailJs(_))
    }
}

/// Opaque remote-send failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("email capability unavailable")]
    Unavailable,
    #[error("email transport failed: {0}")]
    Transport(String),
    #[error("email service responded with status {0}")]
    Status(u16),
}

/// Something that can deliver a contact message.
#[allow(async_fn_in_trait)]
pub trait EmailTransport {
    /// Deliver `fields`. Any error is treated as a single failure class.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] when the message was not accepted.
    async fn send(&self, fields: &ContactFields) -> Result<(), SendError>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// JSON body accepted by [`SEND_URL`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

pub fn build_request(config: &EmailJsConfig, fields: &ContactFields) -> SendRequest {
    SendRequest {
        service_id: config.service_id.clone(),
        template_id: config.template_id.clone(),
        user_id: config.public_key.clone(),
        template_params: TemplateParams {
            name: fields.name.clone(),
            email: fields.email.clone(),
            subject: fields.subject.clone(),
            message: fields.message.clone(),
        },
    }
}

impl EmailTransport for EmailCapability {
    async fn send(&self, fields: &ContactFields) -> Result<(), SendError> {
        match self {
            Self::Unavailable => Err(SendError::Unavailable),
            Self::EmailJs(config) => post(&build_request(config, fields)).await,
        }
    }
}

async fn post(request: &SendRequest) -> Result<(), SendError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(SEND_URL)
            .json(request)
            .map_err(|e| SendError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(SendError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(SendError::Transport("not available outside the browser".to_owned()))
    }
}
