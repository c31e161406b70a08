#![cfg(not(feature = "csr"))]

use futures::executor::block_on;

use super::*;

fn fields() -> ContactFields {
    ContactFields {
        name: "Jo".to_owned(),
        email: "jo@x.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello".to_owned(),
    }
}

fn config() -> EmailJsConfig {
    EmailJsConfig {
        public_key: "pk".to_owned(),
        service_id: "service_a".to_owned(),
        template_id: "template_b".to_owned(),
    }
}

#[test]
fn build_request_maps_identifiers() {
    let req = build_request(&config(), &fields());
    assert_eq!(req.service_id, "service_a");
    assert_eq!(req.template_id, "template_b");
    assert_eq!(req.user_id, "pk");
    assert_eq!(req.template_params.subject, "Hi");
}

#[test]
fn request_serializes_in_emailjs_shape() {
    let json = serde_json::to_value(build_request(&config(), &fields())).unwrap();
    assert_eq!(json["user_id"], "pk");
    assert_eq!(json["template_params"]["name"], "Jo");
    assert_eq!(json["template_params"]["email"], "jo@x.com");
    assert_eq!(json["template_params"]["message"], "Hello");
}

#[test]
fn unavailable_capability_rejects() {
    let result = block_on(EmailCapability::Unavailable.send(&fields()));
    assert_eq!(result, Err(SendError::Unavailable));
}

#[test]
fn native_build_cannot_reach_emailjs() {
    let result = block_on(EmailCapability::EmailJs(config()).send(&fields()));
    assert!(matches!(result, Err(SendError::Transport(_))));
}

#[test]
fn capability_availability() {
    assert!(!EmailCapability::default().is_available());
    assert!(EmailCapability::EmailJs(config()).is_available());
}

#[test]
fn send_error_messages() {
    assert_eq!(SendError::Status(503).to_string(), "email service responded with status 503");
    assert_eq!(SendError::Unavailable.to_string(), "email capability unavailable");
}
