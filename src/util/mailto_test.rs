use super::*;

fn fields(name: &str, email: &str, subject: &str, message: &str) -> ContactFields {
    ContactFields {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
    }
}

#[test]
fn builds_expected_uri_for_simple_values() {
    let uri = build_mailto("simphiweasanda64@gmail.com", &fields("Jo", "jo@x.com", "Hi", "Hello"));
    assert_eq!(
        uri,
        "mailto:simphiweasanda64@gmail.com?subject=Hi&body=\
         Name%3A%20Jo%0D%0AEmail%3A%20jo%40x.com%0D%0A%0D%0AMessage%3A%0D%0AHello"
    );
}

#[test]
fn subject_is_percent_encoded() {
    let uri = build_mailto("a@b.c", &fields("A", "a@b.c", "Job offer & more?", "x"));
    assert!(uri.contains("subject=Job%20offer%20%26%20more%3F&"));
}

#[test]
fn message_line_breaks_survive_encoding() {
    let uri = build_mailto("a@b.c", &fields("A", "a@b.c", "S", "line one\nline two"));
    assert!(uri.ends_with("Message%3A%0D%0Aline%20one%0Aline%20two"));
}

#[test]
fn ampersand_in_message_cannot_break_query() {
    let uri = build_mailto("a@b.c", &fields("A", "a@b.c", "S", "x&body=y"));
    assert_eq!(uri.matches("&body=").count(), 1);
}

#[test]
fn recipient_is_fixed_prefix() {
    let uri = build_mailto("me@example.org", &fields("A", "b@c.d", "S", "M"));
    assert!(uri.starts_with("mailto:me@example.org?subject="));
}
