use super::*;
use crate::dom::memory::MemoryDocument;

#[test]
fn el_sets_attributes_in_order_and_text_verbatim() {
    let doc = MemoryDocument::new();
    let button = el(&doc, "button", &[("type", "button"), ("class", "primary")], Some("<b>Save</b>"))
        .expect("button");
    assert_eq!(button.tag(), "button");
    assert_eq!(button.attribute("type").as_deref(), Some("button"));
    assert_eq!(button.attribute("class").as_deref(), Some("primary"));
    assert_eq!(button.text(), "<b>Save</b>");
    assert!(button.children().is_empty());
}

#[test]
fn el_without_text_leaves_text_empty() {
    let doc = MemoryDocument::new();
    let input = el(&doc, "input", &[("name", "title")], None).expect("input");
    assert_eq!(input.text(), "");
    assert_eq!(input.attribute("name").as_deref(), Some("title"));
}

#[test]
fn el_returns_unattached_element() {
    let doc = MemoryDocument::with_root("root");
    let div = el(&doc, "div", &[("id", "fresh")], None).expect("div");
    assert!(doc.element_by_id("fresh").is_none());
    assert_eq!(div.attribute("id").as_deref(), Some("fresh"));
}

#[test]
fn el_propagates_invalid_tag() {
    let doc = MemoryDocument::new();
    let err = el(&doc, "not a tag", &[], Some("x")).expect_err("invalid tag");
    assert!(matches!(err, DomError::CreateElement { ref tag, .. } if tag == "not a tag"));
}

#[test]
fn el_propagates_invalid_attribute() {
    let doc = MemoryDocument::new();
    let err = el(&doc, "div", &[("bad name", "v")], None).expect_err("invalid attribute");
    assert!(matches!(err, DomError::SetAttribute { .. }));
}

#[test]
fn label_builds_label_with_text() {
    let doc = MemoryDocument::new();
    let l = label(&doc, "Title").expect("label");
    assert_eq!(l.tag(), "label");
    assert_eq!(l.text(), "Title");
}

#[test]
fn form_fields_get_returns_first_match() {
    let fields: FormFields = [("title", "A"), ("title", "B"), ("content", "C")].into_iter().collect();
    assert_eq!(fields.get("title"), Some("A"));
    assert_eq!(fields.get("content"), Some("C"));
    assert_eq!(fields.get("missing"), None);
    assert!(!fields.is_empty());
    assert!(FormFields::default().is_empty());
}

#[test]
fn dom_error_messages_name_the_failure() {
    assert_eq!(DomError::MissingRoot("root".into()).to_string(), "no element with id `root`");
    let err = DomError::CreateElement { tag: "1x".into(), message: "invalid character".into() };
    assert_eq!(err.to_string(), "cannot create <1x>: invalid character");
}
