use super::*;
use crate::backend::memory::MemoryBackend;
use crate::backend::Session;
use crate::dom::memory::{MemoryDocument, MemoryElement};

fn build() -> (AuthControls<MemoryElement>, Rc<MemoryBackend>) {
    let doc = MemoryDocument::new();
    let backend = Rc::new(MemoryBackend::with_user(Session::new("u1")));
    let controls = AuthControls::build(&doc, &backend).expect("controls");
    (controls, backend)
}

#[test]
fn controls_have_expected_tags_and_labels() {
    let (controls, _) = build();
    assert_eq!(controls.sign_in.tag(), "button");
    assert_eq!(controls.sign_in.attribute("type").as_deref(), Some("button"));
    assert_eq!(controls.sign_in.text(), SIGN_IN_LABEL);
    assert_eq!(controls.sign_out.text(), SIGN_OUT_LABEL);
    assert_eq!(controls.app_marker.tag(), "div");
    assert_eq!(controls.app_marker.text(), APP_MARKER_TEXT);
}

#[test]
fn sign_in_click_starts_provider_sign_in() {
    let (controls, backend) = build();
    controls.sign_in.click();
    assert_eq!(backend.session(), Some(Session::new("u1")));
}

#[test]
fn sign_out_click_ends_session() {
    let (controls, backend) = build();
    controls.sign_in.click();
    controls.sign_out.click();
    assert!(backend.session().is_none());
}
