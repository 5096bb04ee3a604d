use super::*;
use std::cell::Cell;

#[test]
fn create_element_validates_names() {
    let doc = MemoryDocument::new();
    assert!(doc.create_element("div").is_ok());
    assert!(doc.create_element("my-widget").is_ok());
    assert!(doc.create_element("").is_err());
    assert!(doc.create_element("1div").is_err());
    assert!(doc.create_element("di v").is_err());
    assert!(doc.create_element("<div>").is_err());
}

#[test]
fn create_element_lowercases_tag() {
    let doc = MemoryDocument::new();
    assert_eq!(doc.create_element("DIV").expect("div").tag(), "div");
}

#[test]
fn with_root_exposes_root_by_id() {
    let doc = MemoryDocument::with_root("root");
    let root = doc.element_by_id("root").expect("root");
    assert_eq!(root.tag(), "div");
    assert_eq!(doc.body().children(), vec![root]);
    assert!(doc.element_by_id("other").is_none());
}

#[test]
fn element_by_id_finds_nested_attached_elements() {
    let doc = MemoryDocument::with_root("root");
    let root = doc.element_by_id("root").expect("root");
    let inner = doc.create_element("span").expect("span");
    inner.set_attribute("id", "inner").expect("id");
    root.append_child(&inner).expect("append");
    assert_eq!(doc.element_by_id("inner"), Some(inner));
}

#[test]
fn set_attribute_replaces_existing_value() {
    let doc = MemoryDocument::new();
    let e = doc.create_element("div").expect("div");
    e.set_attribute("class", "a").expect("class");
    e.set_attribute("class", "b").expect("class");
    assert_eq!(e.attribute("class").as_deref(), Some("b"));
}

#[test]
fn append_and_clear_children() {
    let doc = MemoryDocument::new();
    let parent = doc.create_element("div").expect("div");
    let a = doc.create_element("p").expect("p");
    let b = doc.create_element("p").expect("p");
    parent.append_child(&a).expect("a");
    parent.append_child(&b).expect("b");
    assert_eq!(parent.children(), vec![a, b]);

    parent.clear_children();
    assert!(parent.children().is_empty());
}

#[test]
fn append_self_is_rejected() {
    let doc = MemoryDocument::new();
    let e = doc.create_element("div").expect("div");
    assert!(matches!(e.append_child(&e), Err(DomError::AppendChild(_))));
}

#[test]
fn set_text_replaces_children() {
    let doc = MemoryDocument::new();
    let parent = doc.create_element("div").expect("div");
    parent.append_child(&doc.create_element("p").expect("p")).expect("append");
    parent.set_text("plain");
    assert_eq!(parent.text(), "plain");
    assert!(parent.children().is_empty());
}

#[test]
fn click_runs_handlers_in_registration_order() {
    let doc = MemoryDocument::new();
    let button = doc.create_element("button").expect("button");
    let log = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second"] {
        let log = log.clone();
        button.on_click(Box::new(move || log.borrow_mut().push(tag))).expect("listen");
    }
    button.click();
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn submit_collects_named_descendant_values() {
    let doc = MemoryDocument::new();
    let form = doc.create_element("form").expect("form");
    let title = doc.create_element("input").expect("input");
    title.set_attribute("name", "title").expect("name");
    title.set_value("Hello");
    let wrapper = doc.create_element("div").expect("div");
    let body = doc.create_element("textarea").expect("textarea");
    body.set_attribute("name", "content").expect("name");
    body.set_value("World");
    wrapper.append_child(&body).expect("append");
    form.append_child(&title).expect("append");
    form.append_child(&wrapper).expect("append");

    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    form.on_submit(Box::new(move |fields: &FormFields| *sink.borrow_mut() = Some(fields.clone()))).expect("listen");
    form.submit();

    let fields = seen.borrow().clone().expect("submitted");
    assert_eq!(fields.get("title"), Some("Hello"));
    assert_eq!(fields.get("content"), Some("World"));
}

#[test]
fn handlers_may_mutate_the_tree_during_dispatch() {
    let doc = MemoryDocument::with_root("root");
    let root = doc.element_by_id("root").expect("root");
    let button = doc.create_element("button").expect("button");
    root.append_child(&button).expect("append");

    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let root_handle = root.clone();
    button
        .on_click(Box::new(move || {
            counter.set(counter.get() + 1);
            root_handle.clear_children();
        }))
        .expect("listen");

    button.click();
    assert_eq!(clicks.get(), 1);
    assert!(root.children().is_empty());
}

#[test]
fn find_named_searches_depth_first() {
    let doc = MemoryDocument::new();
    let form = doc.create_element("form").expect("form");
    let input = doc.create_element("input").expect("input");
    input.set_attribute("name", "title").expect("name");
    form.append_child(&input).expect("append");
    assert_eq!(form.find_named("title"), Some(input));
    assert_eq!(form.find_named("content"), None);
}
