use super::*;

#[test]
fn record_missing_fields_default_to_empty() {
    let record: Record = serde_json::from_str(r#"{"title":"Only title"}"#).expect("record");
    assert_eq!(record, Record::new("Only title", ""));
    let record: Record = serde_json::from_str("{}").expect("record");
    assert_eq!(record, Record::default());
}

#[test]
fn record_ignores_unknown_fields() {
    let record: Record =
        serde_json::from_str(r#"{"title":"T","content":"C","createdAt":12}"#).expect("record");
    assert_eq!(record, Record::new("T", "C"));
}

#[test]
fn record_serializes_title_and_content() {
    let json = serde_json::to_value(Record::new("A", "B")).expect("json");
    assert_eq!(json, serde_json::json!({"title": "A", "content": "B"}));
}

#[test]
fn session_optional_fields_default() {
    let session: Session = serde_json::from_str(r#"{"uid":"u1"}"#).expect("session");
    assert_eq!(session, Session::new("u1"));
}

#[test]
fn records_preserve_delivery_order() {
    let records: Records = [("b", Record::new("B", "")), ("a", Record::new("A", ""))]
        .into_iter()
        .collect();
    let ids: Vec<&str> = records.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn records_insert_replaces_existing_id_in_place() {
    let mut records = Records::new();
    records.insert("id1", Record::new("X", ""));
    records.insert("id2", Record::new("Y", ""));
    records.insert("id1", Record::new("X2", ""));
    assert_eq!(records.len(), 2);
    assert_eq!(records.get("id1").map(|r| r.title.as_str()), Some("X2"));
    let titles: Vec<&str> = records.iter().map(|(_, r)| r.title.as_str()).collect();
    assert_eq!(titles, vec!["X2", "Y"]);
}

#[test]
fn records_default_is_empty() {
    let records = Records::default();
    assert!(records.is_empty());
    assert!(records.get("anything").is_none());
}
