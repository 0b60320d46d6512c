use super::*;

#[test]
fn record_id_is_shared_by_both_variants() {
    assert_eq!(Action::ViewDetails("42".to_owned()).record_id(), "42");
    assert_eq!(Action::Repeat("7".to_owned()).record_id(), "7");
}

#[test]
fn view_notice_names_record() {
    let notice = Action::ViewDetails("42".to_owned()).notice();
    assert!(notice.starts_with("Просмотр деталей проверки 42"));
}

#[test]
fn repeat_notice_names_record_and_intent() {
    let notice = Action::Repeat("c-9".to_owned()).notice();
    assert!(notice.contains("c-9"));
    assert!(notice.contains("теми же параметрами"));
}
