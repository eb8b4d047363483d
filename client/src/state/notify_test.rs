use super::*;

#[test]
fn push_appends_in_order() {
    let mut n = Notifications::default();
    n.success("saved");
    n.error("boom");
    let texts: Vec<_> = n.items.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, ["saved", "boom"]);
    assert_eq!(n.items.last().map(|i| i.kind), Some(NoticeKind::Error));
}

#[test]
fn dismiss_removes_only_target() {
    let mut n = Notifications::default();
    let a = n.success("a");
    let b = n.success("b");
    n.dismiss(a);
    assert_eq!(n.items.len(), 1);
    assert_eq!(n.items[0].id, b);
}

#[test]
fn queue_drops_oldest_past_limit() {
    let mut n = Notifications::default();
    for i in 0..(MAX_VISIBLE + 2) {
        n.error(format!("e{i}"));
    }
    assert_eq!(n.items.len(), MAX_VISIBLE);
    assert_eq!(n.items[0].text, "e2");
}

#[test]
fn feedback_constructors_set_kind() {
    assert_eq!(Feedback::success("x").kind, NoticeKind::Success);
    assert_eq!(Feedback::error("x").kind, NoticeKind::Error);
}
