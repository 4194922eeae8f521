use super::*;

// =============================================================
// push
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().items.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Welcome");
    let b = state.push(ToastKind::Error, "Registration failed");
    assert!(b > a);
    assert_eq!(
        state.items,
        vec![
            Toast { id: a, kind: ToastKind::Success, message: "Welcome".to_owned() },
            Toast { id: b, kind: ToastKind::Error, message: "Registration failed".to_owned() },
        ]
    );
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..(MAX_VISIBLE_TOASTS + 2) {
        state.push(ToastKind::Error, format!("error {i}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.items[0].message, "error 2");
    assert_eq!(state.items.last().map(|t| t.message.as_str()), Some("error 6"));
}

// =============================================================
// dismiss
// =============================================================

#[test]
fn dismiss_removes_only_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a");
    let b = state.push(ToastKind::Success, "b");
    assert!(state.dismiss(a));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "x");
    assert!(!state.dismiss(99));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Error, "x");
    state.dismiss(a);
    let b = state.push(ToastKind::Error, "y");
    assert_ne!(a, b);
}

#[test]
fn toast_kind_css_modifiers_are_distinct() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
}
