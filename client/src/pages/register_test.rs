use super::*;

#[test]
fn submit_label_reflects_phase() {
    assert_eq!(submit_label(FormPhase::Editing), "Register");
    assert_eq!(submit_label(FormPhase::Submitting), "Registering...");
    assert_eq!(submit_label(FormPhase::Registered), "Register");
}

#[test]
fn submit_enabled_only_while_editing() {
    assert!(!submit_disabled(FormPhase::Editing));
    assert!(submit_disabled(FormPhase::Submitting));
    assert!(submit_disabled(FormPhase::Registered));
}
