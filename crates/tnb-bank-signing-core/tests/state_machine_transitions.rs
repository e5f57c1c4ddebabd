use tnb_bank_signing_core::{
    editor_transition, BankSigningTile, EditorAction, EditorState, EditorToggle,
};

#[test]
fn editor_open_close_round_trip() {
    let (s1, t1) = editor_transition(EditorState::Closed, EditorAction::OpenEditor)
        .expect("closed -> open");
    assert_eq!(s1, EditorState::Open);
    assert_eq!(t1.from, EditorState::Closed);
    let (s2, t2) = editor_transition(s1, EditorAction::Close).expect("open -> closed");
    assert_eq!(s2, EditorState::Closed);
    assert_eq!(t2.reason, "overlay closed");
}

#[test]
fn open_while_open_is_rejected() {
    let err = editor_transition(EditorState::Open, EditorAction::OpenEditor)
        .expect_err("must fail");
    assert!(err.to_string().contains("illegal editor transition"));
}

#[test]
fn close_while_closed_is_rejected() {
    let err =
        editor_transition(EditorState::Closed, EditorAction::Close).expect_err("must fail");
    assert!(err.to_string().contains("Closed"));
}

#[test]
fn toggle_starts_closed_and_ignores_rejected_actions() {
    let mut toggle = EditorToggle::default();
    assert_eq!(toggle.state(), EditorState::Closed);
    assert!(toggle.apply(EditorAction::Close).is_err());
    assert!(!toggle.is_open());
    toggle.apply(EditorAction::OpenEditor).expect("open");
    assert!(toggle.is_open());
}

#[test]
fn tile_instances_do_not_share_editor_state() {
    let mut first = BankSigningTile::new();
    let second = BankSigningTile::new();
    assert_eq!(first.activate_action_button(), EditorState::Open);
    assert_eq!(first.activate_action_button(), EditorState::Open);
    assert!(!second.editor_visible());
    assert_eq!(first.close_editor(), EditorState::Closed);
}
