use super::*;

#[test]
fn ctrl_c_keeps_control_modifier() {
    let event = ct::KeyEvent::new(ct::KeyCode::Char('c'), ct::KeyModifiers::CONTROL);
    let converted = into_key_event(event);
    assert!(converted.is_ctrl('c'));
    assert_eq!(converted.kind, KeyEventKind::Press);
}

#[test]
fn back_tab_implies_shift() {
    let event = ct::KeyEvent::new(ct::KeyCode::BackTab, ct::KeyModifiers::NONE);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::BackTab);
    assert!(converted.modifiers.contains(KeyModifiers::SHIFT));
}

#[test]
fn unmapped_keys_become_unknown() {
    let event = ct::KeyEvent::new(ct::KeyCode::CapsLock, ct::KeyModifiers::NONE);
    assert_eq!(into_key_event(event).code, KeyCode::Unknown);
}

#[test]
fn mouse_moves_keep_position() {
    let event = ct::Event::Mouse(ct::MouseEvent {
        kind: ct::MouseEventKind::Moved,
        column: 7,
        row: 3,
        modifiers: ct::KeyModifiers::ALT | ct::KeyModifiers::SHIFT,
    });
    let converted = into_input_event(event);
    let mouse = converted.as_mouse().copied();
    assert_eq!(
        mouse,
        Some(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::ALT | KeyModifiers::SHIFT,
        })
    );
}

#[test]
fn paste_and_resize_pass_through() {
    assert_eq!(
        into_input_event(ct::Event::Paste("dock".to_string())),
        InputEvent::Paste("dock".to_string())
    );
    assert_eq!(into_input_event(ct::Event::Resize(80, 24)), InputEvent::Resize(80, 24));
}
