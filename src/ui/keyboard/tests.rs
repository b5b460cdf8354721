use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, edit_panel_visible: bool) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, edit_panel_visible);
        });
    });

    events
}

#[test]
fn test_ctrl_z_emits_undo_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND),
        false,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
}

#[test]
fn test_ctrl_y_emits_redo_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::Y, egui::Modifiers::COMMAND),
        false,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
}

#[test]
fn test_ctrl_shift_z_emits_redo_intent() {
    let events = collect_with_key_event(
        key_event(
            egui::Key::Z,
            egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
        ),
        false,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::RedoRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::UndoRequested)));
}

#[test]
fn test_enter_confirms_open_panel() {
    let events = collect_with_key_event(
        key_event(egui::Key::Enter, egui::Modifiers::default()),
        true,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::EditPanelConfirmed)));
}

#[test]
fn test_escape_without_panel_does_nothing() {
    let events = collect_with_key_event(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        false,
    );

    assert!(events.is_empty());
}

#[test]
fn test_ctrl_q_requests_exit() {
    let events = collect_with_key_event(
        key_event(egui::Key::Q, egui::Modifiers::COMMAND),
        false,
    );

    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], AppIntent::ExitRequested));
}
