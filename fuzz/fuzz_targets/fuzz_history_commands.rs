#![no_main]

use circle_drawer::app::projection::project;
use circle_drawer::{AppController, AppIntent, AppState, Position};
use libfuzzer_sys::fuzz_target;

// Jedes Byte-Paar wird als Intent interpretiert; nach jedem Schritt müssen
// Cursor-Grenzen und Projektion konsistent sein.
fuzz_target!(|data: &[u8]| {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for chunk in data.chunks(2) {
        let arg = chunk.get(1).copied().unwrap_or(0) as f32;
        let intent = match chunk[0] % 5 {
            0 => AppIntent::SurfaceClicked {
                position: Position::new(arg, 255.0 - arg),
            },
            1 => AppIntent::DiameterChanged { diameter: arg },
            2 => AppIntent::EditPanelConfirmed,
            3 => AppIntent::UndoRequested,
            _ => AppIntent::RedoRequested,
        };
        let _ = controller.handle_intent(&mut state, intent);

        let history = &state.history;
        assert!(history.cursor() >= -1);
        assert!(history.active_len() <= history.len());
        assert_eq!(project(history).len(), state.view.scene.circles.len());
        assert_eq!(state.edit_panel_visible(), history.current().is_some_and(|a| a.is_drawing()));
    }
});
