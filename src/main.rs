//! Circle Drawer.
//!
//! Kreise per Klick platzieren, Durchmesser im Panel einstellen,
//! jeder Schritt per Undo/Redo umkehrbar.

use circle_drawer::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Circle Drawer v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(editor_options.window_size)
                .with_title("Circle Drawer"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Circle Drawer",
            options,
            Box::new(|_cc| Ok(Box::new(DrawerApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DrawerApp {
    state: AppState,
    controller: AppController,
}

impl DrawerApp {
    fn new(options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for DrawerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = !events.is_empty();

        self.process_events(events);

        // Szene wurde ggf. neu gebaut → nächsten Frame mit neuem Stand zeichnen
        if has_meaningful_events {
            ctx.request_repaint();
        }
    }
}

impl DrawerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_edit_panel(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                events.extend(ui::collect_surface_events(ui, &response, &self.state));

                render::paint_scene(ui.painter(), rect, &self.state.view.scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
