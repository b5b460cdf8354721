//! UI-Komponenten: Toolbar, Bearbeitungspanel, Status-Bar, Input-Handling.

pub mod edit_panel;
pub mod input;
mod keyboard;
pub mod status;
pub mod toolbar;

pub use edit_panel::render_edit_panel;
pub use input::collect_surface_events;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
