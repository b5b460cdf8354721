//! Application State — zentrale Datenhaltung.

mod app_state;
mod edit_panel;
mod view;

pub use app_state::AppState;
pub use edit_panel::EditPanelState;
pub use view::ViewState;
