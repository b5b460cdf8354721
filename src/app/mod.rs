//! Application-Layer: Controller, State, Events und History.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod projection;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand einer Zeichen-Session (History, Panel, View).
pub mod state;

pub use crate::core::{CircleAction, LifecycleState, Position};
pub use command_log::{CommandLog, LoggedCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{ActionHistory, HistoryCommand, Transition};
pub use projection::project;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditPanelState, ViewState};
