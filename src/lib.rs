//! Circle Drawer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    ActionHistory, AppCommand, AppController, AppIntent, AppState, EditPanelState,
    HistoryCommand, Transition, ViewState,
};
pub use crate::core::{ActionKind, CircleAction, LifecycleState, Position};
pub use shared::{DiameterRange, EditorOptions, RenderScene, SceneCircle, SceneStyle};
