//! Core-Domänentypen für den Kreis-Editor.
//!
//! - Position: Mittelpunkt relativ zum Zeichenflächen-Ursprung
//! - CircleAction: Einzelner History-Eintrag (Platzieren / Durchmesser festlegen)

mod circle_action;
mod position;

pub use circle_action::{ActionKind, CircleAction, LifecycleState};
pub use position::Position;
